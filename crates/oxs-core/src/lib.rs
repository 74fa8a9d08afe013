//! OpenAPI 3.x document model, code-sample synthesizer, and consistency
//! checker.
//!
//! [`synth::annotate`] walks a parsed specification and attaches boilerplate
//! `x-codeSamples` entries (cURL, Python, JavaScript) to operations that lack
//! them. [`check::check`] is a read-only pass over the same document that
//! accumulates [`check::Finding`]s instead of failing fast.

pub mod check;
pub mod config;
pub mod document;
pub mod error;
pub mod synth;
