//! Code-sample synthesis.
//!
//! One linear pass over the document: every well-formed operation without a
//! non-empty `x-codeSamples` list gains one generated sample per configured
//! language. Continuation markers and separators are positional — each
//! emitter builds the full ordered list of lines (or object-literal pairs)
//! first and joins with a between-elements token, so GET and POST render
//! correctly without per-method special cases.

mod curl;
mod javascript;
mod python;

pub use curl::CurlEmitter;
pub use javascript::JavascriptEmitter;
pub use python::PythonEmitter;

use crate::document::operation::{HttpMethod, PathItemNode};
use crate::document::sample::CodeSample;
use crate::document::spec::OpenApiSpec;

/// Base URL prepended to every operation path in generated samples.
pub const DEFAULT_BASE_URL: &str = "https://api.venice.ai/api/v1";

/// Placeholder credential used in generated Authorization headers.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

/// Placeholder JSON body for body-bearing methods.
pub const BODY_PLACEHOLDER: &str = "{}";

/// Options controlling sample generation.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    pub base_url: String,
    /// Whether to emit a Python sample alongside cURL and JavaScript.
    pub python: bool,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            python: true,
        }
    }
}

/// What a single emitter needs to know about the target operation.
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest<'a> {
    pub method: HttpMethod,
    pub path: &'a str,
    pub base_url: &'a str,
}

impl SampleRequest<'_> {
    /// Full request URL: base URL concatenated with the operation path.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }
}

/// Emits one code sample for an operation.
pub trait SampleEmitter {
    fn lang(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn emit(&self, request: &SampleRequest<'_>) -> String;

    fn sample(&self, request: &SampleRequest<'_>) -> CodeSample {
        CodeSample {
            lang: self.lang().to_string(),
            label: Some(self.label().to_string()),
            source: self.emit(request),
        }
    }
}

fn emitters(options: &SynthOptions) -> Vec<Box<dyn SampleEmitter>> {
    let mut list: Vec<Box<dyn SampleEmitter>> = vec![Box::new(CurlEmitter)];
    if options.python {
        list.push(Box::new(PythonEmitter));
    }
    list.push(Box::new(JavascriptEmitter));
    list
}

/// Attach generated code samples to every operation that lacks them.
///
/// Malformed path items and operations are skipped untouched, and operations
/// that already carry samples are preserved byte-for-byte, so the pass is
/// idempotent. Returns the number of operations annotated.
pub fn annotate(spec: &mut OpenApiSpec, options: &SynthOptions) -> usize {
    let emitters = emitters(options);
    let mut annotated = 0;

    for (path, node) in &mut spec.paths {
        let PathItemNode::Item(item) = node else {
            continue;
        };
        for (method, operation) in item.operations_mut() {
            if !operation.code_samples.is_empty() {
                continue;
            }

            log::info!("adding code samples to {} {}", method.as_str(), path);
            let request = SampleRequest {
                method,
                path: path.as_str(),
                base_url: &options.base_url,
            };
            operation.code_samples = emitters.iter().map(|e| e.sample(&request)).collect();
            annotated += 1;
        }
    }

    annotated
}
