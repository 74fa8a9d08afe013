//! Document consistency checks.
//!
//! [`check`] runs every rule over the document and returns the accumulated
//! findings; it never fails fast, so one run surfaces the complete defect
//! list. Severity policy is the caller's: any [`Severity::Error`] finding
//! should translate into a non-zero process exit.

mod refs;
mod samples;
mod structure;
mod tags;

use std::fmt;

use crate::document::spec::OpenApiSpec;

/// Which consistency rule produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// An operation references a tag missing from the global catalog.
    UndeclaredTag,
    /// A required document section or field is missing or empty.
    MissingSection,
    /// Operations rely on global security that is absent or unresolvable.
    SecurityCoverage,
    /// A code sample violates its language's structural invariant.
    SampleSyntax,
    /// A `$ref` does not resolve within `components`.
    UnresolvedRef,
    /// An operation or schema property lacks documentation.
    MissingDocumentation,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::UndeclaredTag => "undeclared-tag",
            Rule::MissingSection => "missing-section",
            Rule::SecurityCoverage => "security-coverage",
            Rule::SampleSyntax => "sample-syntax",
            Rule::UnresolvedRef => "unresolved-ref",
            Rule::MissingDocumentation => "missing-documentation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single reported violation or warning.
#[derive(Debug, Clone)]
pub struct Finding {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
    pub location: String,
}

impl Finding {
    pub(crate) fn error(rule: Rule, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message: message.into(),
            location: location.into(),
        }
    }

    pub(crate) fn warning(
        rule: Rule,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message: message.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity,
            self.rule.as_str(),
            self.location,
            self.message
        )
    }
}

/// Run every rule over the document, accumulating all findings.
pub fn check(spec: &OpenApiSpec) -> Vec<Finding> {
    let mut findings = Vec::new();
    structure::check_required_sections(spec, &mut findings);
    structure::check_security_coverage(spec, &mut findings);
    structure::check_documentation(spec, &mut findings);
    tags::check_tag_closure(spec, &mut findings);
    samples::check_sample_syntax(spec, &mut findings);
    refs::check_refs(spec, &mut findings);
    findings
}

/// Whether any finding is severe enough to fail a run.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}
