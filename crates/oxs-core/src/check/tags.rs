use std::collections::BTreeSet;

use super::{Finding, Rule};
use crate::document::spec::OpenApiSpec;

/// Every tag referenced by an operation must be declared in the top-level
/// tag catalog. One finding per undeclared reference.
pub(crate) fn check_tag_closure(spec: &OpenApiSpec, findings: &mut Vec<Finding>) {
    let declared: BTreeSet<&str> = spec.tags.iter().map(|t| t.name.as_str()).collect();

    for (path, method, operation) in spec.operations() {
        for tag in &operation.tags {
            if !declared.contains(tag.as_str()) {
                findings.push(Finding::error(
                    Rule::UndeclaredTag,
                    format!("{} {}", method.as_str(), path),
                    format!("tag '{tag}' is not declared in the global tags section"),
                ));
            }
        }
    }
}
