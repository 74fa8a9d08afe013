use super::{Finding, Rule};
use crate::document::schema::SchemaOrRef;
use crate::document::spec::OpenApiSpec;

/// `info` and a non-empty `paths` are required; `servers` is recommended.
/// Within `info`, title, version, and description are required; contact and
/// license are recommended.
pub(crate) fn check_required_sections(spec: &OpenApiSpec, findings: &mut Vec<Finding>) {
    match &spec.info {
        None => findings.push(Finding::error(
            Rule::MissingSection,
            "document",
            "missing required 'info' section",
        )),
        Some(info) => {
            let required = [
                ("title", &info.title),
                ("version", &info.version),
                ("description", &info.description),
            ];
            for (field, value) in required {
                if value.is_none() {
                    findings.push(Finding::error(
                        Rule::MissingSection,
                        "info",
                        format!("info is missing required field '{field}'"),
                    ));
                }
            }
            if info.contact.is_none() {
                findings.push(Finding::warning(
                    Rule::MissingSection,
                    "info",
                    "info has no 'contact' information",
                ));
            }
            if info.license.is_none() {
                findings.push(Finding::warning(
                    Rule::MissingSection,
                    "info",
                    "info has no 'license' information",
                ));
            }
        }
    }

    if spec.paths.is_empty() {
        findings.push(Finding::error(
            Rule::MissingSection,
            "document",
            "'paths' section is missing or empty",
        ));
    }

    if spec.servers.is_empty() {
        findings.push(Finding::warning(
            Rule::MissingSection,
            "document",
            "no 'servers' defined",
        ));
    } else {
        for (idx, server) in spec.servers.iter().enumerate() {
            if server.url.as_deref().unwrap_or("").is_empty() {
                findings.push(Finding::error(
                    Rule::MissingSection,
                    format!("servers[{idx}]"),
                    "server entry is missing a 'url'",
                ));
            }
        }
    }

    for (path, method, operation) in spec.operations() {
        if operation.responses.is_empty() {
            findings.push(Finding::error(
                Rule::MissingSection,
                format!("{} {}", method.as_str(), path),
                "operation has no 'responses'",
            ));
        }
    }
}

/// Any operation without an explicit `security` override needs a global
/// `security` requirement whose scheme names all resolve in
/// `components.securitySchemes`.
pub(crate) fn check_security_coverage(spec: &OpenApiSpec, findings: &mut Vec<Finding>) {
    let schemes = spec
        .components
        .as_ref()
        .map(|c| &c.security_schemes);

    if let Some(schemes) = schemes {
        for (name, scheme) in schemes {
            if scheme.scheme_type.is_none() {
                findings.push(Finding::error(
                    Rule::SecurityCoverage,
                    format!("components.securitySchemes.{name}"),
                    "security scheme is missing its 'type'",
                ));
            }
        }
    }

    let any_uncovered = spec
        .operations()
        .any(|(_, _, operation)| operation.security.is_none());
    if !any_uncovered {
        return;
    }

    let global = spec.security.as_deref().unwrap_or_default();
    if global.is_empty() {
        findings.push(Finding::error(
            Rule::SecurityCoverage,
            "document",
            "operations rely on a global 'security' requirement, but none is defined",
        ));
        return;
    }

    for requirement in global {
        for scheme_name in requirement.keys() {
            let resolves = schemes.is_some_and(|s| s.contains_key(scheme_name));
            if !resolves {
                findings.push(Finding::error(
                    Rule::SecurityCoverage,
                    "security",
                    format!(
                        "global security references undefined scheme '{scheme_name}'"
                    ),
                ));
            }
        }
    }
}

/// Operations should carry a summary and description; schema properties
/// should carry descriptions.
pub(crate) fn check_documentation(spec: &OpenApiSpec, findings: &mut Vec<Finding>) {
    for (path, method, operation) in spec.operations() {
        let location = format!("{} {}", method.as_str(), path);
        if operation.summary.as_deref().unwrap_or("").is_empty() {
            findings.push(Finding::warning(
                Rule::MissingDocumentation,
                location.clone(),
                "operation has no 'summary'",
            ));
        }
        if operation.description.as_deref().unwrap_or("").is_empty() {
            findings.push(Finding::warning(
                Rule::MissingDocumentation,
                location,
                "operation has no 'description'",
            ));
        }
    }

    let Some(components) = &spec.components else {
        return;
    };
    for (name, schema) in &components.schemas {
        let SchemaOrRef::Schema(schema) = schema else {
            continue;
        };
        for (prop, prop_schema) in &schema.properties {
            if let SchemaOrRef::Schema(ps) = prop_schema
                && ps.description.as_deref().unwrap_or("").is_empty()
            {
                findings.push(Finding::warning(
                    Rule::MissingDocumentation,
                    format!("components.schemas.{name}.{prop}"),
                    "property has no 'description'",
                ));
            }
        }
    }
}
