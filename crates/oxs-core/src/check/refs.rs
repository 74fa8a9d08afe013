use super::{Finding, Rule};
use crate::document::components::Components;
use crate::document::operation::PathItemNode;
use crate::document::parameter::ParameterOrRef;
use crate::document::request_body::RequestBodyOrRef;
use crate::document::response::ResponseOrRef;
use crate::document::schema::{AdditionalProperties, Schema, SchemaOrRef};
use crate::document::spec::OpenApiSpec;

/// Every `$ref` must resolve to an existing entry in the matching
/// `components` section.
pub(crate) fn check_refs(spec: &OpenApiSpec, findings: &mut Vec<Finding>) {
    let mut refs: Vec<(String, String)> = Vec::new();

    for (path, node) in &spec.paths {
        let PathItemNode::Item(item) = node else {
            continue;
        };
        for param in &item.parameters {
            collect_parameter_refs(path, param, &mut refs);
        }
        for (method, operation) in item.operations() {
            let location = format!("{} {}", method.as_str(), path);
            for param in &operation.parameters {
                collect_parameter_refs(&location, param, &mut refs);
            }
            match &operation.request_body {
                Some(RequestBodyOrRef::Ref { ref_path }) => {
                    refs.push((location.clone(), ref_path.clone()));
                }
                Some(RequestBodyOrRef::RequestBody(body)) => {
                    for media in body.content.values() {
                        if let Some(schema) = &media.schema {
                            collect_schema_refs(&location, schema, &mut refs);
                        }
                    }
                }
                None => {}
            }
            for (status, response) in &operation.responses {
                let location = format!("{location} responses.{status}");
                match response {
                    ResponseOrRef::Ref { ref_path } => {
                        refs.push((location, ref_path.clone()));
                    }
                    ResponseOrRef::Response(resp) => {
                        for media in resp.content.values() {
                            if let Some(schema) = &media.schema {
                                collect_schema_refs(&location, schema, &mut refs);
                            }
                        }
                    }
                }
            }
        }
    }

    if let Some(components) = &spec.components {
        for (name, schema) in &components.schemas {
            collect_schema_refs(&format!("components.schemas.{name}"), schema, &mut refs);
        }
    }

    for (location, ref_path) in refs {
        if let Some(message) = resolution_failure(spec.components.as_ref(), &ref_path) {
            findings.push(Finding::error(Rule::UnresolvedRef, location, message));
        }
    }
}

fn collect_parameter_refs(location: &str, param: &ParameterOrRef, refs: &mut Vec<(String, String)>) {
    match param {
        ParameterOrRef::Ref { ref_path } => refs.push((location.to_string(), ref_path.clone())),
        ParameterOrRef::Parameter(p) => {
            if let Some(schema) = &p.schema {
                collect_schema_refs(location, schema, refs);
            }
        }
    }
}

fn collect_schema_refs(location: &str, node: &SchemaOrRef, refs: &mut Vec<(String, String)>) {
    match node {
        SchemaOrRef::Ref { ref_path } => refs.push((location.to_string(), ref_path.clone())),
        SchemaOrRef::Schema(schema) => collect_inner_refs(location, schema, refs),
    }
}

fn collect_inner_refs(location: &str, schema: &Schema, refs: &mut Vec<(String, String)>) {
    for prop in schema.properties.values() {
        collect_schema_refs(location, prop, refs);
    }
    if let Some(items) = &schema.items {
        collect_schema_refs(location, items, refs);
    }
    for node in schema
        .all_of
        .iter()
        .chain(&schema.one_of)
        .chain(&schema.any_of)
    {
        collect_schema_refs(location, node, refs);
    }
    if let Some(AdditionalProperties::Schema(node)) = &schema.additional_properties {
        collect_schema_refs(location, node, refs);
    }
}

/// Resolve `#/components/<section>/<name>`; returns the failure message for
/// unresolvable or malformed references.
fn resolution_failure(components: Option<&Components>, ref_path: &str) -> Option<String> {
    let Some(rest) = ref_path.strip_prefix("#/components/") else {
        return Some(format!("malformed reference '{ref_path}'"));
    };
    let Some((section, name)) = rest.split_once('/') else {
        return Some(format!("malformed reference '{ref_path}'"));
    };

    let found = components.is_some_and(|c| match section {
        "schemas" => c.schemas.contains_key(name),
        "responses" => c.responses.contains_key(name),
        "parameters" => c.parameters.contains_key(name),
        "requestBodies" => c.request_bodies.contains_key(name),
        "securitySchemes" => c.security_schemes.contains_key(name),
        _ => false,
    });

    if found {
        None
    } else {
        Some(format!("reference '{ref_path}' does not resolve"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_refs_outside_components() {
        assert!(resolution_failure(None, "#/definitions/Foo").is_some());
    }

    #[test]
    fn rejects_missing_target() {
        let components = Components::default();
        assert!(resolution_failure(Some(&components), "#/components/schemas/Missing").is_some());
    }
}
