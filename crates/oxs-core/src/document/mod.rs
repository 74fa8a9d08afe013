//! Typed OpenAPI document model.
//!
//! Unknown keys anywhere in the tree survive a parse/serialize round trip
//! through flattened `extra` maps and raw-value fallback nodes. Modeled keys
//! are emitted in canonical field order on output, not in authored order.

pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod sample;
pub mod schema;
pub mod security;
pub mod server;
pub mod spec;

use serde_yaml_ng::Value;

use crate::error::ParseError;
use spec::OpenApiSpec;

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiSpec, ParseError> {
    let mut raw: Value = serde_yaml_ng::from_str(input)?;
    normalize_method_keys(&mut raw);
    let spec: OpenApiSpec = serde_yaml_ng::from_value(raw)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiSpec, ParseError> {
    let mut raw: Value = serde_json::from_str(input)?;
    normalize_method_keys(&mut raw);
    let spec: OpenApiSpec = serde_yaml_ng::from_value(raw)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// HTTP method tokens are matched case-insensitively. Lowercase them before
/// the typed model sees the tree, so `GET:` and `Get:` both populate the
/// method slots instead of falling into the preserved unknown-key map.
fn normalize_method_keys(doc: &mut Value) {
    const METHODS: [&str; 8] = [
        "get", "put", "post", "delete", "options", "head", "patch", "trace",
    ];

    let Some(paths) = doc.get_mut("paths").and_then(Value::as_mapping_mut) else {
        return;
    };

    for (_, item) in paths.iter_mut() {
        let Some(item) = item.as_mapping_mut() else {
            continue;
        };
        for (key, value) in std::mem::take(item) {
            let method_token = key
                .as_str()
                .map(str::to_ascii_lowercase)
                .filter(|token| METHODS.contains(&token.as_str()));
            match method_token {
                Some(token) => item.insert(Value::String(token), value),
                None => item.insert(key, value),
            };
        }
    }
}

/// Serialize a document back to YAML. Multiline scalars (code sample
/// sources) carry embedded newlines; block style is the serializer's call.
pub fn to_yaml(spec: &OpenApiSpec) -> Result<String, ParseError> {
    Ok(serde_yaml_ng::to_string(spec)?)
}

/// Serialize a document back to pretty-printed JSON.
pub fn to_json_pretty(spec: &OpenApiSpec) -> Result<String, ParseError> {
    Ok(serde_json::to_string_pretty(spec)?)
}

fn validate_version(spec: &OpenApiSpec) -> Result<(), ParseError> {
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi.clone()));
    }
    Ok(())
}
