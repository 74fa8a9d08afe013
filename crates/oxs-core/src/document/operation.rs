use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use super::parameter::ParameterOrRef;
use super::request_body::RequestBodyOrRef;
use super::response::ResponseOrRef;
use super::sample::CodeSample;
use super::security::SecurityRequirement;

/// HTTP method slots recognized on a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    pub fn lowercase(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }

    /// Methods that carry a JSON request body in generated samples.
    pub fn has_request_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyOrRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    /// Attached example snippets. A non-empty list is authored content and
    /// is never regenerated.
    #[serde(
        rename = "x-codeSamples",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub code_samples: Vec<CodeSample>,

    /// Unmodeled keys, preserved for round-tripping.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// An operation slot that parsed as a proper mapping, or whatever else was
/// found there. Malformed slots are preserved verbatim and skipped by every
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationNode {
    Operation(Box<Operation>),
    Other(Value),
}

/// A path item, containing operations keyed by HTTP method. Method keys are
/// lowercased at the parse boundary regardless of authored case, and written
/// back lowercase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<OperationNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<OperationNode>,

    /// Non-method keys, preserved for round-tripping.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PathItem {
    /// Iterate over present, well-formed operations in method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Patch, &self.patch),
            (HttpMethod::Options, &self.options),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Trace, &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, slot)| match slot {
            Some(OperationNode::Operation(op)) => Some((method, op.as_ref())),
            _ => None,
        })
    }

    /// Mutable counterpart of [`PathItem::operations`].
    pub fn operations_mut(&mut self) -> impl Iterator<Item = (HttpMethod, &mut Operation)> {
        [
            (HttpMethod::Get, &mut self.get),
            (HttpMethod::Post, &mut self.post),
            (HttpMethod::Put, &mut self.put),
            (HttpMethod::Delete, &mut self.delete),
            (HttpMethod::Patch, &mut self.patch),
            (HttpMethod::Options, &mut self.options),
            (HttpMethod::Head, &mut self.head),
            (HttpMethod::Trace, &mut self.trace),
        ]
        .into_iter()
        .filter_map(|(method, slot)| match slot {
            Some(OperationNode::Operation(op)) => Some((method, op.as_mut())),
            _ => None,
        })
    }
}

/// A `paths` entry that parsed as a path item, or whatever else was found
/// there (a stray null, a scalar). Malformed entries round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathItemNode {
    Item(Box<PathItem>),
    Other(Value),
}
