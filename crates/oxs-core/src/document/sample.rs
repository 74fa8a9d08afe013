use serde::{Deserialize, Serialize};

/// A labeled, language-tagged literal example of calling an operation.
/// `source` is a multi-line block of client code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub lang: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub source: String,
}
