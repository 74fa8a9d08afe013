use super::{API_KEY_PLACEHOLDER, BODY_PLACEHOLDER, SampleEmitter, SampleRequest};

/// Separator between successive object-literal entries. Joined *between*
/// entries, so the last pair never carries one.
const SEPARATOR: &str = ",";

pub struct JavascriptEmitter;

impl SampleEmitter for JavascriptEmitter {
    fn lang(&self) -> &'static str {
        "JavaScript"
    }

    fn label(&self) -> &'static str {
        "JavaScript (fetch)"
    }

    fn emit(&self, request: &SampleRequest<'_>) -> String {
        let mut headers = vec![format!("'Authorization': 'Bearer {API_KEY_PLACEHOLDER}'")];
        if request.method.has_request_body() {
            headers.push("'Content-Type': 'application/json'".to_string());
        }
        let headers_block = headers
            .iter()
            .map(|pair| format!("    {pair}"))
            .collect::<Vec<_>>()
            .join(&format!("{SEPARATOR}\n"));

        let mut entries = vec![
            format!("  method: '{}'", request.method.as_str()),
            format!("  headers: {{\n{headers_block}\n  }}"),
        ];
        if request.method.has_request_body() {
            entries.push(format!("  body: JSON.stringify({BODY_PLACEHOLDER})"));
        }

        format!(
            "const response = await fetch('{}', {{\n{}\n}});\nconst data = await response.json();\nconsole.log(data);",
            request.url(),
            entries.join(&format!("{SEPARATOR}\n"))
        )
    }
}
