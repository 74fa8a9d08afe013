use super::{API_KEY_PLACEHOLDER, BODY_PLACEHOLDER, SampleEmitter, SampleRequest};

/// Shell line-continuation marker. Joined *between* lines, so every line
/// except the last ends with it no matter which optional lines are present.
const CONTINUATION: &str = " \\";

pub struct CurlEmitter;

impl SampleEmitter for CurlEmitter {
    fn lang(&self) -> &'static str {
        "cURL"
    }

    fn label(&self) -> &'static str {
        "cURL"
    }

    fn emit(&self, request: &SampleRequest<'_>) -> String {
        let mut lines = vec![
            format!("curl -X {} '{}'", request.method.as_str(), request.url()),
            format!("  -H 'Authorization: Bearer {API_KEY_PLACEHOLDER}'"),
        ];
        if request.method.has_request_body() {
            lines.push("  -H 'Content-Type: application/json'".to_string());
            lines.push(format!("  -d '{BODY_PLACEHOLDER}'"));
        }
        lines.join(&format!("{CONTINUATION}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::operation::HttpMethod;

    fn emit(method: HttpMethod) -> String {
        CurlEmitter.emit(&SampleRequest {
            method,
            path: "/models",
            base_url: super::super::DEFAULT_BASE_URL,
        })
    }

    #[test]
    fn get_has_no_trailing_continuation() {
        let source = emit(HttpMethod::Get);
        let lines: Vec<&str> = source.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with('\\'));
        assert!(!lines[1].ends_with('\\'));
    }

    #[test]
    fn post_continues_all_but_last_line() {
        let source = emit(HttpMethod::Post);
        let lines: Vec<&str> = source.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines[..3] {
            assert!(line.ends_with('\\'), "expected continuation on {line:?}");
        }
        assert_eq!(lines[3], "  -d '{}'");
    }
}
