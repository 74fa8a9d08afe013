use super::{API_KEY_PLACEHOLDER, BODY_PLACEHOLDER, SampleEmitter, SampleRequest};

pub struct PythonEmitter;

impl SampleEmitter for PythonEmitter {
    fn lang(&self) -> &'static str {
        "Python"
    }

    fn label(&self) -> &'static str {
        "Python (requests)"
    }

    fn emit(&self, request: &SampleRequest<'_>) -> String {
        let method = request.method.lowercase();
        let call = if request.method.has_request_body() {
            format!("response = requests.{method}(url, headers=headers, json={BODY_PLACEHOLDER})")
        } else {
            format!("response = requests.{method}(url, headers=headers)")
        };

        [
            "import requests".to_string(),
            String::new(),
            format!("url = '{}'", request.url()),
            format!("headers = {{'Authorization': 'Bearer {API_KEY_PLACEHOLDER}'}}"),
            call,
            String::new(),
            "print(response.json())".to_string(),
        ]
        .join("\n")
    }
}
