use super::{Finding, Rule};
use crate::document::spec::OpenApiSpec;

/// Structural checks on attached code samples: cURL sources must end every
/// line except the last with the shell continuation marker, and JavaScript
/// headers objects must separate every pair except the last with a comma.
pub(crate) fn check_sample_syntax(spec: &OpenApiSpec, findings: &mut Vec<Finding>) {
    for (path, method, operation) in spec.operations() {
        for sample in &operation.code_samples {
            let violation = match sample.lang.as_str() {
                "cURL" => curl_violation(&sample.source),
                "JavaScript" => javascript_violation(&sample.source),
                _ => None,
            };
            if let Some(message) = violation {
                findings.push(Finding::error(
                    Rule::SampleSyntax,
                    format!("{} {} ({})", method.as_str(), path, sample.lang),
                    message,
                ));
            }
        }
    }
}

fn curl_violation(source: &str) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        let last = idx + 1 == lines.len();
        let continued = line.ends_with('\\');
        if last && continued {
            return Some("last line must not end with a continuation marker".to_string());
        }
        if !last && !continued {
            return Some(format!(
                "line {} is missing the trailing continuation marker",
                idx + 1
            ));
        }
    }
    None
}

fn javascript_violation(source: &str) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    // Only samples with a headers object literal are checked.
    let start = lines
        .iter()
        .position(|l| l.trim_end().ends_with("headers: {"))?;

    let Some(end) = lines[start + 1..]
        .iter()
        .position(|l| l.trim_start().starts_with('}'))
        .map(|offset| start + 1 + offset)
    else {
        return Some("headers object is never closed".to_string());
    };

    let pairs: Vec<&str> = lines[start + 1..end]
        .iter()
        .filter(|l| !l.trim().is_empty())
        .copied()
        .collect();
    for (idx, pair) in pairs.iter().enumerate() {
        let last = idx + 1 == pairs.len();
        let separated = pair.trim_end().ends_with(',');
        if last && separated {
            return Some("last headers entry must not end with a separator".to_string());
        }
        if !last && !separated {
            return Some(format!(
                "headers entry {} is missing the trailing separator",
                idx + 1
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curl_accepts_joined_lines() {
        let source = "curl -X GET 'https://example' \\\n  -H 'Authorization: Bearer X'";
        assert_eq!(curl_violation(source), None);
    }

    #[test]
    fn curl_rejects_missing_continuation() {
        let source = "curl -X POST 'https://example'\n  -H 'Authorization: Bearer X'";
        assert!(curl_violation(source).is_some());
    }

    #[test]
    fn curl_rejects_trailing_continuation() {
        let source = "curl -X GET 'https://example' \\\n  -H 'Authorization: Bearer X' \\";
        assert!(curl_violation(source).is_some());
    }

    #[test]
    fn javascript_rejects_separator_on_last_pair() {
        let source = "fetch('x', {\n  headers: {\n    'A': '1',\n    'B': '2',\n  }\n});";
        assert!(javascript_violation(source).is_some());
    }

    #[test]
    fn javascript_rejects_missing_separator() {
        let source = "fetch('x', {\n  headers: {\n    'A': '1'\n    'B': '2'\n  }\n});";
        assert!(javascript_violation(source).is_some());
    }

    #[test]
    fn javascript_accepts_single_pair() {
        let source = "fetch('x', {\n  headers: {\n    'A': '1'\n  }\n});";
        assert_eq!(javascript_violation(source), None);
    }

    #[test]
    fn javascript_skips_sources_without_headers() {
        assert_eq!(javascript_violation("console.log('hi');"), None);
    }
}
