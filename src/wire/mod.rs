use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ForgeError;
use crate::scaffold::FileMapping;

// ========================================
// Generate request/response surface
// ========================================

/// The inbound payload is a `scaffold::Configuration`; this is the matching
/// success-or-error envelope the caller gets back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<FileMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(files: FileMapping) -> Self {
        Self { success: true, files: Some(files), error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, files: None, error: Some(message.into()) }
    }
}

/// First top-level `{...}` span in `s`, tracking brace depth only. Backends
/// wrap their JSON in prose often enough that this is worth having, but it is
/// deliberately not smarter than that (no string-literal awareness, no second
/// chances).
pub fn extract_first_json_object(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut start = None;
    let mut depth = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'{' {
            if start.is_none() {
                start = Some(i);
            }
            depth += 1;
        } else if b == b'}' && depth > 0 {
            depth -= 1;
            if depth == 0 {
                return start.map(|st| &s[st..=i]);
            }
        }
    }
    None
}

/// Best-effort parse of a backend's raw text into a FileMapping: take the
/// first balanced-brace span, parse it, and require a `files` object. Every
/// failure mode is `MalformedResponse`; the caller surfaces it and lets the
/// user resubmit, there is no retry.
pub fn parse_files_response(raw: &str) -> Result<FileMapping, ForgeError> {
    let span = extract_first_json_object(raw).ok_or_else(|| {
        ForgeError::MalformedResponse("no JSON object found in backend output".into())
    })?;

    let value: Value = serde_json::from_str(span)
        .map_err(|e| ForgeError::MalformedResponse(format!("invalid JSON in backend output: {e}")))?;

    let files = value
        .get("files")
        .ok_or_else(|| ForgeError::MalformedResponse("backend output has no 'files' object".into()))?;

    serde_json::from_value(files.clone()).map_err(|e| {
        ForgeError::MalformedResponse(format!("'files' is not a path-to-content object: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let raw = "Sure! Here is your scaffold:\n{\"files\":{\"a.txt\":\"x\"}}\nLet me know.";
        let files = parse_files_response(raw).expect("parses");
        assert_eq!(files.len(), 1);
        assert_eq!(files["a.txt"], "x");
    }

    #[test]
    fn extraction_handles_nested_braces() {
        let raw = r#"note {"files":{"pkg.json":"{\"name\":\"x\"}"}, "extra":{"k":{}}} trailing"#;
        let span = extract_first_json_object(raw).expect("span found");
        assert!(span.starts_with('{') && span.ends_with('}'));
        let files = parse_files_response(raw).expect("parses");
        assert_eq!(files["pkg.json"], "{\"name\":\"x\"}");
    }

    #[test]
    fn no_braces_is_malformed() {
        let err = parse_files_response("I could not generate anything, sorry.").unwrap_err();
        assert!(matches!(err, ForgeError::MalformedResponse(_)));
    }

    #[test]
    fn missing_files_property_is_malformed() {
        let err = parse_files_response(r#"{"result": "done"}"#).unwrap_err();
        assert!(matches!(err, ForgeError::MalformedResponse(_)));
    }

    #[test]
    fn unbalanced_braces_yield_nothing() {
        assert!(extract_first_json_object("{\"files\": {").is_none());
        // A stray closing brace before any opener is ignored, not matched.
        assert!(extract_first_json_object("}{").is_none());
    }

    #[test]
    fn response_envelope_skips_absent_fields() {
        let ok = serde_json::to_string(&GenerateResponse::ok(Default::default())).unwrap();
        assert!(!ok.contains("error"));
        let err = serde_json::to_string(&GenerateResponse::err("boom")).unwrap();
        assert!(!err.contains("files"));
        assert!(err.contains("boom"));
    }
}
