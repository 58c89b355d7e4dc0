use thiserror::Error;

/// Errors surfaced by the Centreon API client
///
/// Remote rejections keep the decoded body text so callers can show the
/// user something actionable; nothing here is ever retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Centreon API error: {message} (status {status}, code {code})")]
    Remote {
        status: u16,
        code: &'static str,
        message: String,
    },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("{resource} not found")]
    NotFound { resource: String },
}

impl ApiError {
    /// Build a Remote error from a status code and raw body, mirroring the
    /// platform's error taxonomy
    pub fn remote(status: u16, body: &str) -> Self {
        let detail = decode_error_body(body);
        let (code, message) = match status {
            400 => ("BAD_REQUEST", format!("Invalid request parameters: {}", detail)),
            401 => ("UNAUTHORIZED", "Authentication failed".to_string()),
            403 => ("FORBIDDEN", "Access forbidden".to_string()),
            404 => ("NOT_FOUND", "Resource not found".to_string()),
            409 => ("CONFLICT", format!("Resource conflict: {}", detail)),
            _ => ("INTERNAL_ERROR", format!("Unexpected error: {}", detail)),
        };
        ApiError::Remote {
            status,
            code,
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. } | ApiError::Remote { status: 404, .. }
        )
    }
}

/// Error payload the API returns alongside 4xx/5xx statuses
#[derive(Debug, serde::Deserialize)]
struct RemoteErrorBody {
    #[allow(dead_code)]
    code: Option<i64>,
    message: Option<String>,
}

fn decode_error_body(body: &str) -> String {
    match serde_json::from_str::<RemoteErrorBody>(body) {
        Ok(RemoteErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_classification() {
        let cases = [
            (400, "BAD_REQUEST"),
            (401, "UNAUTHORIZED"),
            (403, "FORBIDDEN"),
            (404, "NOT_FOUND"),
            (409, "CONFLICT"),
            (500, "INTERNAL_ERROR"),
            (502, "INTERNAL_ERROR"),
        ];

        for (status, expected_code) in cases {
            match ApiError::remote(status, "boom") {
                ApiError::Remote { code, .. } => assert_eq!(code, expected_code),
                other => panic!("expected Remote error, got {:?}", other),
            }
        }
    }

    #[test]
    fn remote_error_decodes_structured_body() {
        let err = ApiError::remote(409, r#"{"code":409,"message":"Host 'web-01' already exists"}"#);
        let text = err.to_string();
        assert!(text.contains("Host 'web-01' already exists"));
        assert!(text.contains("409"));
        assert!(text.contains("CONFLICT"));
    }

    #[test]
    fn remote_error_keeps_raw_body_when_not_json() {
        let err = ApiError::remote(400, "plain text failure");
        assert!(err.to_string().contains("plain text failure"));
    }

    #[test]
    fn not_found_detection() {
        assert!(ApiError::remote(404, "").is_not_found());
        assert!(ApiError::NotFound {
            resource: "host web-01".to_string()
        }
        .is_not_found());
        assert!(!ApiError::remote(400, "").is_not_found());
    }
}
