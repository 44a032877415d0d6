//! Failure taxonomy for backend calls. The transport only classifies; it
//! never clears session state or navigates — the session policy in the UI
//! decides what a 401 means for the app.

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("request timed out, please try again")]
    Timeout,
    /// Status 401 from any endpoint. The caller reports this to the session
    /// policy, which tears the session down and redirects.
    #[error("session expired")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Field-level rejection list from the register endpoint, surfaced as
    /// one notification per entry.
    #[error("registration was rejected")]
    Rejected { errors: Vec<String> },
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// A 200 login response that carried no token. Treated as a failed
    /// login; no session state is set.
    #[error("login response did not include a token")]
    MissingCredential,
}

impl ApiError {
    /// Failures the login page collapses into "Invalid email or password."
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            ApiError::Unauthorized => true,
            ApiError::Server { status, .. } => *status == 400,
            _ => false,
        }
    }
}

#[derive(Deserialize)]
struct RejectionBody {
    errors: Vec<String>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Classifies a non-2xx response. 401 always wins, regardless of body or
/// endpoint; otherwise the body is mined for `{errors}` or `{message}`.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }

    if let Ok(rejection) = serde_json::from_str::<RejectionBody>(body) {
        if !rejection.errors.is_empty() {
            return ApiError::Rejected {
                errors: rejection.errors,
            };
        }
    }

    if let Ok(parsed) = serde_json::from_str::<MessageBody>(body) {
        if let Some(message) = parsed.message {
            let message = message.trim();
            if !message.is_empty() {
                return ApiError::Server {
                    status,
                    message: message.to_string(),
                };
            }
        }
    }

    ApiError::Server {
        status,
        message: sanitize_body(body),
    }
}

/// Maps a transport-level failure message, detecting our abort timeout.
pub fn classify_transport(message: &str) -> ApiError {
    let lowered = message.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout
    } else {
        ApiError::Network(message.to_string())
    }
}

/// Trims and truncates a raw error body for user-facing display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_classifies_as_unauthorized_regardless_of_body() {
        assert_eq!(classify_response(401, ""), ApiError::Unauthorized);
        assert_eq!(
            classify_response(401, r#"{"message":"token expired"}"#),
            ApiError::Unauthorized
        );
        assert_eq!(
            classify_response(401, r#"{"errors":["bad token"]}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn error_list_body_becomes_rejected() {
        let error = classify_response(422, r#"{"errors":["email taken","name too short"]}"#);
        assert_eq!(
            error,
            ApiError::Rejected {
                errors: vec!["email taken".into(), "name too short".into()],
            }
        );
    }

    #[test]
    fn message_body_becomes_server_error() {
        let error = classify_response(400, r#"{"message":"OTP did not match"}"#);
        assert_eq!(
            error,
            ApiError::Server {
                status: 400,
                message: "OTP did not match".into(),
            }
        );
    }

    #[test]
    fn empty_errors_array_falls_through_to_raw_body() {
        let error = classify_response(500, r#"{"errors":[]}"#);
        assert_eq!(
            error,
            ApiError::Server {
                status: 500,
                message: r#"{"errors":[]}"#.into(),
            }
        );
    }

    #[test]
    fn blank_body_gets_a_generic_message() {
        let error = classify_response(502, "   ");
        assert_eq!(
            error,
            ApiError::Server {
                status: 502,
                message: "Request failed.".into(),
            }
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        match classify_response(500, &body) {
            ApiError::Server { message, .. } => assert_eq!(message.len(), 200),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn transport_failures_detect_aborts_as_timeouts() {
        assert_eq!(classify_transport("signal is aborted"), ApiError::Timeout);
        assert_eq!(classify_transport("Request TIMEOUT"), ApiError::Timeout);
        assert_eq!(
            classify_transport("dns failure"),
            ApiError::Network("dns failure".into())
        );
    }

    #[test]
    fn invalid_credentials_covers_400_and_401() {
        assert!(ApiError::Unauthorized.is_invalid_credentials());
        assert!(ApiError::Server {
            status: 400,
            message: "bad login".into()
        }
        .is_invalid_credentials());
        assert!(!ApiError::Server {
            status: 500,
            message: "oops".into()
        }
        .is_invalid_credentials());
        assert!(!ApiError::Timeout.is_invalid_credentials());
    }
}
