use serde::{Deserialize, Serialize};

/// Access level attached to an account. The backend serializes roles in
/// lowercase; older records may carry arbitrary casing, so parsing is
/// case-insensitive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "tutor" => Some(Role::Tutor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
        }
    }

    /// Landing route for a freshly signed-in user.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Tutor => "/tutor/dashboard",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Accounts written before roles existed default to student.
    #[serde(default)]
    pub role: Role,
}

/// Transient state carried between the three registration steps. Lives only
/// in client memory; a page reload drops it and restarts the flow.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationDraft {
    pub email: String,
    pub otp_verified: bool,
}

impl RegistrationDraft {
    pub fn new(email: String) -> Self {
        Self {
            email,
            otp_verified: false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Raw login response body. The token is optional here because the backend
/// has been observed to answer 200 without one; callers must not treat such
/// a response as a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Plain `{message}` acknowledgment returned by the register and OTP
/// endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Server message when present, otherwise the caller's fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::parse("student"), Some(Role::Student));
        assert_eq!(Role::parse("TUTOR"), Some(Role::Tutor));
        assert_eq!(Role::parse(" Tutor "), Some(Role::Tutor));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Tutor).expect("serialize role");
        assert_eq!(json, "\"tutor\"");

        let parsed: Role = serde_json::from_str("\"student\"").expect("deserialize role");
        assert_eq!(parsed, Role::Student);
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let parsed: LoginResponse = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(parsed.token, None);
        assert_eq!(parsed.user, None);

        let parsed: LoginResponse = serde_json::from_str(
            r#"{"token":"t-1","user":{"id":"u1","name":"Ada","email":"a@b.com","role":"tutor"}}"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.token.as_deref(), Some("t-1"));
        assert_eq!(parsed.user.map(|u| u.role), Some(Role::Tutor));
    }

    #[test]
    fn message_response_falls_back_when_empty() {
        let response: MessageResponse = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(response.message_or("sent"), "sent");

        let response = MessageResponse {
            message: Some("  ".into()),
        };
        assert_eq!(response.message_or("sent"), "sent");

        let response = MessageResponse {
            message: Some("OTP sent".into()),
        };
        assert_eq!(response.message_or("sent"), "OTP sent");
    }

    #[test]
    fn register_request_serializes_role_for_the_backend() {
        let request = RegisterRequest {
            name: "Ada".into(),
            email: "a@b.com".into(),
            password: "secret123".into(),
            role: Role::Student,
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains("\"role\":\"student\""));
    }
}
