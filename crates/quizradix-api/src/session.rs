use crate::error::ApiError;
use quizradix_types::{LoginResponse, User};

/// What a successful login actually yields: a bearer token plus whatever
/// user summary the backend attached.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionCredentials {
    pub token: String,
    pub user: Option<User>,
}

/// A login only counts when the response carries a usable token; a 200
/// without one is a failed login and must not touch session state.
pub fn extract_credentials(response: LoginResponse) -> Result<SessionCredentials, ApiError> {
    let token = response
        .token
        .filter(|token| !token.trim().is_empty())
        .ok_or(ApiError::MissingCredential)?;

    Ok(SessionCredentials {
        token,
        user: response.user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizradix_types::Role;

    #[test]
    fn response_without_token_is_rejected() {
        let response = LoginResponse {
            token: None,
            user: Some(User {
                id: "u1".into(),
                name: "Ada".into(),
                email: "a@b.com".into(),
                role: Role::Student,
            }),
        };
        assert_eq!(
            extract_credentials(response),
            Err(ApiError::MissingCredential)
        );
    }

    #[test]
    fn blank_token_is_rejected() {
        let response = LoginResponse {
            token: Some("   ".into()),
            user: None,
        };
        assert_eq!(
            extract_credentials(response),
            Err(ApiError::MissingCredential)
        );
    }

    #[test]
    fn token_and_user_pass_through() {
        let response = LoginResponse {
            token: Some("t-123".into()),
            user: Some(User {
                id: "u1".into(),
                name: "Ada".into(),
                email: "a@b.com".into(),
                role: Role::Tutor,
            }),
        };
        let credentials = extract_credentials(response).expect("credentials");
        assert_eq!(credentials.token, "t-123");
        assert_eq!(credentials.user.map(|u| u.role), Some(Role::Tutor));
    }
}
