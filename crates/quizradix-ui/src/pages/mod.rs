pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod register_email;
pub mod verify_otp;

/// Backend-provided message when one exists, otherwise the page fallback.
#[cfg(feature = "hydrate")]
pub(crate) fn server_message_or(error: &quizradix_api::ApiError, fallback: &str) -> String {
    match error {
        quizradix_api::ApiError::Server { message, .. } => message.clone(),
        _ => fallback.to_string(),
    }
}
