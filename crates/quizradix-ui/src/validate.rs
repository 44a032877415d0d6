//! Client-side form validation. Each rule mirrors what the backend enforces
//! so an invalid form never reaches the network; messages are the ones shown
//! under the fields.

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const OTP_INVALID: &str = "OTP must be 6 digits";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";

const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_NAME_LENGTH: usize = 2;
const OTP_LENGTH: usize = 6;

pub fn validate_email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    if !looks_like_email(value) {
        return Some(EMAIL_INVALID);
    }
    None
}

fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.len() < MIN_PASSWORD_LENGTH {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    if value.trim().len() < MIN_NAME_LENGTH {
        Some(NAME_TOO_SHORT)
    } else {
        None
    }
}

pub fn validate_otp(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.len() == OTP_LENGTH && value.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(OTP_INVALID)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: validate_email(email),
        password: validate_password(password),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProfileErrors {
    pub name: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl ProfileErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// The mismatch error attaches to the confirmation field — the one the user
/// has to fix.
pub fn validate_profile(name: &str, password: &str, confirm_password: &str) -> ProfileErrors {
    ProfileErrors {
        name: validate_name(name),
        password: validate_password(password),
        confirm_password: if password != confirm_password {
            Some(CONFIRM_MISMATCH)
        } else {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_and_short_password_both_fail() {
        let errors = validate_login("", "short");
        assert_eq!(errors.email, Some(EMAIL_REQUIRED));
        assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
        assert!(!errors.is_clean());
    }

    #[test]
    fn valid_login_form_is_clean() {
        let errors = validate_login("a@b.com", "longenough");
        assert!(errors.is_clean());
    }

    #[test]
    fn email_format_checks() {
        assert_eq!(validate_email("a@b.com"), None);
        assert_eq!(validate_email("  a@b.com  "), None);
        assert_eq!(validate_email("plainaddress"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("@b.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a b@c.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b@c.com"), Some(EMAIL_INVALID));
    }

    #[test]
    fn otp_must_be_six_digits() {
        assert_eq!(validate_otp("123456"), None);
        assert_eq!(validate_otp(" 123456 "), None);
        assert_eq!(validate_otp("12345"), Some(OTP_INVALID));
        assert_eq!(validate_otp("1234567"), Some(OTP_INVALID));
        assert_eq!(validate_otp("12a456"), Some(OTP_INVALID));
        assert_eq!(validate_otp(""), Some(OTP_INVALID));
    }

    #[test]
    fn mismatched_confirmation_attaches_to_the_confirm_field() {
        let errors = validate_profile("Ada", "password1", "password2");
        assert_eq!(errors.name, None);
        assert_eq!(errors.password, None);
        assert_eq!(errors.confirm_password, Some(CONFIRM_MISMATCH));
        assert!(!errors.is_clean());
    }

    #[test]
    fn profile_rules_cover_name_and_password() {
        let errors = validate_profile("A", "short", "short");
        assert_eq!(errors.name, Some(NAME_TOO_SHORT));
        assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
        assert_eq!(errors.confirm_password, None);

        let errors = validate_profile("Ada Lovelace", "password1", "password1");
        assert!(errors.is_clean());
    }
}
