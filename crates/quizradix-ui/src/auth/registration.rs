//! Registration draft carried between the three signup steps. The draft is
//! an in-memory context, not router state: a reload drops it and the entry
//! guards push the user back to step 1.

use leptos::prelude::*;
use quizradix_types::RegistrationDraft;

#[derive(Clone, Copy)]
pub struct RegistrationContext {
    draft: RwSignal<Option<RegistrationDraft>>,
}

impl RegistrationContext {
    pub(crate) fn new() -> Self {
        Self {
            draft: RwSignal::new(None),
        }
    }

    /// Seeds a fresh draft once step 1 has dispatched an OTP.
    pub fn start(&self, email: String) {
        self.draft.set(Some(RegistrationDraft::new(email)));
    }

    /// Records a successful OTP check. The flag is informational — step
    /// entry is gated on the email alone, the backend re-verifies.
    pub fn mark_verified(&self) {
        self.draft.update(|draft| {
            if let Some(draft) = draft {
                draft.otp_verified = true;
            }
        });
    }

    pub fn clear(&self) {
        self.draft.set(None);
    }

    /// Email carried from a prior step. Reactive, so entry guards re-run
    /// when the draft changes.
    pub fn email(&self) -> Option<String> {
        self.draft.get().map(|draft| draft.email)
    }

    /// Non-reactive read for event handlers.
    pub fn email_untracked(&self) -> Option<String> {
        self.draft.get_untracked().map(|draft| draft.email)
    }
}

/// Current registration context, or a detached empty one outside the
/// provider.
pub fn use_registration() -> RegistrationContext {
    use_context::<RegistrationContext>().unwrap_or_else(RegistrationContext::new)
}

/// Entry guard for steps 2 and 3: both require an email carried from a
/// prior step; without one the user restarts at email entry.
pub fn step_entry_redirect(email: Option<&str>) -> Option<&'static str> {
    match email {
        Some(email) if !email.trim().is_empty() => None,
        _ => Some("/register-email"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_without_a_carried_email_bounce_to_step_one() {
        assert_eq!(step_entry_redirect(None), Some("/register-email"));
        assert_eq!(step_entry_redirect(Some("")), Some("/register-email"));
        assert_eq!(step_entry_redirect(Some("   ")), Some("/register-email"));
        assert_eq!(step_entry_redirect(Some("a@b.com")), None);
    }

    #[test]
    fn draft_tracks_the_flow() {
        let registration = RegistrationContext::new();
        assert_eq!(registration.email_untracked(), None);

        registration.start("a@b.com".into());
        assert_eq!(registration.email_untracked(), Some("a@b.com".into()));

        registration.mark_verified();
        assert!(registration
            .draft
            .get_untracked()
            .map(|draft| draft.otp_verified)
            .unwrap_or(false));

        registration.clear();
        assert_eq!(registration.email_untracked(), None);
    }

    #[test]
    fn verifying_without_a_draft_is_a_no_op() {
        let registration = RegistrationContext::new();
        registration.mark_verified();
        assert_eq!(registration.draft.get_untracked(), None);
    }
}
