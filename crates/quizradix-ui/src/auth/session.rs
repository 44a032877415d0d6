//! In-memory auth session shared through Leptos context. The token and user
//! live only in this context — nothing is persisted, so a page reload drops
//! the session. The context is created once at app start and cleared by
//! logout or by the session policy on a 401.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use quizradix_api::ApiError;
use quizradix_types::{Role, User};

use crate::auth::registration::RegistrationContext;

#[derive(Clone, Copy)]
pub struct AuthContext {
    token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
    expired: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        let token = RwSignal::new(None::<String>);
        let user = RwSignal::new(None);
        let expired = RwSignal::new(false);
        let is_authenticated = Signal::derive(move || token.get().is_some());
        Self {
            token,
            user,
            expired,
            is_authenticated,
        }
    }

    /// Installs a fresh session after a successful login.
    pub fn set_session(&self, token: String, user: Option<User>) {
        self.expired.update_untracked(|flag| *flag = false);
        self.token.set(Some(token));
        self.user.set(user);
    }

    /// Drops the token and user. Used by logout and by the session policy.
    pub fn clear_session(&self) {
        self.token.set(None);
        self.user.set(None);
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.get_untracked().map(|user| user.role)
    }

    /// Session policy entry point: a 401 from any endpoint tears the session
    /// down and flags the expiry for the redirect observer. Every other
    /// failure stays with the caller.
    pub fn report(&self, error: &ApiError) {
        if matches!(error, ApiError::Unauthorized) {
            self.clear_session();
            self.expired.set(true);
        }
    }
}

/// Provides the two in-memory slots of the app — the auth session and the
/// registration draft — for the lifetime of the mounted tree.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new());
    provide_context(RegistrationContext::new());

    view! { {children()} }
}

/// Current auth context, or a detached empty one outside the provider.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::new)
}

/// Owns the 401 redirect: whenever a call reports an expired session, the
/// user goes back to the login page. Mounted once, inside the router, so the
/// transport layer never has to know about navigation.
#[component]
pub fn SessionPolicy() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if auth.expired.get() {
            auth.expired.update_untracked(|flag| *flag = false);
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_unauthorized_empties_the_token_store() {
        let auth = AuthContext::new();
        auth.set_session(
            "t-1".into(),
            Some(User {
                id: "u1".into(),
                name: "Ada".into(),
                email: "a@b.com".into(),
                role: Role::Student,
            }),
        );
        assert!(auth.token().is_some());

        auth.report(&ApiError::Unauthorized);

        assert_eq!(auth.token(), None);
        assert_eq!(auth.user.get_untracked(), None);
        assert!(auth.expired.get_untracked());
    }

    #[test]
    fn reporting_other_failures_keeps_the_session() {
        let auth = AuthContext::new();
        auth.set_session("t-1".into(), None);

        auth.report(&ApiError::Timeout);
        auth.report(&ApiError::Server {
            status: 500,
            message: "oops".into(),
        });

        assert_eq!(auth.token(), Some("t-1".into()));
        assert!(!auth.expired.get_untracked());
    }

    #[test]
    fn a_new_session_resets_a_pending_expiry() {
        let auth = AuthContext::new();
        auth.report(&ApiError::Unauthorized);
        assert!(auth.expired.get_untracked());

        auth.set_session("t-2".into(), None);
        assert!(!auth.expired.get_untracked());
        assert_eq!(auth.token(), Some("t-2".into()));
    }
}
