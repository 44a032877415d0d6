use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use quizradix_types::Role;

use crate::auth::use_auth;

/// Where a guarded view must bounce to, if anywhere: no session goes to
/// login, a role mismatch goes to the default route.
pub fn guard_redirect(current: Option<Role>, required: Option<Role>) -> Option<&'static str> {
    match (current, required) {
        (None, _) => Some("/login"),
        (Some(_), None) => None,
        (Some(have), Some(want)) => {
            if have == want {
                None
            } else {
                Some("/")
            }
        }
    }
}

/// Renders its children only for a signed-in user with the required role.
/// UX-only guard; real access control must live on the API.
#[component]
pub fn RequireRole(
    #[prop(optional, into)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let verdict = Signal::derive(move || {
        guard_redirect(auth.user.get().map(|user| user.role), role)
    });

    Effect::new(move |_| {
        if let Some(target) = verdict.get() {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { {move || verdict.get().is_none().then(|| children())} }
}

#[cfg(test)]
mod tests {
    use super::guard_redirect;
    use quizradix_types::Role;

    #[test]
    fn missing_session_redirects_to_login() {
        assert_eq!(guard_redirect(None, Some(Role::Student)), Some("/login"));
        assert_eq!(guard_redirect(None, None), Some("/login"));
    }

    #[test]
    fn role_mismatch_redirects_to_default_route() {
        assert_eq!(guard_redirect(Some(Role::Student), Some(Role::Tutor)), Some("/"));
        assert_eq!(guard_redirect(Some(Role::Tutor), Some(Role::Student)), Some("/"));
    }

    #[test]
    fn matching_role_renders() {
        assert_eq!(guard_redirect(Some(Role::Tutor), Some(Role::Tutor)), None);
        assert_eq!(guard_redirect(Some(Role::Student), Some(Role::Student)), None);
    }

    #[test]
    fn no_required_role_only_needs_a_session() {
        assert_eq!(guard_redirect(Some(Role::Student), None), None);
    }
}
