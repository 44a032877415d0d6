use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth::use_auth;

/// Default route: forwards a signed-in user to their role's dashboard and
/// everyone else to login.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = match auth.user.get().map(|user| user.role) {
            Some(role) => role.dashboard_path(),
            None => "/login",
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="loading">
            <div class="spinner"></div>
            "Loading..."
        </div>
    }
}
