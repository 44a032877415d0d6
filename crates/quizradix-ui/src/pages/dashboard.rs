use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth::use_auth;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell
            title="Student dashboard"
            subtitle="Quizzes shared with you will show up here."
        />
    }
}

#[component]
pub fn TutorDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell
            title="Tutor dashboard"
            subtitle="Quizzes you publish will show up here."
        />
    }
}

#[component]
fn DashboardShell(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let displayName = move || {
        auth.user
            .get()
            .map(|user| user.name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "there".to_string())
    };

    // Logout: drop the in-memory session and go back to login.
    let onSignOut = move |_| {
        auth.clear_session();
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <div class="dashboard-header">
            <h1>{title}</h1>
            <p class="subtitle">{subtitle}</p>
        </div>
        <div class="card">
            <p>{move || format!("Signed in as {}.", displayName())}</p>
            <button class="btn btn-ghost" on:click=onSignOut>
                "Sign out"
            </button>
        </div>
    }
}
