use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use quizradix_types::Role;

use crate::auth::{AuthProvider, SessionPolicy};
use crate::components::guard::RequireRole;
use crate::components::toast::ToastProvider;
use crate::pages::dashboard::{StudentDashboardPage, TutorDashboardPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::register_email::RegisterEmailPage;
use crate::pages::verify_otp::OtpVerifyPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/quizradix-console.css" />
        <Title text="quizRadix" />
        <ToastProvider>
            <AuthProvider>
                <Router>
                    <SessionPolicy />
                    <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=StaticSegment("login") view=LoginPage />
                        <Route path=StaticSegment("register-email") view=RegisterEmailPage />
                        <Route path=StaticSegment("verify-otp") view=OtpVerifyPage />
                        <Route path=StaticSegment("register") view=RegisterPage />
                        <Route
                            path=(StaticSegment("student"), StaticSegment("dashboard"))
                            view=StudentDashboardView
                        />
                        <Route
                            path=(StaticSegment("tutor"), StaticSegment("dashboard"))
                            view=TutorDashboardView
                        />
                    </Routes>
                </Router>
            </AuthProvider>
        </ToastProvider>
    }
}

#[component]
fn StudentDashboardView() -> impl IntoView {
    view! {
        <RequireRole role=Role::Student>
            <StudentDashboardPage />
        </RequireRole>
    }
}

#[component]
fn TutorDashboardView() -> impl IntoView {
    view! {
        <RequireRole role=Role::Tutor>
            <TutorDashboardPage />
        </RequireRole>
    }
}
