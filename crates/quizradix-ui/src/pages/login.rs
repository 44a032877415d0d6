use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;
use crate::components::spinner::Spinner;
use crate::components::toast::use_toast;
use crate::validate::{validate_login, LoginErrors};

#[component]
pub fn LoginPage() -> impl IntoView {
    #[allow(unused_variables)]
    let auth = use_auth();
    #[allow(unused_variables)]
    let toast = use_toast();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (errors, setErrors) = signal(LoginErrors::default());
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let emailValue = email.get_untracked().trim().to_string();
        let passwordValue = password.get_untracked();

        // Schema check first: an invalid form never reaches the network.
        let fieldErrors = validate_login(&emailValue, &passwordValue);
        setErrors.set(fieldErrors);
        if !fieldErrors.is_clean() || loading.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use quizradix_types::LoginRequest;
            use wasm_bindgen_futures::spawn_local;

            setLoading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                let request = LoginRequest {
                    email: emailValue,
                    password: passwordValue,
                };
                let result = quizradix_api::auth::login(&request, auth.token().as_deref()).await;
                setLoading.set(false);

                match result {
                    Ok(credentials) => {
                        let role = credentials
                            .user
                            .as_ref()
                            .map(|user| user.role)
                            .unwrap_or_default();
                        auth.set_session(credentials.token, credentials.user);
                        toast.success("Logged in successfully!");
                        navigate(role.dashboard_path(), Default::default());
                    }
                    Err(error) => {
                        auth.report(&error);
                        if error.is_invalid_credentials() {
                            toast.error("Invalid email or password.");
                        } else {
                            toast.error("Login failed. Try again later.");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (emailValue, passwordValue);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"Q"</div>
                    <h1>"quizRadix"</h1>
                    <p>"Sign in to your account to continue"</p>
                </div>

                <form on:submit=onSubmit aria-label="login form">
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="email"
                            class:field-invalid=move || errors.get().email.is_some()
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .get()
                                .email
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            class:field-invalid=move || errors.get().password.is_some()
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .get()
                                .password
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || loading.get().then(|| view! { <Spinner /> })}
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-footer">
                    <span>"Don't have an account? "</span>
                    <a href="/register-email">"Register"</a>
                </div>
            </div>
        </div>
    }
}
