use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use quizradix_types::Role;

use crate::auth::{step_entry_redirect, use_auth, use_registration};
use crate::components::spinner::Spinner;
use crate::components::toast::use_toast;
use crate::validate::{validate_profile, ProfileErrors};

/// Registration step 3: complete the profile for the verified email.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[allow(unused_variables)]
    let auth = use_auth();
    let registration = use_registration();
    #[allow(unused_variables)]
    let toast = use_toast();
    let navigate = use_navigate();

    // Entry guard: this step needs the email carried from the earlier steps.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if let Some(target) = step_entry_redirect(registration.email().as_deref()) {
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    let (name, setName) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (confirmPassword, setConfirmPassword) = signal(String::new());
    let (role, setRole) = signal(Role::Student);
    let (errors, setErrors) = signal(ProfileErrors::default());
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let nameValue = name.get_untracked().trim().to_string();
        let passwordValue = password.get_untracked();
        let confirmValue = confirmPassword.get_untracked();

        let fieldErrors = validate_profile(&nameValue, &passwordValue, &confirmValue);
        setErrors.set(fieldErrors);
        if !fieldErrors.is_clean() || loading.get_untracked() {
            return;
        }
        let Some(emailValue) = registration.email_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use quizradix_api::ApiError;
            use quizradix_types::RegisterRequest;
            use wasm_bindgen_futures::spawn_local;

            setLoading.set(true);
            let navigate = navigate.clone();
            let roleValue = role.get_untracked();
            spawn_local(async move {
                let request = RegisterRequest {
                    name: nameValue,
                    email: emailValue,
                    password: passwordValue,
                    role: roleValue,
                };
                let result =
                    quizradix_api::auth::register(&request, auth.token().as_deref()).await;
                setLoading.set(false);

                match result {
                    Ok(response) => {
                        toast.success(response.message_or("Account created successfully"));
                        registration.clear();
                        navigate(
                            "/login",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(error) => {
                        auth.report(&error);
                        match error {
                            // One notification per server-reported field error.
                            ApiError::Rejected { errors } => {
                                for message in errors {
                                    toast.error(message);
                                }
                            }
                            _ => toast.error("Registration failed. Try again."),
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (nameValue, passwordValue, emailValue);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Complete Registration — Step 3"</h2>

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            autocomplete="name"
                            class:field-invalid=move || errors.get().name.is_some()
                            on:input=move |ev| setName.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .get()
                                .name
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        // Locked to the draft carried from the earlier steps.
                        <input
                            type="email"
                            id="email"
                            class="field-readonly"
                            readonly
                            prop:value=move || registration.email().unwrap_or_default()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="new-password"
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

                    <div class="form-group">
                        <label for="confirm_password">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirm_password"
                            autocomplete="new-password"
                            class:field-invalid=move || errors.get().confirm_password.is_some()
                            on:input=move |ev| setConfirmPassword.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .get()
                                .confirm_password
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            on:change=move |ev| {
                                setRole.set(
                                    Role::parse(&event_target_value(&ev)).unwrap_or_default(),
                                );
                            }
                        >
                            <option value="student" selected=move || role.get() == Role::Student>
                                "Student"
                            </option>
                            <option value="tutor" selected=move || role.get() == Role::Tutor>
                                "Tutor"
                            </option>
                        </select>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || loading.get().then(|| view! { <Spinner /> })}
                        {move || if loading.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
