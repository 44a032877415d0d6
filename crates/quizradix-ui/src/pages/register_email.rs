use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::{use_auth, use_registration};
use crate::components::spinner::Spinner;
use crate::components::toast::use_toast;
use crate::validate::validate_email;

/// Registration step 1: collect an email and dispatch an OTP to it.
#[component]
pub fn RegisterEmailPage() -> impl IntoView {
    #[allow(unused_variables)]
    let auth = use_auth();
    #[allow(unused_variables)]
    let registration = use_registration();
    #[allow(unused_variables)]
    let toast = use_toast();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let (email, setEmail) = signal(String::new());
    let (emailError, setEmailError) = signal(Option::<&'static str>::None);
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let emailValue = email.get_untracked().trim().to_string();
        let fieldError = validate_email(&emailValue);
        setEmailError.set(fieldError);
        if fieldError.is_some() || loading.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::pages::server_message_or;

            setLoading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                let result =
                    quizradix_api::auth::send_otp(&emailValue, auth.token().as_deref()).await;
                setLoading.set(false);

                match result {
                    Ok(response) => {
                        toast.success(response.message_or("OTP sent to your email."));
                        // Lock the email into the draft for the next steps.
                        registration.start(emailValue);
                        navigate("/verify-otp", Default::default());
                    }
                    Err(error) => {
                        auth.report(&error);
                        toast.error(server_message_or(&error, "Failed to send OTP. Try again."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = emailValue;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Register — Step 1"</h2>
                <p class="auth-copy">
                    "Enter your email. We'll send a 6-digit OTP to verify your email address."
                </p>

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="email"
                            class:field-invalid=move || emailError.get().is_some()
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                        />
                        {move || {
                            emailError
                                .get()
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || loading.get().then(|| view! { <Spinner /> })}
                        {move || if loading.get() { "Sending OTP..." } else { "Send OTP" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
