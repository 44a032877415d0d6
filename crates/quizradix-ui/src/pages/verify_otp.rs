use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth::{step_entry_redirect, use_auth, use_registration};
use crate::components::spinner::Spinner;
use crate::components::toast::use_toast;
use crate::validate::validate_otp;

/// Seconds the resend button stays locked after an OTP dispatch.
const RESEND_COOLDOWN_SECS: u32 = 120;

/// Resend throttle, decremented by a one-second tick.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    fn start() -> Self {
        Self {
            remaining: RESEND_COOLDOWN_SECS,
        }
    }

    fn tick(self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }

    fn ready(self) -> bool {
        self.remaining == 0
    }

    /// mm:ss label shown while the button is locked.
    fn label(self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// Registration step 2: check the emailed code, with a throttled resend.
#[component]
pub fn OtpVerifyPage() -> impl IntoView {
    #[allow(unused_variables)]
    let auth = use_auth();
    let registration = use_registration();
    #[allow(unused_variables)]
    let toast = use_toast();
    let navigate = use_navigate();

    // Entry guard: this step needs the email carried from step 1.
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

    let (otp, setOtp) = signal(String::new());
    let (otpError, setOtpError) = signal(Option::<&'static str>::None);
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);
    #[allow(unused_variables)]
    let (resendLoading, setResendLoading) = signal(false);
    #[allow(unused_variables)]
    let (cooldown, setCooldown) = signal(Cooldown::start());

    #[cfg(feature = "hydrate")]
    {
        let handle = set_interval_with_handle(
            move || setCooldown.update(|current| *current = current.tick()),
            std::time::Duration::from_secs(1),
        )
        .expect("failed to set interval");
        on_cleanup(move || handle.clear());
    }

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let otpValue = otp.get_untracked().trim().to_string();
        let fieldError = validate_otp(&otpValue);
        setOtpError.set(fieldError);
        if fieldError.is_some() || loading.get_untracked() {
            return;
        }
        let Some(emailValue) = registration.email_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use quizradix_types::VerifyOtpRequest;
            use wasm_bindgen_futures::spawn_local;

            use crate::pages::server_message_or;

            setLoading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                let request = VerifyOtpRequest {
                    email: emailValue,
                    otp: otpValue,
                };
                let result =
                    quizradix_api::auth::verify_otp(&request, auth.token().as_deref()).await;
                setLoading.set(false);

                match result {
                    Ok(response) => {
                        toast.success(response.message_or("OTP verified"));
                        registration.mark_verified();
                        navigate("/register", Default::default());
                    }
                    Err(error) => {
                        auth.report(&error);
                        toast.error(server_message_or(
                            &error,
                            "OTP verification failed. Try again.",
                        ));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (otpValue, emailValue);
        }
    };

    let onResend = move |_| {
        if !cooldown.get_untracked().ready() || resendLoading.get_untracked() {
            return;
        }
        let Some(emailValue) = registration.email_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::pages::server_message_or;

            setResendLoading.set(true);
            spawn_local(async move {
                let result =
                    quizradix_api::auth::send_otp(&emailValue, auth.token().as_deref()).await;
                setResendLoading.set(false);

                match result {
                    Ok(response) => {
                        toast.success(response.message_or("OTP resent to your email."));
                        setCooldown.set(Cooldown::start());
                    }
                    Err(error) => {
                        auth.report(&error);
                        toast.error(server_message_or(
                            &error,
                            "Failed to resend OTP. Try again later.",
                        ));
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
                <h2>"Verify OTP — Step 2"</h2>
                <p class="auth-copy">
                    "We sent a 6-digit code to "
                    <strong>{move || registration.email().unwrap_or_default()}</strong>
                </p>

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="otp">"Enter OTP"</label>
                        <input
                            type="text"
                            id="otp"
                            inputmode="numeric"
                            maxlength="6"
                            class:field-invalid=move || otpError.get().is_some()
                            on:input=move |ev| setOtp.set(event_target_value(&ev))
                        />
                        {move || {
                            otpError
                                .get()
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>
                    <div class="form-row">
                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || loading.get().then(|| view! { <Spinner /> })}
                            {move || if loading.get() { "Verifying..." } else { "Verify OTP" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-ghost resend"
                            disabled=move || !cooldown.get().ready() || resendLoading.get()
                            on:click=onResend
                        >
                            {move || {
                                if resendLoading.get() {
                                    "Resending...".to_string()
                                } else if cooldown.get().ready() {
                                    "Resend OTP".to_string()
                                } else {
                                    format!("Resend in {}", cooldown.get().label())
                                }
                            }}
                        </button>
                    </div>
                </form>

                <p class="auth-hint">
                    "If you did not receive the email, check your spam folder or try resending after the timer."
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{Cooldown, RESEND_COOLDOWN_SECS};

    #[test]
    fn cooldown_starts_locked_at_two_minutes() {
        let cooldown = Cooldown::start();
        assert_eq!(cooldown.remaining, RESEND_COOLDOWN_SECS);
        assert!(!cooldown.ready());
    }

    #[test]
    fn cooldown_unlocks_only_at_zero() {
        let mut cooldown = Cooldown::start();
        for _ in 0..RESEND_COOLDOWN_SECS - 1 {
            cooldown = cooldown.tick();
            assert!(!cooldown.ready());
        }
        cooldown = cooldown.tick();
        assert!(cooldown.ready());
    }

    #[test]
    fn ticking_past_zero_saturates() {
        let cooldown = Cooldown { remaining: 0 };
        assert_eq!(cooldown.tick().remaining, 0);
        assert!(cooldown.tick().ready());
    }

    #[test]
    fn a_resend_restarts_the_full_window() {
        let cooldown = Cooldown { remaining: 0 };
        assert!(cooldown.ready());
        let restarted = Cooldown::start();
        assert_eq!(restarted.remaining, RESEND_COOLDOWN_SECS);
        assert!(!restarted.ready());
    }

    #[test]
    fn label_formats_minutes_and_seconds() {
        assert_eq!(Cooldown { remaining: 120 }.label(), "02:00");
        assert_eq!(Cooldown { remaining: 59 }.label(), "00:59");
        assert_eq!(Cooldown { remaining: 0 }.label(), "00:00");
    }
}
