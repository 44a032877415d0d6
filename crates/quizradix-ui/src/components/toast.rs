use leptos::prelude::*;

/// How long a toast stays on screen.
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Error);
    }

    pub fn push(&self, message: String, level: ToastLevel) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, message, level });
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|toasts| {
                    toasts.retain(|toast| toast.id != id);
                });
            },
            DISMISS_AFTER,
        );
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Provides toast context and renders the toast container.
/// Place this once near the root of your app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };

    provide_context(ctx);

    let toasts = ctx.toasts;

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                let:toast
            >
                <div class=move || {
                    let levelClass = match toast.level {
                        ToastLevel::Success => "toast-success",
                        ToastLevel::Error => "toast-error",
                    };
                    format!("toast {levelClass}")
                }>
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
