use leptos::prelude::*;

/// Inline spinner shown on submit buttons while a request is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="status" aria-label="Loading"></span> }
}
