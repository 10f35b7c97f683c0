//! Status messages shown in place of, or next to, the contact form

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-center gap-2 rounded-lg bg-red-50 px-4 py-3 text-sm text-red-700" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-5 h-5"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Static success message (always visible)
#[component]
pub fn SuccessMessageStatic(
    /// Headline text
    title: &'static str,
    /// Body text
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3 rounded-2xl bg-white/80 px-8 py-10 text-center shadow-lg" role="status">
            <Icon name=icons::CHECK class="w-10 h-10"/>
            <h3 class="text-2xl font-bold text-slate-900">{title}</h3>
            <p class="text-slate-600">{message}</p>
        </div>
    }
}
