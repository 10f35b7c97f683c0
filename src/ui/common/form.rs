use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Form field name sent to the relay
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("contact-{}", name);

    view! {
        <div class="space-y-1.5 text-left">
            <label class="block text-sm font-medium text-slate-700" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="w-full rounded-lg border border-slate-300 bg-white px-4 py-2 text-black
                       focus:outline-none focus:ring-2 focus:ring-cyan-500"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled text area bound to a string signal
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Form field name sent to the relay
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("contact-{}", name);

    view! {
        <div class="space-y-1.5 text-left">
            <label class="block text-sm font-medium text-slate-700" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=id
                name=name
                class="w-full resize-none rounded-lg border border-slate-300 bg-white px-4 py-2 text-black
                       focus:outline-none focus:ring-2 focus:ring-cyan-500"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Hidden spam trap; real visitors never see or fill it
#[component]
pub fn HoneypotField(
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            name="_gotcha"
            class="hidden"
            tabindex="-1"
            autocomplete="off"
            aria-hidden="true"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
