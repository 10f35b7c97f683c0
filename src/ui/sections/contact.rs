//! Contact section: contact form and direct contact links
//!
//! The form posts to the form relay from the browser. Until the wasm bundle
//! has hydrated, the plain HTML form posts to the same endpoint natively.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::CONTACT_LINKS;
use crate::core::reveal::stagger_delay;
use crate::core::{ContactConfig, ContactForm, FetchRelay, FormSubmission, RevealConfig, SubmissionStatus};
use crate::ui::common::{
    ErrorMessage, FormField, HoneypotField, LetterWave, SuccessMessageStatic, TextAreaField, TypedText,
};
use crate::ui::icon::Icon;
use crate::ui::visibility::use_reveal;

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::every_reveal());

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="min-h-screen flex flex-col items-center justify-center bg-[#f0f4f8] px-6 py-16"
        >
            <div class="mb-8">
                <LetterWave
                    text="Get In Touch"
                    revealed=revealed
                    letter_class="text-5xl font-bold bg-gradient-to-t from-cyan-500 to-slate-950 bg-clip-text text-transparent"
                />
            </div>

            <TypedText
                text="Let’s discuss your project and collaborate to achieve outstanding results in web development and graphic design."
                revealed=revealed
                step_ms=50
                class="text-center text-lg text-black max-w-3xl mb-4"
            />

            <p
                class="reveal-from-below text-center text-sm text-gray-500 italic mb-12"
                class:revealed=move || revealed.get()
                style=stagger_delay(0, 0, 400)
            >
                "\"Empowering businesses through innovative design and development solutions.\""
            </p>

            <ContactFormPanel />

            <div class="grid grid-cols-3 sm:grid-cols-5 gap-6 mt-12 animate-float">
                {CONTACT_LINKS
                    .into_iter()
                    .enumerate()
                    .map(|(i, link)| {
                        let external = link.opens_new_tab();
                        view! {
                            <a
                                href=link.href
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                                class="reveal-bounce flex items-center justify-center w-16 h-16 rounded-full
                                       bg-gradient-to-t from-cyan-500 to-slate-950 shadow-lg hover:scale-110 transition-transform"
                                class:revealed=move || revealed.get()
                                style=stagger_delay(i, 0, 0)
                                title=link.label
                                aria-label=link.label
                            >
                                <Icon name=link.icon.icon_name() class="w-7 h-7 invert" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Field signals of the contact form
#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
    gotcha: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            gotcha: RwSignal::new(String::new()),
        }
    }

    fn submission(&self) -> FormSubmission {
        FormSubmission {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            message: self.message.get_untracked(),
            gotcha: self.gotcha.get_untracked(),
        }
    }
}

/// Owns the form state and sends submissions through the browser relay
#[component]
fn ContactFormPanel() -> impl IntoView {
    let config = use_context::<ContactConfig>().unwrap_or_default();
    let endpoint = config.endpoint.clone();

    let fields = ContactFields::new();
    let status = RwSignal::new(SubmissionStatus::Idle);

    let on_submit = Callback::new(move |_: ()| {
        if status.with_untracked(|s| s.is_sending()) {
            return;
        }

        let mut form = ContactForm::new(fields.submission());
        let config = config.clone();

        status.set(SubmissionStatus::Sending);
        spawn_local(async move {
            if let Err(e) = form.submit(&FetchRelay, &config).await {
                leptos::logging::warn!("Contact submission failed: {}", e);
            }
            status.set(form.status);
        });
    });

    view! { <ContactFormView endpoint=endpoint fields=fields status=status on_submit=on_submit /> }
}

/// Form fields, submit button and status; replaced by a thank-you note on success
#[component]
fn ContactFormView(
    /// Native form action, used until the page has hydrated
    endpoint: String,
    fields: ContactFields,
    status: RwSignal<SubmissionStatus>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let ContactFields { name, email, message, gotcha } = fields;

    let sending = Signal::derive(move || status.with(|s| s.is_sending()));
    let error = Signal::derive(move || status.with(|s| s.error().map(str::to_string)));

    view! {
        <div class="w-full max-w-xl">
            <Show
                when=move || !status.with(|s| s.is_submitted())
                fallback=|| view! {
                    <SuccessMessageStatic
                        title="Thank you!"
                        message="Your message has been sent. I'll get back to you soon."
                    />
                }
            >
                <form
                    action=endpoint.clone()
                    method="POST"
                    class="space-y-4 rounded-2xl bg-white/80 p-6 shadow-lg"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <FormField
                        label="Name"
                        name="name"
                        required=true
                        placeholder="Your name"
                        value=name.into()
                        on_input=Callback::new(move |v: String| name.set(v))
                        disabled=sending
                    />
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        required=true
                        placeholder="you@example.com"
                        value=email.into()
                        on_input=Callback::new(move |v: String| email.set(v))
                        disabled=sending
                    />
                    <TextAreaField
                        label="Message"
                        name="message"
                        required=true
                        placeholder="Tell me about your project"
                        value=message.into()
                        on_input=Callback::new(move |v: String| message.set(v))
                        disabled=sending
                    />
                    <HoneypotField value=gotcha.into() on_input=Callback::new(move |v: String| gotcha.set(v)) />

                    <ErrorMessage error=error />

                    <button
                        type="submit"
                        class="w-full rounded-lg bg-gradient-to-t from-cyan-500 to-slate-950 px-6 py-3 font-bold text-white
                               transition-opacity disabled:opacity-60"
                        disabled=move || sending.get()
                    >
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::SUBMIT_FAILED_MESSAGE;

    fn render_form(status: SubmissionStatus) -> String {
        let owner = Owner::new();
        owner.set();

        let fields = ContactFields::new();
        fields.name.set("Jane".to_string());
        fields.email.set("jane@x.com".to_string());
        let status = RwSignal::new(status);

        view! {
            <ContactFormView
                endpoint="https://relay.test/f/abc".to_string()
                fields=fields
                status=status
                on_submit=Callback::new(|_: ()| {})
            />
        }
        .to_html()
    }

    #[test]
    fn test_submitted_replaces_form_with_thank_you() {
        let html = render_form(SubmissionStatus::Submitted);

        assert!(html.contains("Thank you!"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_failed_keeps_form_and_shows_error() {
        let html = render_form(SubmissionStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string()));

        assert!(html.contains("<form"));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(SUBMIT_FAILED_MESSAGE));
        assert!(!html.contains("Thank you!"));
    }

    #[test]
    fn test_idle_form_posts_to_relay_without_error() {
        let html = render_form(SubmissionStatus::Idle);

        assert!(html.contains(r#"action="https://relay.test/f/abc""#));
        assert!(html.contains(r#"name="_gotcha""#));
        assert!(!html.contains(r#"role="alert""#));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_sending_disables_inputs() {
        let idle = render_form(SubmissionStatus::Idle);
        let sending = render_form(SubmissionStatus::Sending);

        // name, email, message and the submit button
        assert_eq!(
            sending.matches("disabled").count(),
            idle.matches("disabled").count() + 4
        );
        assert!(sending.contains("Sending..."));
    }
}
