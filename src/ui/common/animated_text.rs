//! Letter-by-letter text animations

use leptos::prelude::*;

use crate::core::reveal::{split_letters, stagger_delay};

/// Heading whose letters bounce in one after another when `revealed` is set
#[component]
pub fn LetterWave(
    /// Text to animate
    text: &'static str,
    /// Reveal flag of the owning section
    revealed: Signal<bool>,
    /// Classes applied to every letter (gradient, size)
    #[prop(default = "text-5xl font-bold")]
    letter_class: &'static str,
    /// Delay between letters
    #[prop(default = 100)]
    step_ms: u32,
) -> impl IntoView {
    let letters = split_letters(text);

    view! {
        <div class="flex justify-center" aria-label=text>
            {letters
                .into_iter()
                .enumerate()
                .map(|(i, letter)| {
                    view! {
                        <span
                            class=format!("reveal-wave inline-block leading-tight {}", letter_class)
                            class:revealed=move || revealed.get()
                            style=stagger_delay(i, step_ms, 0)
                            aria-hidden="true"
                        >
                            {letter}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Paragraph that types itself out character by character
#[component]
pub fn TypedText(
    /// Text to type out
    text: &'static str,
    /// Reveal flag of the owning section
    revealed: Signal<bool>,
    /// Delay between characters
    #[prop(default = 10)]
    step_ms: u32,
    /// Classes for the wrapping paragraph
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    // Words stay unbroken; letters fade in with a running index across words
    let mut index = 0usize;
    let words: Vec<Vec<(usize, char)>> = text
        .split(' ')
        .map(|word| {
            word.chars()
                .map(|c| {
                    let item = (index, c);
                    index += 1;
                    item
                })
                .collect()
        })
        .collect();

    view! {
        <p class=class aria-label=text>
            {words
                .into_iter()
                .map(|word| {
                    view! {
                        <span class="inline-block" aria-hidden="true">
                            {word
                                .into_iter()
                                .map(|(i, c)| {
                                    view! {
                                        <span
                                            class="reveal-type inline-block"
                                            class:revealed=move || revealed.get()
                                            style=stagger_delay(i, step_ms, 0)
                                        >
                                            {c.to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                            <span>"\u{00A0}"</span>
                        </span>
                    }
                })
                .collect_view()}
        </p>
    }
}
