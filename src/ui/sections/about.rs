use leptos::html;
use leptos::prelude::*;

use crate::core::RevealConfig;
use crate::core::reveal::stagger_delay;
use crate::ui::common::{LetterWave, TypedText};
use crate::ui::visibility::use_reveal;

const ABOUT_TEXT: &str = "I am a dedicated and multifaceted developer with expertise in front-end \
development and graphic design. I excel at crafting innovative and highly functional solutions, \
blending technical precision with artistic creativity. With a sharp eye for detail and a passion \
for delivering remarkable digital experiences, I bring a harmonious balance of technical prowess \
and creative vision to every project I embrace.";

/// About section: typed bio, resume download and flipping portrait
#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::every_reveal());

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="min-h-screen flex flex-col items-center justify-start px-6 py-16
                   bg-[radial-gradient(circle_at_50%_50%,_#01173d_0%,_#000_90%)] text-white"
        >
            <div class="text-center mb-16">
                <LetterWave
                    text="About Me"
                    revealed=revealed
                    letter_class="text-5xl font-bold bg-gradient-to-r from-fuchsia-700 to-purple-700 bg-clip-text text-transparent"
                />
            </div>

            <div class="flex flex-col md:flex-row items-center justify-center space-y-8 md:space-y-0 md:space-x-10">
                <div class="grid gap-6 justify-items-start md:justify-items-stretch">
                    <TypedText
                        text=ABOUT_TEXT
                        revealed=revealed
                        class="text-left text-lg max-w-xl leading-relaxed"
                    />

                    <div
                        class="reveal-from-below"
                        class:revealed=move || revealed.get()
                        style=stagger_delay(0, 0, 400)
                    >
                        <a
                            href="/CV.pdf"
                            download="CV.pdf"
                            class="resume-button relative inline-block mt-6 px-6 py-3 rounded
                                   bg-gradient-to-r from-fuchsia-700 to-purple-700 text-white font-bold overflow-hidden"
                        >
                            <span class="relative">"Get My Resume"</span>
                        </a>
                    </div>
                </div>

                <div class="md:w-1/2 flex justify-center">
                    <img
                        src="/about.png"
                        alt="Mostafa Ghazal About"
                        class="about-image rounded-3xl shadow-lg w-[350px] h-[450px] object-cover"
                        class:revealed=move || revealed.get()
                    />
                </div>
            </div>
        </section>
    }
}
