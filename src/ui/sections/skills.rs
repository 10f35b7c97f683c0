use leptos::html;
use leptos::prelude::*;

use crate::core::RevealConfig;
use crate::core::content::SKILLS;
use crate::core::reveal::stagger_delay;
use crate::ui::common::LetterWave;
use crate::ui::visibility::use_reveal;

/// Skills grid; plays its entrance once and then stays put
#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::once());

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="min-h-screen flex items-center justify-center
                   bg-[radial-gradient(circle_at_50%_50%,_#01173d_0%,_#000_90%)]"
        >
            <div class="max-w-5xl w-full px-4 py-16 text-center">
                <div class="mb-8">
                    <LetterWave
                        text="SKILLS"
                        revealed=revealed
                        letter_class="text-5xl font-bold bg-gradient-to-r from-fuchsia-700 to-purple-700 bg-clip-text text-transparent"
                    />
                </div>

                <p class="text-xl mb-8 text-white pb-10">"The skills, tools and technologies I use:"</p>

                <ul class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-6 gap-8 place-items-center animate-float">
                    {SKILLS
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <li
                                    class="reveal-pop flex flex-col items-center group"
                                    class:revealed=move || revealed.get()
                                    style=stagger_delay(i, 30, 100)
                                >
                                    <div class="w-16 h-16 flex items-center justify-center relative">
                                        <img
                                            src=skill.icon
                                            alt=skill.name
                                            class="max-w-full max-h-full object-contain transition-transform duration-300
                                                   group-hover:scale-110 group-hover:drop-shadow-[0_0_20px_rgba(34,211,238,0.9)]"
                                        />
                                    </div>
                                    <p class="mt-2 text-sm md:text-base text-white opacity-0 transition-opacity duration-300
                                              group-hover:opacity-100 group-hover:text-cyan-400">
                                        {skill.name}
                                    </p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
