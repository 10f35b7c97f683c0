use leptos::html;
use leptos::prelude::*;

use crate::core::RevealConfig;
use crate::core::content::{PROJECTS, Project};
use crate::core::reveal::stagger_delay;
use crate::ui::common::LetterWave;
use crate::ui::icon::{Icon, icons};
use crate::ui::visibility::use_reveal;

/// Projects gallery
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::every_reveal());

    view! {
        <section id="projects" node_ref=section_ref class="min-h-screen px-4 py-16 bg-[#f0f4f8]">
            <div class="text-center mb-12">
                <LetterWave
                    text="Projects"
                    revealed=revealed
                    letter_class="text-5xl font-bold leading-[1.4] bg-gradient-to-t from-cyan-500 to-slate-950 bg-clip-text text-transparent"
                />
                <p class="text-lg text-gray-600 mt-5">
                    "Here are some of the projects I have worked on, showcasing my skills in modern web development technologies."
                </p>
            </div>

            <div class="max-w-7xl mx-auto animate-float">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project=project index=i revealed=revealed /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, revealed: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="reveal-from-below relative group rounded-lg overflow-hidden shadow-lg"
            class:revealed=move || revealed.get()
            style=stagger_delay(index, 100, 0)
        >
            <div class="w-full h-[300px]">
                {project.image.map(|src| view! {
                    <img src=src alt=project.title class="w-full h-full object-contain rounded-lg" />
                })}
            </div>

            // Hover overlay
            <div class="absolute bottom-0 left-0 w-full h-full bg-gradient-to-t from-slate-900 to-transparent
                        opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex flex-col justify-end p-4">
                <ul class="flex flex-wrap gap-3 text-left mb-4">
                    {project
                        .tools
                        .iter()
                        .map(|tool| view! {
                            <li class="bg-slate-600 px-3 py-1 rounded-full text-sm text-cyan-400">{*tool}</li>
                        })
                        .collect_view()}
                </ul>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-cyan-400 hover:text-cyan-500 transition flex items-center"
                >
                    <Icon name=icons::EXTERNAL_LINK class="w-4 h-4 mr-2" />
                    "Visit"
                </a>
            </div>
        </div>
    }
}
