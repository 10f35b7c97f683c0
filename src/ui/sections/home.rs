use leptos::html;
use leptos::prelude::*;

use crate::core::RevealConfig;
use crate::core::reveal::stagger_delay;
use crate::ui::visibility::use_reveal;

/// Hero section: greeting, tagline and portrait
#[component]
pub fn HomeSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::every_reveal());

    view! {
        <section
            id="home"
            node_ref=section_ref
            class="min-h-screen bg-cover bg-center bg-no-repeat relative overflow-hidden
                   px-6 md:px-16 flex flex-col-reverse md:flex-row items-center"
            style="background-image: url('/cover2.jpg')"
        >
            <div class="w-full md:w-1/2 flex flex-col justify-center items-start text-left max-w-lg py-6 md:py-8">
                <h1
                    class="reveal-from-left font-tempus text-5xl md:text-7xl lg:text-8xl text-black mb-4"
                    class:revealed=move || revealed.get()
                >
                    "Hello"
                </h1>

                <p
                    class="reveal-from-left text-black text-base md:text-lg mb-4 md:mb-6 pr-4"
                    class:revealed=move || revealed.get()
                    style=stagger_delay(1, 300, 0)
                >
                    "I’m Mostafa Ghazal, a Software Engineer, specializing in Front-End Development & UI/UX Design."
                </p>

                <a
                    href="#about"
                    class="reveal-from-left inline-block px-6 py-3 rounded bg-transparent text-black border-2 border-black
                           hover:bg-black hover:text-white transition-colors"
                    class:revealed=move || revealed.get()
                    style=stagger_delay(0, 0, 500)
                >
                    "Learn More"
                </a>
            </div>

            // Large picture for desktop
            <img
                src="/pic.png"
                alt="Mostafa Ghazal"
                class="reveal-from-right hidden md:block absolute top-0 right-0 z-20 h-full w-auto object-cover pl-48"
                class:revealed=move || revealed.get()
            />

            // Round picture for mobile
            <img
                src="/hero.png"
                alt="Mostafa Ghazal Mobile"
                class="reveal-from-right block md:hidden w-[80%] max-w-sm h-auto z-10 mb-6 rounded-full shadow-2xl"
                class:revealed=move || revealed.get()
            />
        </section>
    }
}
