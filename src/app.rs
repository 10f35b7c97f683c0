use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::core::{ContactConfig, SectionRegistry};
use crate::ui::{
    AboutSection, ContactSection, Footer, HomeSection, Navbar, ProjectsSection, SkillsSection,
    provide_ui_state_context, use_active_section,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let ui = provide_ui_state_context();
    provide_context(ContactConfig::default());

    // Keep navbar theme in sync with the section on screen
    use_active_section(ui, SectionRegistry::default());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title text="Mostafa Ghazal | Portfolio"/>
        <Meta
            name="description"
            content="Mostafa Ghazal, Software Engineer specializing in Front-End Development and UI/UX Design."
        />

        <div class="min-h-screen flex flex-col">
            <Navbar />

            <main>
                <HomeSection />
                <AboutSection />
                <ProjectsSection />
                <SkillsSection />
                <ContactSection />
            </main>

            <Footer />
        </div>
    }
}
