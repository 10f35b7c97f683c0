//! Fixed navigation bar
//!
//! Colors and logo follow the theme of the section currently on screen.
//! On small screens the links move into a full-screen slide-in menu.

use leptos::prelude::*;

use crate::core::content::NAV_LINKS;
use crate::core::reveal::stagger_delay;
use crate::ui::icon::{Icon, icons};
use crate::ui::state::use_ui_state_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = use_ui_state_context();

    let theme = ui.nav_theme;
    let close = move |_| ui.close_mobile_nav();

    view! {
        <header class=move || {
            format!("fixed top-0 left-0 w-full z-50 transition-colors {}", theme.get().text_class())
        }>
            <div class="flex items-center justify-between">
                // Logo
                <a href="#home" class="w-24 h-auto" on:click=close aria-label="Back to top">
                    <img src=move || theme.get().logo_src() alt="Ghazal Logo" />
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex space-x-6 text-base pr-6">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, id)| {
                            let is_active = move || ui.active_section.get() == id;
                            view! {
                                <a
                                    href=format!("#{}", id)
                                    class="relative group text-current transition-colors"
                                    aria-current=move || is_active().then_some("true")
                                >
                                    {label}
                                    <span
                                        class=move || {
                                            format!(
                                                "absolute left-0 bottom-0 h-[2px] transition-all duration-300 group-hover:w-full {} {}",
                                                theme.get().underline_class(),
                                                if is_active() { "w-full" } else { "w-0" },
                                            )
                                        }
                                    />
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden pr-4"
                    on:click=move |_| ui.toggle_mobile_nav()
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || ui.is_mobile_nav_open.get().to_string()
                >
                    <svg class="w-6 h-6 text-current" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                        <path
                            d="M4 6h16M4 12h16M4 18h16"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                        />
                    </svg>
                </button>
            </div>

            <MobileMenu />
        </header>
    }
}

/// Full-screen menu that slides in from the right
#[component]
fn MobileMenu() -> impl IntoView {
    let ui = use_ui_state_context();
    let open = ui.is_mobile_nav_open;

    view! {
        <div
            class="mobile-menu absolute top-0 left-0 w-full h-screen bg-white text-black z-40 flex md:hidden"
            class:open=move || open.get()
            aria-hidden=move || (!open.get()).to_string()
        >
            // Big "MENU" text on the left side
            <div class="absolute top-0 left-4 h-full w-1/4 flex items-center justify-center" aria-hidden="true">
                <span class="text-gray-300 text-[16rem] font-bold -rotate-90">"MENU"</span>
            </div>

            <button
                class="absolute top-6 right-4 flex items-center gap-1 text-xl"
                on:click=move |_| ui.close_mobile_nav()
            >
                <Icon name=icons::X class="w-5 h-5" />
                "Close"
            </button>

            <div class="flex flex-col items-start justify-center w-3/4 space-y-8 text-5xl font-bold tracking-wide pl-44">
                {NAV_LINKS
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, id))| {
                        view! {
                            <a
                                href=format!("#{}", id)
                                class="mobile-menu-link relative group"
                                style=stagger_delay(i, 50, 300)
                                on:click=move |_| ui.close_mobile_nav()
                            >
                                <span class="group-hover:-translate-y-2 transition-transform inline-block">
                                    {label}
                                </span>
                                <span class="absolute left-0 bottom-0 w-0 h-[2px] bg-black transition-all duration-300 group-hover:w-full" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
