use chrono::Datelike;
use leptos::prelude::*;

use crate::core::content::SOCIAL_LINKS;
use crate::ui::icon::Icon;

/// Footer with social links and copyright
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-[radial-gradient(circle_at_50%_50%,_#01173d_0%,_#000_90%)] text-white py-6">
            <div class="max-w-5xl mx-auto flex flex-col items-center space-y-3">
                <div class="flex space-x-6">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            let external = link.opens_new_tab();
                            view! {
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    class="text-2xl hover:opacity-70 transition"
                                    title=link.label
                                    aria-label=link.label
                                >
                                    <Icon name=link.icon.icon_name() class="w-6 h-6 invert" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="text-sm">
                    {format!("© {} My Portfolio. All rights reserved.", year)}
                </p>
            </div>
        </footer>
    }
}
