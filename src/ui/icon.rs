use leptos::prelude::*;

use crate::core::content::LinkIcon;

#[component]
pub fn Icon(
    /// Icon file name under /icons, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names used across the page
pub mod icons {
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const PHONE: &str = "phone";
    pub const WHATSAPP: &str = "whatsapp";
    pub const LINKEDIN: &str = "linkedin";
    pub const GITHUB: &str = "github";
    pub const EMAIL: &str = "email";
}

impl LinkIcon {
    pub fn icon_name(&self) -> &'static str {
        match self {
            LinkIcon::Phone => icons::PHONE,
            LinkIcon::WhatsApp => icons::WHATSAPP,
            LinkIcon::LinkedIn => icons::LINKEDIN,
            LinkIcon::GitHub => icons::GITHUB,
            LinkIcon::Email => icons::EMAIL,
        }
    }
}
