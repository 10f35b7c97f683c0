pub mod common;
pub mod footer;
pub mod icon;
pub mod navbar;
pub mod sections;
pub mod state;
pub mod visibility;

pub use footer::Footer;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use sections::{AboutSection, ContactSection, HomeSection, ProjectsSection, SkillsSection};
pub use state::{UiStateContext, provide_ui_state_context, use_ui_state_context};
pub use visibility::{use_active_section, use_reveal};
