//! Page sections, top to bottom
//!
//! Each section owns its element id (matching the section registry) and
//! animates independently from its own visibility.

mod about;
mod contact;
mod home;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use home::HomeSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
