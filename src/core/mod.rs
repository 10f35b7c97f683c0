//! Core page logic: section registry, UI state, visibility tracking,
//! reveal animations and contact submission

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod reveal;
pub mod sections;
pub mod ui_state;
pub mod visibility;

pub use contact::{
    ContactConfig, ContactError, ContactForm, FetchRelay, FormRelay, FormSubmission,
    SubmissionStatus, submit_contact,
};
pub use reveal::{REVEAL_READY_CLASS, RevealConfig, RevealPolicy, RevealState};
pub use sections::{NavTheme, RegistryError, SECTION_THEMES, SectionRegistry, SectionTheme};
pub use ui_state::UiState;
pub use visibility::{ACTIVE_SECTION_THRESHOLD, VisibilityEntry, apply_visibility_batch};
