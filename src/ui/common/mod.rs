//! Common reusable UI components shared by the page sections

pub mod animated_text;
pub mod form;
pub mod message;

pub use animated_text::{LetterWave, TypedText};
pub use form::{FormField, HoneypotField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessageStatic};
