//! # notepad-core
//!
//! Core types, traits, and validation rules for notepad.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the storage and HTTP crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use validation::{FieldError, FieldErrors, NotepadInput, SignupInput, ValidNotepad, ValidSignup};
