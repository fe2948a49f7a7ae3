//! Core contracts and helpers for Identikit.
//!
//! This crate defines the canonical record and entity-span types shared by
//! the generation engine, the evaluation crate, and the CLI, together with
//! the character-offset helpers every span check goes through.

pub mod error;
pub mod text;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use text::{char_len, slice_chars};
pub use types::{DocFormat, EntityKind, EntitySpan, GeneratedRecord};
pub use validation::verify_record;

/// Current contract version for emitted dataset artifacts.
pub const DATASET_VERSION: &str = "0.1";
