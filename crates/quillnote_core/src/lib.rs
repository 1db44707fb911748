//! Core tag-registry logic for Quillnote.
//! This crate is the single source of truth for tag business invariants.

pub mod logging;
pub mod model;
pub mod registry;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::tag::{Tag, TagColor, TagId, TagValidationError};
pub use registry::note_store::{InMemoryNoteStore, NoteId, NoteStore};
pub use registry::tag_registry::{RegistryError, RegistryResult, TagRegistry};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
