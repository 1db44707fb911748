//! Tag registry and its external collaborator contracts.
//!
//! # Responsibility
//! - Own the tag set and the tag/note association indices.
//! - Define the note-store contract the registry queries for trash state.
//!
//! # Invariants
//! - Derived note counts are recomputed on every read, never cached.
//! - Mutations are atomic: rejected operations leave no partial state.

pub mod note_store;
pub mod tag_registry;
