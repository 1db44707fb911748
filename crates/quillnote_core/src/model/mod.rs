//! Domain model for the tag core.
//!
//! # Responsibility
//! - Define the canonical tag entity and the fixed color palette.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every tag is identified by a stable, non-nil `TagId`.
//! - A tag never exists with an empty (post-trim) name.

pub mod tag;
