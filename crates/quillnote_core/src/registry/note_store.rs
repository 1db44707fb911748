//! Note store collaborator contract.
//!
//! # Responsibility
//! - Define the read-only view of note trash state the registry queries.
//! - Provide an in-memory reference implementation for tests and probes.
//!
//! # Invariants
//! - The registry never mutates note content through this contract.
//! - Unknown note ids report trashed, so purged notes drop out of counts.

use std::collections::HashMap;
use uuid::Uuid;

/// Stable identifier for a note, owned by the note store.
///
/// The registry uses it purely as an association key.
pub type NoteId = Uuid;

/// Read-only trash-state view over the externally owned note set.
pub trait NoteStore {
    /// Returns whether the note is trashed.
    ///
    /// Implementations must report `true` for ids they no longer know:
    /// a purged note is excluded from derived counts exactly like a
    /// trashed one.
    fn is_trashed(&self, note_id: NoteId) -> bool;
}

/// In-memory note store keyed by note id.
///
/// Reference implementation used by tests and the CLI probe; a real
/// application substitutes the store that owns its note entities.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    trashed: HashMap<NoteId, bool>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active note and returns its generated id.
    pub fn add_note(&mut self) -> NoteId {
        let note_id = Uuid::new_v4();
        self.trashed.insert(note_id, false);
        note_id
    }

    /// Marks a note trashed. Returns `false` when the id is unknown.
    pub fn trash(&mut self, note_id: NoteId) -> bool {
        match self.trashed.get_mut(&note_id) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Clears a note's trashed flag. Returns `false` when the id is unknown.
    pub fn restore(&mut self, note_id: NoteId) -> bool {
        match self.trashed.get_mut(&note_id) {
            Some(flag) => {
                *flag = false;
                true
            }
            None => false,
        }
    }

    /// Removes a note entirely, as a purge would.
    pub fn remove(&mut self, note_id: NoteId) -> bool {
        self.trashed.remove(&note_id).is_some()
    }

    pub fn contains(&self, note_id: NoteId) -> bool {
        self.trashed.contains_key(&note_id)
    }

    pub fn len(&self) -> usize {
        self.trashed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trashed.is_empty()
    }
}

impl NoteStore for InMemoryNoteStore {
    fn is_trashed(&self, note_id: NoteId) -> bool {
        self.trashed.get(&note_id).copied().unwrap_or(true)
    }
}
