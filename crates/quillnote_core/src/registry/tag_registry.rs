//! Tag registry: tag CRUD and the tag/note association.
//!
//! # Responsibility
//! - Create, rename, recolor and delete tags.
//! - Keep the tag→notes and note→tags indices mutually consistent.
//! - Answer derived note-count queries against the live note store.
//!
//! # Invariants
//! - The two association indices always agree; deleting a tag strips it
//!   from every associated note's tag set.
//! - `note_count` is recomputed on every read; trash state is owned by
//!   the note store and changes outside this registry.
//! - Mutations validate before touching any index, so a rejected
//!   operation leaves state unchanged.
//! - Access is single-threaded; concurrent callers must serialize
//!   externally.

use crate::model::tag::{Tag, TagColor, TagId, TagValidationError};
use crate::registry::note_store::{NoteId, NoteStore};
use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error for tag operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Input rejected by tag validation rules.
    Validation(TagValidationError),
    /// No tag exists under the given id.
    TagNotFound(TagId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TagNotFound(tag_id) => write!(f, "tag not found: {tag_id}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TagNotFound(_) => None,
        }
    }
}

impl From<TagValidationError> for RegistryError {
    fn from(value: TagValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owner of the tag set and its note associations.
///
/// Generic over the note store collaborator so applications plug in the
/// store that owns their note entities. The registry holds the store by
/// value; the embedding application reaches it through
/// [`TagRegistry::note_store_mut`] to drive external trash-state changes
/// from the same single-threaded owner.
pub struct TagRegistry<S: NoteStore> {
    store: S,
    tags: HashMap<TagId, Tag>,
    /// Tag ids in creation order, backing `list_tags`.
    order: Vec<TagId>,
    tag_notes: HashMap<TagId, BTreeSet<NoteId>>,
    note_tags: HashMap<NoteId, BTreeSet<TagId>>,
}

impl<S: NoteStore> TagRegistry<S> {
    /// Creates an empty registry over the provided note store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tags: HashMap::new(),
            order: Vec::new(),
            tag_notes: HashMap::new(),
            note_tags: HashMap::new(),
        }
    }

    pub fn note_store(&self) -> &S {
        &self.store
    }

    pub fn note_store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Creates a tag with a fresh id, current timestamp and no
    /// associated notes. A missing color defaults to gray.
    ///
    /// # Errors
    /// - `Validation(EmptyName)` when `name` trims to the empty string.
    pub fn create_tag(
        &mut self,
        name: impl Into<String>,
        color: Option<TagColor>,
    ) -> RegistryResult<Tag> {
        let tag = Tag::new(name, color.unwrap_or_default())?;
        self.order.push(tag.id);
        self.tag_notes.insert(tag.id, BTreeSet::new());
        self.tags.insert(tag.id, tag.clone());
        debug!(
            "event=tag_create module=registry status=ok tag_id={} color={}",
            tag.id, tag.color
        );
        Ok(tag)
    }

    /// Replaces a tag's display name and returns the updated snapshot.
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    /// - `Validation(EmptyName)` when `new_name` trims to the empty
    ///   string; the stored name is left unchanged.
    pub fn rename_tag(
        &mut self,
        tag_id: TagId,
        new_name: impl Into<String>,
    ) -> RegistryResult<Tag> {
        let tag = self
            .tags
            .get_mut(&tag_id)
            .ok_or(RegistryError::TagNotFound(tag_id))?;
        tag.rename(new_name)?;
        debug!("event=tag_rename module=registry status=ok tag_id={tag_id}");
        Ok(tag.clone())
    }

    /// Replaces a tag's palette color and returns the updated snapshot.
    ///
    /// Palette membership is a type-level guarantee; string input from
    /// pickers fails earlier in [`TagColor::from_name`].
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    pub fn set_color(&mut self, tag_id: TagId, color: TagColor) -> RegistryResult<Tag> {
        let tag = self
            .tags
            .get_mut(&tag_id)
            .ok_or(RegistryError::TagNotFound(tag_id))?;
        tag.set_color(color);
        debug!("event=tag_recolor module=registry status=ok tag_id={tag_id} color={color}");
        Ok(tag.clone())
    }

    /// Deletes a tag and strips it from every associated note's tag set.
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    pub fn delete_tag(&mut self, tag_id: TagId) -> RegistryResult<()> {
        if self.tags.remove(&tag_id).is_none() {
            return Err(RegistryError::TagNotFound(tag_id));
        }
        self.order.retain(|id| *id != tag_id);

        let notes = self.tag_notes.remove(&tag_id).unwrap_or_default();
        for note_id in &notes {
            let emptied = match self.note_tags.get_mut(note_id) {
                Some(tags) => {
                    tags.remove(&tag_id);
                    tags.is_empty()
                }
                None => false,
            };
            if emptied {
                self.note_tags.remove(note_id);
            }
        }

        debug!(
            "event=tag_delete module=registry status=ok tag_id={} unlinked_notes={}",
            tag_id,
            notes.len()
        );
        Ok(())
    }

    /// Associates a note with a tag.
    ///
    /// Idempotent: associating an already-associated pair is a no-op.
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    pub fn associate(&mut self, tag_id: TagId, note_id: NoteId) -> RegistryResult<()> {
        self.ensure_known(tag_id)?;
        let newly_linked = self
            .tag_notes
            .entry(tag_id)
            .or_default()
            .insert(note_id);
        if newly_linked {
            self.note_tags.entry(note_id).or_default().insert(tag_id);
            debug!("event=tag_link module=registry status=ok tag_id={tag_id} note_id={note_id}");
        }
        Ok(())
    }

    /// Removes a note's association with a tag.
    ///
    /// Idempotent: disassociating an absent pair is a no-op.
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    pub fn disassociate(&mut self, tag_id: TagId, note_id: NoteId) -> RegistryResult<()> {
        self.ensure_known(tag_id)?;
        let removed = self
            .tag_notes
            .get_mut(&tag_id)
            .is_some_and(|notes| notes.remove(&note_id));
        if removed {
            let emptied = match self.note_tags.get_mut(&note_id) {
                Some(tags) => {
                    tags.remove(&tag_id);
                    tags.is_empty()
                }
                None => false,
            };
            if emptied {
                self.note_tags.remove(&note_id);
            }
            debug!("event=tag_unlink module=registry status=ok tag_id={tag_id} note_id={note_id}");
        }
        Ok(())
    }

    /// Counts associated notes whose trashed flag is false.
    ///
    /// Queried live from the note store on every call.
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    pub fn note_count(&self, tag_id: TagId) -> RegistryResult<usize> {
        let notes = self
            .tag_notes
            .get(&tag_id)
            .ok_or(RegistryError::TagNotFound(tag_id))?;
        Ok(notes
            .iter()
            .filter(|note_id| !self.store.is_trashed(**note_id))
            .count())
    }

    /// Gets one tag snapshot by id.
    pub fn get_tag(&self, tag_id: TagId) -> Option<&Tag> {
        self.tags.get(&tag_id)
    }

    /// Lists tag snapshots in creation order.
    pub fn list_tags(&self) -> Vec<Tag> {
        self.order
            .iter()
            .filter_map(|tag_id| self.tags.get(tag_id))
            .cloned()
            .collect()
    }

    /// Lists associated note ids in sorted order, trashed included.
    ///
    /// # Errors
    /// - `TagNotFound` when no tag exists under `tag_id`.
    pub fn notes_of(&self, tag_id: TagId) -> RegistryResult<Vec<NoteId>> {
        let notes = self
            .tag_notes
            .get(&tag_id)
            .ok_or(RegistryError::TagNotFound(tag_id))?;
        Ok(notes.iter().copied().collect())
    }

    /// Lists the tag ids carried by a note, sorted. Empty for unknown
    /// notes.
    pub fn tags_of(&self, note_id: NoteId) -> Vec<TagId> {
        self.note_tags
            .get(&note_id)
            .map(|tags| tags.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn ensure_known(&self, tag_id: TagId) -> RegistryResult<()> {
        if self.tags.contains_key(&tag_id) {
            Ok(())
        } else {
            Err(RegistryError::TagNotFound(tag_id))
        }
    }
}
