use quillnote_core::{
    InMemoryNoteStore, NoteStore, RegistryError, TagColor, TagRegistry, TagValidationError,
};
use uuid::Uuid;

fn registry() -> TagRegistry<InMemoryNoteStore> {
    TagRegistry::new(InMemoryNoteStore::new())
}

#[test]
fn create_tag_defaults_to_gray_with_no_notes() {
    let mut registry = registry();

    let tag = registry.create_tag("Work", None).unwrap();
    assert!(!tag.id.is_nil());
    assert_eq!(tag.color, TagColor::Gray);
    assert_eq!(registry.note_count(tag.id).unwrap(), 0);
    assert_eq!(registry.notes_of(tag.id).unwrap(), Vec::<Uuid>::new());

    let other = registry.create_tag("Work", None).unwrap();
    assert_ne!(tag.id, other.id);
}

#[test]
fn create_tag_rejects_blank_names() {
    let mut registry = registry();

    let err = registry.create_tag("", None).unwrap_err();
    assert_eq!(
        err,
        RegistryError::Validation(TagValidationError::EmptyName)
    );

    let err = registry.create_tag("   ", None).unwrap_err();
    assert_eq!(
        err,
        RegistryError::Validation(TagValidationError::EmptyName)
    );
    assert!(registry.is_empty());
}

#[test]
fn associate_then_disassociate_is_idempotent() {
    let mut registry = registry();
    let tag = registry.create_tag("Inbox", None).unwrap();
    let note = registry.note_store_mut().add_note();

    registry.associate(tag.id, note).unwrap();
    registry.associate(tag.id, note).unwrap();
    assert_eq!(registry.note_count(tag.id).unwrap(), 1);

    registry.disassociate(tag.id, note).unwrap();
    registry.disassociate(tag.id, note).unwrap();
    assert_eq!(registry.note_count(tag.id).unwrap(), 0);
    assert_eq!(registry.tags_of(note), Vec::<Uuid>::new());
}

#[test]
fn note_count_excludes_trashed_notes() {
    let mut registry = registry();
    let tag = registry.create_tag("Projects", None).unwrap();

    let active = registry.note_store_mut().add_note();
    let trashed = registry.note_store_mut().add_note();
    registry.note_store_mut().trash(trashed);

    registry.associate(tag.id, active).unwrap();
    registry.associate(tag.id, trashed).unwrap();

    assert_eq!(registry.note_count(tag.id).unwrap(), 1);
    // The raw association still holds both notes.
    assert_eq!(registry.notes_of(tag.id).unwrap().len(), 2);
}

#[test]
fn note_count_tracks_external_trash_state() {
    let mut registry = registry();
    let tag = registry.create_tag("Work", None).unwrap();

    let note_a = registry.note_store_mut().add_note();
    let note_b = registry.note_store_mut().add_note();
    registry.note_store_mut().trash(note_b);

    registry.associate(tag.id, note_a).unwrap();
    registry.associate(tag.id, note_b).unwrap();
    assert_eq!(registry.note_count(tag.id).unwrap(), 1);

    registry.note_store_mut().trash(note_a);
    assert!(registry.note_store().is_trashed(note_a));
    assert_eq!(registry.note_count(tag.id).unwrap(), 0);

    registry.note_store_mut().restore(note_a);
    assert_eq!(registry.note_count(tag.id).unwrap(), 1);
}

#[test]
fn purged_notes_drop_out_of_counts() {
    let mut registry = registry();
    let tag = registry.create_tag("Archive", None).unwrap();
    let note = registry.note_store_mut().add_note();
    registry.associate(tag.id, note).unwrap();
    assert_eq!(registry.note_count(tag.id).unwrap(), 1);

    registry.note_store_mut().remove(note);
    assert_eq!(registry.note_count(tag.id).unwrap(), 0);
}

#[test]
fn delete_tag_strips_every_association() {
    let mut registry = registry();
    let keep = registry.create_tag("Keep", None).unwrap();
    let doomed = registry.create_tag("Doomed", None).unwrap();
    let note = registry.note_store_mut().add_note();

    registry.associate(keep.id, note).unwrap();
    registry.associate(doomed.id, note).unwrap();
    assert_eq!(registry.tags_of(note).len(), 2);

    registry.delete_tag(doomed.id).unwrap();

    assert_eq!(registry.get_tag(doomed.id), None);
    assert_eq!(registry.tags_of(note), vec![keep.id]);
    let err = registry.note_count(doomed.id).unwrap_err();
    assert_eq!(err, RegistryError::TagNotFound(doomed.id));
}

#[test]
fn operations_on_unknown_tags_return_not_found() {
    let mut registry = registry();
    let ghost = Uuid::new_v4();
    let note = registry.note_store_mut().add_note();

    assert!(matches!(
        registry.rename_tag(ghost, "renamed").unwrap_err(),
        RegistryError::TagNotFound(id) if id == ghost
    ));
    assert!(matches!(
        registry.set_color(ghost, TagColor::Blue).unwrap_err(),
        RegistryError::TagNotFound(_)
    ));
    assert!(matches!(
        registry.delete_tag(ghost).unwrap_err(),
        RegistryError::TagNotFound(_)
    ));
    assert!(matches!(
        registry.associate(ghost, note).unwrap_err(),
        RegistryError::TagNotFound(_)
    ));
    assert!(matches!(
        registry.disassociate(ghost, note).unwrap_err(),
        RegistryError::TagNotFound(_)
    ));
    assert!(matches!(
        registry.notes_of(ghost).unwrap_err(),
        RegistryError::TagNotFound(_)
    ));
}

#[test]
fn rename_rejects_blank_name_and_keeps_stored_name() {
    let mut registry = registry();
    let tag = registry.create_tag("Original", None).unwrap();

    let err = registry.rename_tag(tag.id, "   ").unwrap_err();
    assert_eq!(
        err,
        RegistryError::Validation(TagValidationError::EmptyName)
    );
    assert_eq!(registry.get_tag(tag.id).unwrap().name, "Original");

    let renamed = registry.rename_tag(tag.id, "  Fresh  ").unwrap();
    assert_eq!(renamed.name, "Fresh");
    assert_eq!(registry.get_tag(tag.id).unwrap().name, "Fresh");
}

#[test]
fn invalid_color_names_never_reach_the_registry() {
    let mut registry = registry();
    let tag = registry.create_tag("Palette", None).unwrap();

    let err = TagColor::from_name("ultraviolet").unwrap_err();
    assert_eq!(
        err,
        TagValidationError::UnknownColor("ultraviolet".to_string())
    );
    assert_eq!(registry.get_tag(tag.id).unwrap().color, TagColor::Gray);

    let color = TagColor::from_name("Teal").unwrap();
    let updated = registry.set_color(tag.id, color).unwrap();
    assert_eq!(updated.color, TagColor::Teal);
    assert_eq!(registry.get_tag(tag.id).unwrap().color, TagColor::Teal);
}

#[test]
fn list_tags_preserves_creation_order_across_deletes() {
    let mut registry = registry();
    let first = registry.create_tag("first", None).unwrap();
    let second = registry.create_tag("second", None).unwrap();
    let third = registry.create_tag("third", None).unwrap();

    registry.delete_tag(second.id).unwrap();
    let fourth = registry.create_tag("fourth", None).unwrap();

    let listed: Vec<_> = registry.list_tags().into_iter().map(|tag| tag.id).collect();
    assert_eq!(listed, vec![first.id, third.id, fourth.id]);
    assert_eq!(registry.tag_count(), 3);
}

#[test]
fn tags_of_returns_sorted_ids_for_multi_tagged_notes() {
    let mut registry = registry();
    let work = registry.create_tag("Work", None).unwrap();
    let urgent = registry.create_tag("Urgent", None).unwrap();
    let note = registry.note_store_mut().add_note();

    registry.associate(work.id, note).unwrap();
    registry.associate(urgent.id, note).unwrap();

    let mut expected = vec![work.id, urgent.id];
    expected.sort_unstable();
    assert_eq!(registry.tags_of(note), expected);
}
