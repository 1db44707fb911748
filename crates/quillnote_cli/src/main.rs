//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quillnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quillnote_core::{InMemoryNoteStore, TagRegistry};

fn main() {
    println!("quillnote_core ping={}", quillnote_core::ping());
    println!("quillnote_core version={}", quillnote_core::core_version());

    // One registry round-trip, printing counts only so output stays
    // stable across runs.
    let mut registry = TagRegistry::new(InMemoryNoteStore::new());
    let tag = match registry.create_tag("inbox", None) {
        Ok(tag) => tag,
        Err(err) => {
            eprintln!("tag probe failed: {err}");
            std::process::exit(1);
        }
    };

    let active = registry.note_store_mut().add_note();
    let trashed = registry.note_store_mut().add_note();
    registry.note_store_mut().trash(trashed);

    let probe = registry
        .associate(tag.id, active)
        .and_then(|()| registry.associate(tag.id, trashed))
        .and_then(|()| registry.note_count(tag.id));
    match probe {
        Ok(count) => {
            println!("tag probe tags={} active_notes={count}", registry.tag_count());
        }
        Err(err) => {
            eprintln!("tag probe failed: {err}");
            std::process::exit(1);
        }
    }
}
