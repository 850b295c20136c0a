//! The slide copy command: guard, transform, resolve, write, open.

use crate::breaks::insert_slide_breaks;
use crate::error::{Error, Result};
use crate::frontmatter::strip_frontmatter;
use crate::naming::resolve_output_path;
use crate::settings::SlideSettings;
use crate::types::{EditorView, NoteFile};
use crate::vault::Vault;

/// Create a slide-deck-ready copy of the active note.
///
/// Runs the whole sequence against `vault`, one call at a time:
/// strips frontmatter, inserts slide breaks, resolves a
/// collision-free output path, writes the copy, opens it, and
/// notifies the user with the new path. The source note is never
/// modified.
pub fn create_slide_copy<V: Vault>(
    vault: &V,
    view: Option<&EditorView>,
    settings: &SlideSettings,
) -> Result<NoteFile> {
    let view = view.ok_or(Error::NoActiveNote)?;

    if !settings.enabled {
        return Err(Error::Disabled);
    }

    let file = view.file.as_ref().ok_or(Error::MissingFile)?;

    let stripped = strip_frontmatter(&view.text);
    let transformed = insert_slide_breaks(stripped);

    let path = resolve_output_path(vault, &settings.output_folder, &file.basename)?;
    log::debug!("resolved slide copy path: {}", path);

    let note = vault.create_note(&path, &transformed)?;
    vault.open_note(&note)?;
    vault.notify(&format!("Slide copy created: {}", path));

    Ok(note)
}

/// Command-callback wrapper around [`create_slide_copy`].
///
/// Failures never escape: every error becomes a transient
/// notification, so the host stays usable after any outcome. Hosts
/// that need the new note handle call [`create_slide_copy`] directly.
pub fn run<V: Vault>(vault: &V, view: Option<&EditorView>, settings: &SlideSettings) {
    if let Err(e) = create_slide_copy(vault, view, settings) {
        vault.notify(&e.to_string());
    }
}
