//! Editor and note handle types exchanged with the host.

use serde::{Deserialize, Serialize};

/// Handle to a note inside a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFile {
    /// Vault-relative path, forward slashes.
    pub path: String,

    /// Final path segment without the `.md` extension.
    pub basename: String,
}

impl NoteFile {
    /// Create a handle for the note at `path`, deriving the basename.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(path.as_str());
        let basename = name.strip_suffix(".md").unwrap_or(name).to_string();
        Self { path, basename }
    }
}

/// The active editor context handed to the slide copy command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorView {
    /// Note backing this view. `None` for scratch views that were
    /// never saved.
    pub file: Option<NoteFile>,

    /// Full text currently in the editor.
    pub text: String,
}

impl EditorView {
    /// View over a saved note.
    pub fn for_note(file: NoteFile, text: impl Into<String>) -> Self {
        Self {
            file: Some(file),
            text: text.into(),
        }
    }

    /// View with no backing note.
    pub fn scratch(text: impl Into<String>) -> Self {
        Self {
            file: None,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_drops_folder_and_extension() {
        let file = NoteFile::new("Notes/Talk.md");
        assert_eq!(file.path, "Notes/Talk.md");
        assert_eq!(file.basename, "Talk");
    }

    #[test]
    fn test_basename_without_folder() {
        assert_eq!(NoteFile::new("Talk.md").basename, "Talk");
    }

    #[test]
    fn test_basename_without_extension() {
        assert_eq!(NoteFile::new("Notes/Talk").basename, "Talk");
    }
}
