//! The host capability surface the slide copy command runs against.

use crate::error::Result;
use crate::types::NoteFile;

/// Host operations needed to persist and surface a slide copy.
///
/// The command issues at most one call at a time, in a fixed order,
/// and never retries. Implementations back this with whatever the
/// host offers: a note vault, a directory tree, or an in-memory map
/// in tests.
pub trait Vault {
    /// Whether any entry (note or folder) exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Create a folder at `path`, including missing parents.
    ///
    /// Returns the already-exists error when the folder is present;
    /// callers that only need the folder to exist treat that as
    /// success.
    fn create_folder(&self, path: &str) -> Result<()>;

    /// Create a new note at `path` with `content`. Fails when an
    /// entry already occupies the path.
    fn create_note(&self, path: &str, content: &str) -> Result<NoteFile>;

    /// Open the note in a view for the user.
    fn open_note(&self, file: &NoteFile) -> Result<()>;

    /// Show a transient message to the user. Fire-and-forget.
    fn notify(&self, message: &str);
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory vault shared by the unit tests in this crate.

    use super::Vault;
    use crate::error::{Error, Result};
    use crate::types::NoteFile;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Debug, Default)]
    pub struct MemVault {
        pub folders: RefCell<BTreeSet<String>>,
        pub notes: RefCell<BTreeMap<String, String>>,
        pub notices: RefCell<Vec<String>>,
        pub fail_open: bool,
    }

    impl MemVault {
        pub fn new() -> Self {
            Self::default()
        }

        /// Vault pre-seeded with empty notes at the given paths.
        pub fn with_notes<I>(paths: I) -> Self
        where
            I: IntoIterator<Item = &'static str>,
        {
            let vault = Self::default();
            for path in paths {
                vault.notes.borrow_mut().insert(path.to_string(), String::new());
            }
            vault
        }

        pub fn note(&self, path: &str) -> Option<String> {
            self.notes.borrow().get(path).cloned()
        }
    }

    impl Vault for MemVault {
        fn exists(&self, path: &str) -> bool {
            self.notes.borrow().contains_key(path) || self.folders.borrow().contains(path)
        }

        fn create_folder(&self, path: &str) -> Result<()> {
            if !self.folders.borrow_mut().insert(path.to_string()) {
                return Err(Error::FolderExists(path.to_string()));
            }
            Ok(())
        }

        fn create_note(&self, path: &str, content: &str) -> Result<NoteFile> {
            let mut notes = self.notes.borrow_mut();
            if notes.contains_key(path) {
                return Err(Error::CreateNote(format!("{} already exists", path)));
            }
            notes.insert(path.to_string(), content.to_string());
            Ok(NoteFile::new(path))
        }

        fn open_note(&self, file: &NoteFile) -> Result<()> {
            if self.fail_open {
                return Err(Error::OpenNote(file.path.clone()));
            }
            Ok(())
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }
}
