//! Vault implementation over a directory tree.

use slidebreak_core::{Error, NoteFile, Result, Vault};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A vault rooted at a directory.
///
/// Paths are vault-relative with forward slashes, exactly as the core
/// hands them out; they are joined onto the root for every operation.
#[derive(Debug, Clone)]
pub struct DirVault {
    root: PathBuf,
}

impl DirVault {
    /// Create a vault rooted at `root`. The directory itself is not
    /// created or checked here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Vault for DirVault {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).exists()
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let full = self.full_path(path);
        if full.is_dir() {
            return Err(Error::FolderExists(path.to_string()));
        }

        log::debug!("creating folder {}", full.display());
        fs::create_dir_all(&full).map_err(|e| Error::CreateFolder(format!("{}: {}", path, e)))
    }

    fn create_note(&self, path: &str, content: &str) -> Result<NoteFile> {
        let full = self.full_path(path);
        log::debug!("creating note {}", full.display());

        // create_new refuses to clobber an entry that appeared between
        // the existence probe and this write.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(|e| Error::CreateNote(format!("{}: {}", path, e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::CreateNote(format!("{}: {}", path, e)))?;

        Ok(NoteFile::new(path))
    }

    fn open_note(&self, file: &NoteFile) -> Result<()> {
        // A directory has no view to open; the caller prints the path.
        log::debug!("slide copy ready at {}", file.path);
        Ok(())
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
