//! Error types for the slide copy command.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating a slide copy.
///
/// Display strings double as the user-facing notification messages,
/// so they are phrased for people rather than for logs.
#[derive(Error, Debug)]
pub enum Error {
    /// The command was invoked with no Markdown view active.
    #[error("No active Markdown file")]
    NoActiveNote,

    /// Slide breaking is switched off in the settings.
    #[error("Slide breaking is disabled in settings")]
    Disabled,

    /// The active view has no note on disk behind it.
    #[error("The active view has no file to copy")]
    MissingFile,

    /// The output folder is already present. Callers that only need
    /// the folder to exist treat this as success.
    #[error("Folder already exists: {0}")]
    FolderExists(String),

    /// The host failed to create the output folder.
    #[error("Could not create folder: {0}")]
    CreateFolder(String),

    /// The host failed to create the slide copy.
    #[error("Could not create slide copy: {0}")]
    CreateNote(String),

    /// The newly created note could not be opened in a view.
    #[error("Could not open slide copy: {0}")]
    OpenNote(String),

    /// Underlying I/O failure from the host.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
