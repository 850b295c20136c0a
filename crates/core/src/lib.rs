//! Core transform for producing slide-deck-ready copies of Markdown
//! notes: frontmatter stripping, slide-break insertion, collision-free
//! output naming, and the vault capability trait the command runs
//! against.

pub mod breaks;
pub mod command;
pub mod error;
pub mod frontmatter;
pub mod naming;
pub mod settings;
pub mod types;
pub mod vault;

pub use breaks::insert_slide_breaks;
pub use command::{create_slide_copy, run};
pub use error::{Error, Result};
pub use frontmatter::strip_frontmatter;
pub use naming::resolve_output_path;
pub use settings::SlideSettings;
pub use types::{EditorView, NoteFile};
pub use vault::Vault;
