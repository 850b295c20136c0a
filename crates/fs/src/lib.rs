//! Filesystem-backed vault implementation.
//!
//! Lets the slide copy command run against a plain directory tree
//! when no note-taking host is around.

pub mod dir;

pub use dir::DirVault;
