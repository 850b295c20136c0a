//! Output naming: unsafe-character sanitization, the `" Slides.md"`
//! suffix, and the sequential collision probe.

use crate::error::{Error, Result};
use crate::vault::Vault;

/// Characters that cannot appear in a note name on every host
/// filesystem; each is replaced with `_`.
const UNSAFE_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Replace filesystem-unsafe characters in a note base name with `_`.
pub fn sanitize_base_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// The output name for a slide copy of `base`.
pub fn slide_note_name(base: &str) -> String {
    format!("{} Slides.md", base)
}

/// Insert ` <counter>` before the `.md` extension.
fn numbered(name: &str, counter: usize) -> String {
    match name.strip_suffix(".md") {
        Some(stem) => format!("{} {}.md", stem, counter),
        None => format!("{} {}", name, counter),
    }
}

/// Normalize a folder setting to the vault path convention: forward
/// slashes, no repeated or surrounding slashes, no surrounding
/// whitespace.
pub fn normalize_folder(path: &str) -> String {
    path.trim()
        .replace('\\', "/")
        .split('/')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve a collision-free path for the slide copy of `base_name`.
///
/// The folder, when configured, is created first; a folder that is
/// already present is fine. Candidates are then probed in a fixed
/// order (plain name, then counter 2, 3, ...), so the same vault
/// state always resolves to the same path and repeated runs produce
/// monotonically numbered copies.
pub fn resolve_output_path<V: Vault>(vault: &V, folder: &str, base_name: &str) -> Result<String> {
    let base = sanitize_base_name(base_name);
    let mut name = slide_note_name(&base);

    let folder = normalize_folder(folder);
    if !folder.is_empty() {
        match vault.create_folder(&folder) {
            Ok(()) | Err(Error::FolderExists(_)) => {}
            Err(e) => return Err(e),
        }
        name = format!("{}/{}", folder, name);
    }

    let mut candidate = name.clone();
    let mut counter = 2;
    while vault.exists(&candidate) {
        candidate = numbered(&name, counter);
        counter += 1;
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::test_support::MemVault;

    #[test]
    fn test_sanitize_replaces_each_unsafe_character() {
        assert_eq!(sanitize_base_name("My/File:Name?"), "My_File_Name_");
        assert_eq!(sanitize_base_name(r#"a\b%c*d|e"f<g>h"#), "a_b_c_d_e_f_g_h");
    }

    #[test]
    fn test_sanitize_leaves_safe_names_alone() {
        assert_eq!(sanitize_base_name("Quarterly Review 2024"), "Quarterly Review 2024");
    }

    #[test]
    fn test_slide_note_name() {
        assert_eq!(slide_note_name("Talk"), "Talk Slides.md");
    }

    #[test]
    fn test_numbered_inserts_before_extension() {
        assert_eq!(numbered("Talk Slides.md", 2), "Talk Slides 2.md");
        assert_eq!(numbered("Decks/Talk Slides.md", 3), "Decks/Talk Slides 3.md");
    }

    #[test]
    fn test_numbered_without_extension_appends() {
        assert_eq!(numbered("Talk Slides", 2), "Talk Slides 2");
    }

    #[test]
    fn test_normalize_folder() {
        assert_eq!(normalize_folder("  Decks "), "Decks");
        assert_eq!(normalize_folder("/Decks/2024/"), "Decks/2024");
        assert_eq!(normalize_folder(r"Decks\2024"), "Decks/2024");
        assert_eq!(normalize_folder("Decks//2024"), "Decks/2024");
        assert_eq!(normalize_folder("   "), "");
    }

    #[test]
    fn test_resolve_prefers_the_plain_name() {
        let vault = MemVault::new();
        let path = resolve_output_path(&vault, "", "Talk").unwrap();
        assert_eq!(path, "Talk Slides.md");
    }

    #[test]
    fn test_resolve_probes_monotonically() {
        let vault = MemVault::with_notes(["Talk Slides.md", "Talk Slides 2.md"]);
        let path = resolve_output_path(&vault, "", "Talk").unwrap();
        assert_eq!(path, "Talk Slides 3.md");
    }

    #[test]
    fn test_resolve_skips_a_gap_free_prefix_only() {
        // Probing is sequential: the first free candidate wins even
        // when later numbers are taken.
        let vault = MemVault::with_notes(["Talk Slides.md", "Talk Slides 3.md"]);
        let path = resolve_output_path(&vault, "", "Talk").unwrap();
        assert_eq!(path, "Talk Slides 2.md");
    }

    #[test]
    fn test_resolve_creates_the_folder() {
        let vault = MemVault::new();
        let path = resolve_output_path(&vault, "Decks", "Talk").unwrap();
        assert_eq!(path, "Decks/Talk Slides.md");
        assert!(vault.folders.borrow().contains("Decks"));
    }

    #[test]
    fn test_resolve_tolerates_an_existing_folder() {
        let vault = MemVault::new();
        vault.create_folder("Decks").unwrap();
        let path = resolve_output_path(&vault, "Decks", "Talk").unwrap();
        assert_eq!(path, "Decks/Talk Slides.md");
    }

    #[test]
    fn test_resolve_normalizes_the_folder_setting() {
        let vault = MemVault::new();
        let path = resolve_output_path(&vault, " Decks/ ", "Talk").unwrap();
        assert_eq!(path, "Decks/Talk Slides.md");
    }

    #[test]
    fn test_resolve_sanitizes_the_base_name() {
        let vault = MemVault::new();
        let path = resolve_output_path(&vault, "", "My/File:Name?").unwrap();
        assert_eq!(path, "My_File_Name_ Slides.md");
    }
}
