//! CLI for creating slide-deck-ready copies of Markdown notes.

use anyhow::{Context, Result};
use clap::Parser;
use slidebreak_core::{
    create_slide_copy, insert_slide_breaks, strip_frontmatter, EditorView, NoteFile, SlideSettings,
};
use slidebreak_fs::DirVault;
use std::fs;
use std::path::{Path, PathBuf};

/// Create slide-deck-ready copies of Markdown notes.
#[derive(Parser, Debug)]
#[command(name = "slidebreak")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown note(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Folder (next to each note) to place slide copies in
    #[arg(short, long)]
    output_folder: Option<String>,

    /// Settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the transformed text to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(folder) = &args.output_folder {
        settings.output_folder = folder.clone();
    }

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_note(input_path, &args, &settings) {
            Ok(Some(path)) => {
                if args.verbose {
                    eprintln!("Written to: {}", path);
                }
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Load settings from the given file, falling back to defaults.
fn load_settings(path: Option<&Path>) -> Result<SlideSettings> {
    match path {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Invalid settings file {}", path.display()))
        }
        None => Ok(SlideSettings::default()),
    }
}

/// Process a single note.
///
/// Returns the vault-relative path of the slide copy, or `None` in
/// print mode.
fn process_note(
    input_path: &Path,
    args: &Args,
    settings: &SlideSettings,
) -> Result<Option<String>> {
    let text = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    if args.print {
        print!("{}", insert_slide_breaks(strip_frontmatter(&text)));
        return Ok(None);
    }

    let file_name = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Input path has no file name")?;
    let root = match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    log::debug!("vault root: {}", root.display());

    let vault = DirVault::new(root);
    let view = EditorView::for_note(NoteFile::new(file_name), text);

    let note = create_slide_copy(&vault, Some(&view), settings)?;

    Ok(Some(note.path))
}
