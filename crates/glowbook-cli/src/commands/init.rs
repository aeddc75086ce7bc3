// Rust guideline compliant 2026-10-12

//! Implementation of the `glow init` command.
//!
//! Creates the `.glowbook` directory with empty booking and review stores,
//! an empty catalog, and a default configuration.

use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use glowbook_app::RepoContext;
use std::path::Path;

/// Initializes a Glowbook repository.
///
/// Existing files are kept, so running it twice is harmless.
///
/// # Arguments
///
/// * `root` - Directory to initialize, defaulting to the current directory
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be created.
pub fn execute(root: Option<&Path>) -> Result<()> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let (repo, created) = RepoContext::init(&root)?;

    if created.is_empty() {
        print_warning(&format!(
            "Glowbook repository already initialized at {}",
            repo.glowbook_dir().display()
        ));
        return Ok(());
    }

    for path in &created {
        print_success(&format!("Created {}", path.display()));
    }
    print_success(&format!(
        "Initialized Glowbook repository in {}",
        repo.glowbook_dir().display()
    ));
    Ok(())
}
