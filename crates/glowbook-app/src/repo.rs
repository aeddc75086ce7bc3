// Rust guideline compliant 2026-10-12

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use glowbook_core::{BookingStore, Catalog, Config, ReviewStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the data directory inside a repository root.
pub const DATA_DIR: &str = ".glowbook";

/// Repository path metadata for a Glowbook workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    glowbook_dir: PathBuf,
    bookings_path: PathBuf,
    reviews_path: PathBuf,
    catalog_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let glowbook_dir = root.join(DATA_DIR);
        Self {
            bookings_path: glowbook_dir.join("bookings.jsonl"),
            reviews_path: glowbook_dir.join("reviews.jsonl"),
            catalog_path: glowbook_dir.join("catalog.toml"),
            config_path: glowbook_dir.join("config.toml"),
            glowbook_dir,
            root,
        }
    }

    /// Discovers a Glowbook repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.glowbook` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.glowbook_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.glowbook_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.glowbook` layout under `root`, keeping existing files.
    ///
    /// # Returns
    ///
    /// The context and the list of files that were newly created.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    pub fn init(root: &Path) -> Result<(Self, Vec<PathBuf>)> {
        let context = Self::at(root.to_path_buf());
        let mut created = Vec::new();

        if !context.glowbook_dir.exists() {
            fs::create_dir_all(&context.glowbook_dir)?;
        }

        for path in [&context.bookings_path, &context.reviews_path] {
            if !path.exists() {
                fs::File::create(path)?;
                created.push(path.clone());
            }
        }

        if !context.catalog_path.exists() {
            Catalog::default().save(&context.catalog_path)?;
            created.push(context.catalog_path.clone());
        }

        if !context.config_path.exists() {
            Config::default().save(&context.glowbook_dir)?;
            created.push(context.config_path.clone());
        }

        tracing::info!(path = %context.glowbook_dir.display(), created = created.len(), "initialized repository");
        Ok((context, created))
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.glowbook` directory path.
    #[must_use]
    pub fn glowbook_dir(&self) -> &Path {
        self.glowbook_dir.as_path()
    }

    /// Returns the bookings JSONL path.
    #[must_use]
    pub fn bookings_path(&self) -> &Path {
        self.bookings_path.as_path()
    }

    /// Returns the reviews JSONL path.
    #[must_use]
    pub fn reviews_path(&self) -> &Path {
        self.reviews_path.as_path()
    }

    /// Returns the catalog TOML path.
    #[must_use]
    pub fn catalog_path(&self) -> &Path {
        self.catalog_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the booking store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_bookings(&self) -> Result<BookingStore> {
        Ok(BookingStore::new(self.bookings_path.clone())?)
    }

    /// Opens the review store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_reviews(&self) -> Result<ReviewStore> {
        Ok(ReviewStore::new(self.reviews_path.clone())?)
    }

    /// Loads the provider and service catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is unreadable or invalid.
    pub fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::load(&self.catalog_path)?)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.glowbook_dir())?)
    }
}
