// Rust guideline compliant 2026-10-12

//! Command implementations for the Glowbook CLI.

pub mod book;
pub mod calendar;
pub mod catalog;
pub mod init;
pub mod list;
pub mod quote;
pub mod reschedule;
pub mod review;
pub mod show;
pub mod slots;
pub mod status;

use glowbook_app::{
    Actor, AppError, BookingPolicy, BookingService, CalendarService, RepoContext, ReviewService,
};
use glowbook_core::{BookingStore, Catalog, Config, ReviewStore};
use std::path::Path;

/// Identifies the caller of a command.
#[derive(Debug, Clone, Default, clap::Args)]
#[group(required = true, multiple = false)]
pub struct ActorArgs {
    /// Act as this client
    #[arg(long)]
    pub user: Option<String>,

    /// Act as this provider
    #[arg(long)]
    pub provider: Option<String>,
}

impl ActorArgs {
    /// Acting as a client.
    pub fn client(id: &str) -> Self {
        Self {
            user: Some(id.to_string()),
            provider: None,
        }
    }

    /// Acting as a provider.
    pub fn provider(id: &str) -> Self {
        Self {
            user: None,
            provider: Some(id.to_string()),
        }
    }

    /// Resolves the flags to an actor.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of `--user` and `--provider` is set.
    pub fn actor(&self) -> glowbook_app::Result<Actor> {
        match (&self.user, &self.provider) {
            (Some(user), None) => Ok(Actor::client(user.clone())),
            (None, Some(provider)) => Ok(Actor::provider(provider.clone())),
            _ => Err(AppError::InvalidInput(
                "Pass exactly one of --user or --provider".to_string(),
            )),
        }
    }
}

/// An opened `.glowbook` repository with its stores, catalog, and config.
pub struct Workspace {
    repo: RepoContext,
    bookings: BookingStore,
    reviews: ReviewStore,
    catalog: Catalog,
    config: Config,
    policy: BookingPolicy,
}

impl Workspace {
    /// Discovers and opens the repository at `root` (or the current directory).
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is not initialized, or the
    /// catalog or configuration is invalid.
    pub fn open(root: Option<&Path>) -> glowbook_app::Result<Self> {
        let repo = RepoContext::discover(root)?;
        let config = repo.load_config()?;
        let policy = BookingPolicy::from_config(&config)?;
        Ok(Self {
            bookings: repo.open_bookings()?,
            reviews: repo.open_reviews()?,
            catalog: repo.load_catalog()?,
            config,
            policy,
            repo,
        })
    }

    /// The repository layout.
    pub fn repo(&self) -> &RepoContext {
        &self.repo
    }

    /// Booking operations over this workspace.
    pub fn booking_service(&self) -> BookingService<'_> {
        BookingService::new(&self.bookings, &self.catalog, &self.catalog, self.policy)
    }

    /// Review operations over this workspace.
    pub fn review_service(&self) -> ReviewService<'_> {
        ReviewService::new(&self.bookings, &self.reviews)
    }

    /// Calendar views over this workspace.
    pub fn calendar_service(&self) -> CalendarService<'_> {
        CalendarService::new(&self.bookings, self.config.block_metrics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbook_app::Role;

    #[test]
    fn test_actor_args_resolve_role() {
        let actor = ActorArgs::client("user-1").actor().unwrap();
        assert_eq!(actor.role, Role::Client);
        let actor = ActorArgs::provider("prov-1").actor().unwrap();
        assert_eq!(actor.role, Role::Provider);
        assert!(ActorArgs::default().actor().is_err());
    }

    #[test]
    fn test_workspace_requires_init() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Workspace::open(Some(temp.path())).err().unwrap();
        assert!(matches!(err, AppError::RepoNotInitialized { .. }));
    }
}
