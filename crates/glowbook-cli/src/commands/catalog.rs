// Rust guideline compliant 2026-10-12

//! Implementation of the `glow catalog` commands.
//!
//! Maintains `.glowbook/catalog.toml`, the snapshot of providers and
//! services that bookings are priced and checked against.

use crate::terminal::print_success;
use crate::OutputFormatter;
use anyhow::Result;
use glowbook_app::RepoContext;
use glowbook_core::{Catalog, Money, ProviderProfile, ServiceInfo};
use std::path::Path;

/// Prints the catalog.
///
/// # Errors
///
/// Returns an error if the repository is missing or the catalog is invalid.
pub fn list(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let repo = RepoContext::discover(root)?;
    let catalog = repo.load_catalog()?;
    println!("{}", formatter.format_catalog(&catalog));
    Ok(())
}

/// Adds a provider, replacing any existing provider with the same ID.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, validated, or saved.
pub fn add_provider(root: Option<&Path>, profile: ProviderProfile) -> Result<()> {
    let repo = RepoContext::discover(root)?;
    let mut catalog = repo.load_catalog()?;
    let id = profile.id.clone();
    catalog.providers.retain(|p| p.id != profile.id);
    catalog.providers.push(profile);
    save(&repo, &catalog)?;
    print_success(&format!("Saved provider {}", id));
    Ok(())
}

/// Adds a service, replacing any existing service with the same ID.
///
/// # Errors
///
/// Returns an error if the provider is unknown or the catalog cannot be
/// saved.
pub fn add_service(
    root: Option<&Path>,
    id: &str,
    provider_id: &str,
    name: Option<String>,
    base_price: Money,
    duration_minutes: u32,
) -> Result<()> {
    let repo = RepoContext::discover(root)?;
    let mut catalog = repo.load_catalog()?;
    catalog.services.retain(|s| s.id != id);
    catalog.services.push(ServiceInfo {
        id: id.to_string(),
        provider_id: provider_id.to_string(),
        name: name.unwrap_or_default(),
        base_price,
        duration_minutes,
    });
    save(&repo, &catalog)?;
    print_success(&format!("Saved service {}", id));
    Ok(())
}

fn save(repo: &RepoContext, catalog: &Catalog) -> Result<()> {
    catalog.validate()?;
    catalog.save(repo.catalog_path())?;
    Ok(())
}
