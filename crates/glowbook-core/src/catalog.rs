// Rust guideline compliant 2026-10-12

//! File-backed provider and service catalog.
//!
//! The marketplace catalog lives outside the core; this module reads a
//! `catalog.toml` snapshot so bookings can be priced and emergency
//! eligibility checked without a live catalog service.

use crate::repository::{ProviderCapabilityLookup, ServiceCatalogLookup, ServiceInfo};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Provider profile fields relevant to booking rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Provider ID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Premium subscription active.
    #[serde(default)]
    pub is_premium: bool,
    /// Opted in to urgent bookings.
    #[serde(default)]
    pub accepts_emergency: bool,
}

/// Providers and their services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Known providers.
    #[serde(default)]
    pub providers: Vec<ProviderProfile>,
    /// Known services.
    #[serde(default)]
    pub services: Vec<ServiceInfo>,
}

impl Catalog {
    /// Loads a catalog from a TOML file. A missing file yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = toml::from_str(&content)
            .map_err(|e| Error::Validation(format!("Invalid catalog file: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Writes the catalog as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Validation(format!("Failed to serialize catalog: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks ID uniqueness and that every service belongs to a known provider.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut provider_ids = HashSet::new();
        for provider in &self.providers {
            if provider.id.trim().is_empty() {
                return Err(Error::Validation("Provider ID cannot be empty".to_string()));
            }
            if !provider_ids.insert(provider.id.as_str()) {
                return Err(Error::Validation(format!(
                    "Duplicate provider ID: {}",
                    provider.id
                )));
            }
        }

        let mut service_ids = HashSet::new();
        for service in &self.services {
            if !service_ids.insert(service.id.as_str()) {
                return Err(Error::Validation(format!(
                    "Duplicate service ID: {}",
                    service.id
                )));
            }
            if !provider_ids.contains(service.provider_id.as_str()) {
                return Err(Error::Validation(format!(
                    "Service {} references unknown provider {}",
                    service.id, service.provider_id
                )));
            }
            if service.duration_minutes == 0 {
                return Err(Error::Validation(format!(
                    "Service {} must have a positive duration",
                    service.id
                )));
            }
        }

        Ok(())
    }

    /// Finds a provider by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown providers.
    pub fn provider(&self, provider_id: &str) -> Result<&ProviderProfile> {
        self.providers
            .iter()
            .find(|p| p.id == provider_id)
            .ok_or_else(|| Error::NotFound(format!("provider {}", provider_id)))
    }
}

impl ProviderCapabilityLookup for Catalog {
    fn is_premium(&self, provider_id: &str) -> Result<bool> {
        Ok(self.provider(provider_id)?.is_premium)
    }

    fn accepts_emergency(&self, provider_id: &str) -> Result<bool> {
        Ok(self.provider(provider_id)?.accepts_emergency)
    }
}

impl ServiceCatalogLookup for Catalog {
    fn get_service(&self, service_id: &str) -> Result<ServiceInfo> {
        self.services
            .iter()
            .find(|s| s.id == service_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("service {}", service_id)))
    }
}
