//! Client region configuration.

use crate::core::{Error, RegionId, Result};
use crate::region::discovery::StaticZoneDiscovery;
use crate::region::resolver::RegionResolver;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Region settings of a discovery client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Region the client runs in
    pub region: String,
    /// Comma separated remote regions whose registries are fetched
    pub fetch_remote_regions_registry: Option<String>,
    /// Configured zones per region
    pub availability_zones: HashMap<String, Vec<String>>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            fetch_remote_regions_registry: None,
            availability_zones: HashMap::new(),
        }
    }
}

impl RegionConfig {
    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(Error::InvalidConfig("region must not be empty".to_string()));
        }
        Ok(())
    }

    /// Remote regions to fetch, or `None` when fetching is disabled.
    pub fn regions_to_fetch(&self) -> Option<Vec<RegionId>> {
        let regions: Vec<RegionId> = self
            .fetch_remote_regions_registry
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        if regions.is_empty() {
            None
        } else {
            Some(regions)
        }
    }

    /// Discovery over the configured zone lists.
    pub fn static_discovery(&self) -> StaticZoneDiscovery {
        StaticZoneDiscovery::new(self.availability_zones.clone())
    }

    /// Build a resolver over the configured zones and resolve the
    /// configured remote regions.
    pub fn build_resolver(&self) -> Result<RegionResolver> {
        self.validate()?;
        let resolver = RegionResolver::new(self.static_discovery());
        resolver.configure_regions(self.regions_to_fetch().as_deref())?;
        Ok(resolver)
    }
}
