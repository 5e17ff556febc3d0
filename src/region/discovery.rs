//! Zone discovery strategies.
//!
//! The resolver asks a [`ZoneDiscovery`] for the zones of each region it is
//! configured to fetch. Deployments plug in whatever source they have:
//! cloud metadata, DNS, or static configuration.

use crate::core::{Result, ZoneSet, DEFAULT_ZONE};
use std::collections::HashMap;

/// Source of availability zones for a region.
pub trait ZoneDiscovery: Send + Sync {
    /// Zones for a region.
    ///
    /// `None`, an empty set, or a set holding only [`DEFAULT_ZONE`] all mean
    /// the source has nothing to say about the region.
    fn zones_for_region(&self, region: &str) -> Result<Option<ZoneSet>>;
}

impl<F> ZoneDiscovery for F
where
    F: Fn(&str) -> Result<Option<ZoneSet>> + Send + Sync,
{
    fn zones_for_region(&self, region: &str) -> Result<Option<ZoneSet>> {
        self(region)
    }
}

/// Discovery backed by zone lists from client configuration.
///
/// A region with no configured zones reports the default-zone marker,
/// the same answer a client gives when its zone list was never set.
#[derive(Clone, Debug, Default)]
pub struct StaticZoneDiscovery {
    zones: HashMap<String, Vec<String>>,
}

impl StaticZoneDiscovery {
    /// Create from a region to zone-list map.
    pub fn new(zones: HashMap<String, Vec<String>>) -> Self {
        Self { zones }
    }

    /// Add zones for a region.
    pub fn with_region(mut self, region: &str, zones: &[&str]) -> Self {
        self.zones
            .insert(region.to_string(), zones.iter().map(|z| z.to_string()).collect());
        self
    }

    /// Number of regions with configured zones.
    pub fn region_count(&self) -> usize {
        self.zones.len()
    }
}

impl ZoneDiscovery for StaticZoneDiscovery {
    fn zones_for_region(&self, region: &str) -> Result<Option<ZoneSet>> {
        let zones: ZoneSet = match self.zones.get(region) {
            Some(list) if !list.is_empty() => list.iter().map(|z| z.trim().to_string()).collect(),
            _ => std::iter::once(DEFAULT_ZONE.to_string()).collect(),
        };
        Ok(Some(zones))
    }
}
