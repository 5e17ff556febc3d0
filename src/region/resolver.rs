//! Zone to region resolution.
//!
//! Builds a zone -> region index for the regions a client fetches. Each
//! region's zones come from discovery first; regions that discovery knows
//! nothing about fall back to the built-in [`DefaultZoneTable`].

use crate::core::{is_degenerate, now, Error, RegionId, Result, Timestamp, ZoneId, ZoneSet};
use crate::region::defaults::DefaultZoneTable;
use crate::region::discovery::ZoneDiscovery;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, error, info};

/// Resolves availability zones to the regions they belong to.
pub trait AzToRegionMapper: Send + Sync {
    /// Rebuild the mapping for the given regions. `None` erases it.
    fn set_regions_to_fetch(&self, regions: Option<&[String]>) -> Result<()>;

    /// Region owning a zone, if known.
    fn region_for_zone(&self, zone: &str) -> Option<String>;

    /// Rebuild the mapping for the last configured regions.
    fn refresh_mapping(&self) -> Result<()>;
}

/// An immutable zone -> region index.
#[derive(Clone, Debug, Serialize)]
pub struct ZoneIndex {
    /// Zone to owning region
    zones: HashMap<ZoneId, RegionId>,
    /// When the index was built
    resolved_at: Timestamp,
}

impl ZoneIndex {
    /// Create an empty index.
    pub fn empty() -> Self {
        Self {
            zones: HashMap::new(),
            resolved_at: now(),
        }
    }

    /// Region for a zone.
    pub fn region_for_zone(&self, zone: &str) -> Option<&str> {
        self.zones.get(zone).map(String::as_str)
    }

    /// Number of mapped zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if no zone is mapped.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones currently mapped to a region.
    pub fn zones_in_region(&self, region: &str) -> ZoneSet {
        self.zones
            .iter()
            .filter(|(_, r)| r.as_str() == region)
            .map(|(z, _)| z.clone())
            .collect()
    }

    /// Regions with at least one mapped zone.
    pub fn regions(&self) -> BTreeSet<RegionId> {
        self.zones.values().cloned().collect()
    }

    /// Build time.
    pub fn resolved_at(&self) -> Timestamp {
        self.resolved_at
    }

    fn insert_all(&mut self, zones: ZoneSet, region: &str) {
        for zone in zones {
            // last region wins if zones collide
            self.zones.insert(zone, region.to_string());
        }
    }
}

impl Default for ZoneIndex {
    fn default() -> Self {
        Self::empty()
    }
}

/// Zone to region resolver with default-table fallback.
///
/// Lookups read the last published [`ZoneIndex`]. A rebuild is assembled
/// privately and published with one swap, so readers never observe a
/// cleared or half-built index. Rebuilds are serialized internally.
pub struct RegionResolver {
    /// Zone source
    discovery: Box<dyn ZoneDiscovery>,
    /// Fallback zones
    defaults: DefaultZoneTable,
    /// Published index
    index: RwLock<Arc<ZoneIndex>>,
    /// Last configured regions; the lock also serializes rebuilds
    regions_to_fetch: Mutex<Option<Vec<RegionId>>>,
}

impl RegionResolver {
    /// Create a resolver over the built-in default table.
    pub fn new(discovery: impl ZoneDiscovery + 'static) -> Self {
        Self::with_defaults(discovery, DefaultZoneTable::builtin())
    }

    /// Create a resolver with an explicit default table.
    pub fn with_defaults(
        discovery: impl ZoneDiscovery + 'static,
        defaults: DefaultZoneTable,
    ) -> Self {
        Self {
            discovery: Box::new(discovery),
            defaults,
            index: RwLock::new(Arc::new(ZoneIndex::empty())),
            regions_to_fetch: Mutex::new(None),
        }
    }

    /// Rebuild the index for `regions`, in order.
    ///
    /// `None` erases the mapping. For each region, discovered zones are used
    /// as-is; if discovery has nothing, the default table is used; if that
    /// has nothing either, the call fails with [`Error::NoZoneMapping`] and
    /// the regions processed before it stay mapped.
    pub fn configure_regions(&self, regions: Option<&[String]>) -> Result<()> {
        let mut last = self
            .regions_to_fetch
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last = regions.map(<[String]>::to_vec);
        self.rebuild(last.as_deref())
    }

    /// Re-run resolution for the last configured regions.
    pub fn refresh_mapping(&self) -> Result<()> {
        let last = self
            .regions_to_fetch
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match last.as_deref() {
            Some(regions) => self.rebuild(Some(regions)),
            None => {
                debug!("No regions configured to fetch, nothing to refresh");
                Ok(())
            }
        }
    }

    /// Region for a zone, if mapped.
    pub fn region_for_zone(&self, zone: &str) -> Option<String> {
        self.snapshot().region_for_zone(zone).map(str::to_string)
    }

    /// The current index.
    pub fn snapshot(&self) -> Arc<ZoneIndex> {
        Arc::clone(&self.index.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Regions from the last configuration call.
    pub fn regions_to_fetch(&self) -> Option<Vec<RegionId>> {
        self.regions_to_fetch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The fallback table in use.
    pub fn defaults(&self) -> &DefaultZoneTable {
        &self.defaults
    }

    fn rebuild(&self, regions: Option<&[String]>) -> Result<()> {
        let Some(regions) = regions else {
            info!("Regions to fetch is not set, erasing older mapping if any");
            self.publish(ZoneIndex::empty());
            return Ok(());
        };

        info!(?regions, "Fetching availability zone to region mapping");
        let mut index = ZoneIndex::empty();
        let result = self.populate(&mut index, regions);
        let mapped = index.len();
        self.publish(index);
        result?;

        info!(zones = mapped, "Resolved availability zone to region mapping");
        Ok(())
    }

    fn populate(&self, index: &mut ZoneIndex, regions: &[String]) -> Result<()> {
        for region in regions {
            if region.is_empty() {
                return Err(Error::EmptyRegion);
            }

            let discovered = self.discovery.zones_for_region(region)?;
            match discovered {
                Some(zones) if !is_degenerate(Some(&zones)) => {
                    debug!(%region, ?zones, "Using discovered availability zones");
                    index.insert_all(zones, region);
                }
                _ => {
                    info!(%region, "No zones discovered for remote region, checking the default mapping");
                    let zones = self.defaults.zones_for_region(region);
                    if zones.is_empty() {
                        let err = Error::NoZoneMapping {
                            region: region.clone(),
                        };
                        error!("{}", err);
                        return Err(err);
                    }
                    index.insert_all(zones, region);
                }
            }
        }
        Ok(())
    }

    fn publish(&self, index: ZoneIndex) {
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(index);
    }
}

impl AzToRegionMapper for RegionResolver {
    fn set_regions_to_fetch(&self, regions: Option<&[String]>) -> Result<()> {
        self.configure_regions(regions)
    }

    fn region_for_zone(&self, zone: &str) -> Option<String> {
        RegionResolver::region_for_zone(self, zone)
    }

    fn refresh_mapping(&self) -> Result<()> {
        RegionResolver::refresh_mapping(self)
    }
}

impl std::fmt::Debug for RegionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionResolver")
            .field("defaults", &self.defaults)
            .field("index", &self.snapshot())
            .finish_non_exhaustive()
    }
}
