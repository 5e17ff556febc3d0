//! Built-in zone table for well-known regions.
//!
//! Used when a region is configured to be fetched but discovery has no
//! zones for it. If discovery reports any real zone, this table is ignored
//! for that region.

use crate::core::ZoneSet;

/// Compiled-in region to zone associations.
const DEFAULT_REGION_ZONES: &[(&str, &[&str])] = &[
    ("us-east-1", &["us-east-1a", "us-east-1c", "us-east-1d", "us-east-1e"]),
    ("us-west-1", &["us-west-1a", "us-west-1c"]),
    ("us-west-2", &["us-west-2a", "us-west-2b", "us-west-2c"]),
    ("eu-west-1", &["eu-west-1a", "eu-west-1b", "eu-west-1c"]),
];

/// Immutable fallback table of region to zones.
#[derive(Clone, Copy, Debug)]
pub struct DefaultZoneTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl DefaultZoneTable {
    /// The built-in table.
    pub const fn builtin() -> Self {
        Self {
            entries: DEFAULT_REGION_ZONES,
        }
    }

    /// Zones known for a region. Unknown regions yield an empty set.
    pub fn zones_for_region(&self, region: &str) -> ZoneSet {
        self.lookup(region)
            .map(|zones| zones.iter().map(|z| z.to_string()).collect())
            .unwrap_or_default()
    }

    /// Check if the table has any zone for a region.
    pub fn contains_region(&self, region: &str) -> bool {
        self.lookup(region).is_some_and(|zones| !zones.is_empty())
    }

    /// Regions covered by the table.
    pub fn regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(region, _)| *region)
    }

    fn lookup(&self, region: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == region)
            .map(|(_, zones)| *zones)
    }
}

impl Default for DefaultZoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zone_set;

    #[test]
    fn test_builtin_entries() {
        let table = DefaultZoneTable::builtin();
        assert_eq!(
            table.zones_for_region("us-east-1"),
            zone_set(["us-east-1a", "us-east-1c", "us-east-1d", "us-east-1e"])
        );
        assert_eq!(table.zones_for_region("us-west-1"), zone_set(["us-west-1a", "us-west-1c"]));
        assert_eq!(table.zones_for_region("us-west-2").len(), 3);
        assert_eq!(table.zones_for_region("eu-west-1").len(), 3);
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let table = DefaultZoneTable::default();
        assert!(table.zones_for_region("eu-central-1").is_empty());
        assert!(!table.contains_region("eu-central-1"));
        assert!(table.zones_for_region("").is_empty());
    }

    #[test]
    fn test_regions() {
        let regions: Vec<_> = DefaultZoneTable::builtin().regions().collect();
        assert_eq!(regions, vec!["us-east-1", "us-west-1", "us-west-2", "eu-west-1"]);
    }

    #[test]
    fn test_zones_are_globally_unique() {
        let table = DefaultZoneTable::builtin();
        let mut seen = ZoneSet::new();
        for region in table.regions() {
            for zone in table.zones_for_region(region) {
                assert!(zone.starts_with(region));
                assert!(seen.insert(zone));
            }
        }
    }
}
