//! Common types used across zonemap modules.

use std::collections::BTreeSet;

/// A region identifier, e.g. `us-east-1`.
pub type RegionId = String;

/// An availability-zone identifier, e.g. `us-east-1a`.
pub type ZoneId = String;

/// An ordered set of availability zones.
pub type ZoneSet = BTreeSet<ZoneId>;

/// Marker zone reported when no zone was explicitly configured.
pub const DEFAULT_ZONE: &str = "default";

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Build a zone set from string slices.
pub fn zone_set<I, S>(zones: I) -> ZoneSet
where
    I: IntoIterator<Item = S>,
    S: Into<ZoneId>,
{
    zones.into_iter().map(Into::into).collect()
}

/// Whether a discovery result carries no usable zone data: absent, empty,
/// or only the default-zone marker.
pub fn is_degenerate(zones: Option<&ZoneSet>) -> bool {
    match zones {
        None => true,
        Some(set) => set.is_empty() || (set.len() == 1 && set.contains(DEFAULT_ZONE)),
    }
}
