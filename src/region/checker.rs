//! Region lookup for registered instances.

use crate::region::resolver::AzToRegionMapper;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Where an instance says it runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataCenter {
    /// No data-center information was reported
    Unknown,
    /// Cloud provider, with the zone from instance metadata if present
    Cloud {
        /// Availability zone
        availability_zone: Option<String>,
    },
    /// Self-hosted data center
    Own,
}

/// Maps instances to regions and tells local from remote.
#[derive(Clone)]
pub struct InstanceRegionChecker {
    mapper: Arc<dyn AzToRegionMapper>,
    local_region: String,
}

impl InstanceRegionChecker {
    /// Create a checker for the client's own region.
    pub fn new(mapper: Arc<dyn AzToRegionMapper>, local_region: &str) -> Self {
        Self {
            mapper,
            local_region: local_region.to_string(),
        }
    }

    /// Region of an instance.
    ///
    /// Instances without data-center info are assumed local. Cloud
    /// instances resolve through their zone; anything else is `None`.
    pub fn instance_region(&self, data_center: &DataCenter) -> Option<String> {
        match data_center {
            DataCenter::Unknown => {
                warn!(
                    local = %self.local_region,
                    "No data center info for instance, assuming local region"
                );
                Some(self.local_region.clone())
            }
            DataCenter::Cloud {
                availability_zone: Some(zone),
            } => self.mapper.region_for_zone(zone),
            DataCenter::Cloud {
                availability_zone: None,
            }
            | DataCenter::Own => None,
        }
    }

    /// A missing region counts as local.
    pub fn is_local_region(&self, instance_region: Option<&str>) -> bool {
        instance_region.map_or(true, |region| region == self.local_region)
    }

    /// The client's own region.
    pub fn local_region(&self) -> &str {
        &self.local_region
    }
}
