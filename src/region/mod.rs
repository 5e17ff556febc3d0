//! Region Module
//!
//! Resolves availability zones to regions:
//! - Built-in default zone table
//! - Pluggable zone discovery
//! - Zone to region resolver
//! - Instance region checks

pub mod checker;
pub mod config;
pub mod defaults;
pub mod discovery;
pub mod resolver;

pub use checker::{DataCenter, InstanceRegionChecker};
pub use config::RegionConfig;
pub use defaults::DefaultZoneTable;
pub use discovery::{StaticZoneDiscovery, ZoneDiscovery};
pub use resolver::{AzToRegionMapper, RegionResolver, ZoneIndex};
