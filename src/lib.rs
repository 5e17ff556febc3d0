//! # zonemap - availability zone to region resolution
//!
//! Discovery clients fetch registry data for remote regions and must know
//! which region each instance's availability zone belongs to. This crate
//! provides:
//! - **Default table**: built-in zones for well-known regions
//! - **Zone discovery**: pluggable per-region zone sources
//! - **Resolver**: zone to region index with default-table fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use zonemap::region::{RegionResolver, StaticZoneDiscovery};
//!
//! let discovery = StaticZoneDiscovery::default().with_region("us-west-2", &["us-west-2z"]);
//! let resolver = RegionResolver::new(discovery);
//! resolver
//!     .configure_regions(Some(&["us-east-1".to_string(), "us-west-2".to_string()]))
//!     .unwrap();
//!
//! assert_eq!(resolver.region_for_zone("us-east-1a").as_deref(), Some("us-east-1"));
//! assert_eq!(resolver.region_for_zone("us-west-2z").as_deref(), Some("us-west-2"));
//! ```

pub mod core;
pub mod monitoring;
pub mod region;

pub use core::error::{Error, Result};
