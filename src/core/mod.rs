//! Core utilities and common types for zonemap.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
