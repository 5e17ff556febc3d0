//! Error types for zone mapping.

use thiserror::Error;

/// Result type alias for zone mapping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving zones to regions.
#[derive(Error, Debug)]
pub enum Error {
    // Resolution errors
    #[error(
        "No availability zone information available for remote region: {region}. \
         This is required if registry information for this region is configured to be fetched."
    )]
    NoZoneMapping { region: String },

    #[error("Region identifier must not be empty")]
    EmptyRegion,

    #[error("Zone discovery failed: {0}")]
    Discovery(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this is the configuration failure raised when neither
    /// discovery nor the default table knows a region's zones.
    pub fn is_missing_mapping(&self) -> bool {
        matches!(self, Error::NoZoneMapping { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mapping_message_names_region() {
        let err = Error::NoZoneMapping {
            region: "eu-central-1".to_string(),
        };
        assert!(err.is_missing_mapping());
        assert!(err.to_string().contains("eu-central-1"));
    }

    #[test]
    fn test_other_errors_are_not_missing_mapping() {
        assert!(!Error::Discovery("timeout".into()).is_missing_mapping());
        assert!(!Error::EmptyRegion.is_missing_mapping());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
