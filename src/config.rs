//! Ladder configuration.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid
//! configuration file.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Longest path, in steps, a search explores before giving up.
pub const DEFAULT_MAX_DISTANCE: usize = 10;

/// Settings for building the graph and searching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LadderConfig {
    /// Depth bound: paths of more than this many steps are never returned.
    pub max_distance: usize,
    /// Compare length buckets on the rayon pool (`parallel` feature).
    pub parallel_build: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            parallel_build: false,
        }
    }
}

impl LadderConfig {
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_parallel_build(mut self, parallel_build: bool) -> Self {
        self.parallel_build = parallel_build;
        self
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// A zero bound would only ever allow the trivial path.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance == 0 {
            return Err(Error::Config("max_distance must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = LadderConfig::default();
        assert_eq!(config.max_distance, 10);
        assert!(!config.parallel_build);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(LadderConfig::from_json_str("{}").unwrap(), LadderConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = LadderConfig::from_json_str(r#"{"max_distance": 4}"#).unwrap();
        assert_eq!(config.max_distance, 4);
        assert!(!config.parallel_build);
    }

    #[test]
    fn test_zero_distance_rejected() {
        let err = LadderConfig::from_json_str(r#"{"max_distance": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LadderConfig::from_json_str(r#"{"max_depth": 3}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LadderConfig::from_file("/nonexistent/ladder.json").unwrap_err();
        assert!(matches!(err, Error::ConfigLoad { .. }));
    }
}
