//! Store configuration
//!
//! Controls when a store grows its table, when it compacts tombstones,
//! and how small a table may start.

use hashmat_core::{
    validate_ratio, MatrixError, Result, DELETED_RATIO_THRESHOLD, LOAD_RATIO_THRESHOLD,
    MIN_CAPACITY,
};

/// Maintenance parameters for a [`SparseStore`](crate::SparseStore)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StoreConfig {
    /// Live density at which an insert grows the table
    pub load_ratio_threshold: f64,
    /// Tombstone density above which a delete compacts the table
    pub deleted_ratio_threshold: f64,
    /// Lower bound on the initial capacity, a power of two
    pub min_capacity: usize,
}

impl StoreConfig {
    /// Set the live density that triggers growth
    pub fn with_load_ratio_threshold(mut self, threshold: f64) -> Self {
        self.load_ratio_threshold = threshold;
        self
    }

    /// Set the tombstone density that triggers compaction
    pub fn with_deleted_ratio_threshold(mut self, threshold: f64) -> Self {
        self.deleted_ratio_threshold = threshold;
        self
    }

    /// Set the smallest capacity a table starts with
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Check that both thresholds lie in (0, 1) and the minimum capacity
    /// is a power of two
    pub fn validate(&self) -> Result<()> {
        validate_ratio(self.load_ratio_threshold)?;
        validate_ratio(self.deleted_ratio_threshold)?;
        if !self.min_capacity.is_power_of_two() {
            return Err(MatrixError::InvalidConfig);
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::debug!(error = %err, "rejected store configuration");
            MatrixError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            load_ratio_threshold: LOAD_RATIO_THRESHOLD,
            deleted_ratio_threshold: DELETED_RATIO_THRESHOLD,
            min_capacity: MIN_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.load_ratio_threshold, 0.75);
        assert_eq!(config.deleted_ratio_threshold, 0.33);
        assert_eq!(config.min_capacity, 4);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_and_validation() {
        let config = StoreConfig::default()
            .with_load_ratio_threshold(0.5)
            .with_deleted_ratio_threshold(0.2)
            .with_min_capacity(16);
        assert_eq!(config.validate(), Ok(()));

        let bad_load = StoreConfig::default().with_load_ratio_threshold(1.0);
        assert_eq!(bad_load.validate(), Err(MatrixError::InvalidConfig));

        let bad_deleted = StoreConfig::default().with_deleted_ratio_threshold(-0.1);
        assert_eq!(bad_deleted.validate(), Err(MatrixError::InvalidConfig));

        let bad_capacity = StoreConfig::default().with_min_capacity(12);
        assert_eq!(bad_capacity.validate(), Err(MatrixError::InvalidConfig));
        let zero_capacity = StoreConfig::default().with_min_capacity(0);
        assert_eq!(zero_capacity.validate(), Err(MatrixError::InvalidConfig));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = StoreConfig::from_json(r#"{ "load_ratio_threshold": 0.5 }"#).unwrap();
        assert_eq!(config.load_ratio_threshold, 0.5);
        assert_eq!(config.deleted_ratio_threshold, 0.33);
        assert_eq!(config.min_capacity, 4);

        let full = StoreConfig::from_json(
            r#"{ "load_ratio_threshold": 0.6, "deleted_ratio_threshold": 0.1, "min_capacity": 64 }"#,
        )
        .unwrap();
        let expected = StoreConfig::default()
            .with_load_ratio_threshold(0.6)
            .with_deleted_ratio_threshold(0.1)
            .with_min_capacity(64);
        assert_eq!(full, expected);

        assert_eq!(
            StoreConfig::from_json(r#"{ "min_capacity": 3 }"#),
            Err(MatrixError::InvalidConfig)
        );
        assert_eq!(
            StoreConfig::from_json(r#"{ "growth": 2 }"#),
            Err(MatrixError::InvalidConfig)
        );
        assert_eq!(
            StoreConfig::from_json("not json"),
            Err(MatrixError::InvalidConfig)
        );
    }
}
