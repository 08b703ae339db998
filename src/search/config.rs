use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Result, sets::candidates::HeuristicWeights};

/// Tunables of the search engine and of the tour loader.
///
/// Every field has a default, so a JSON config file only needs to name the
/// values it overrides.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Frontier heuristic weights.
    pub weights: HeuristicWeights,

    /// Maximum stall count before a leg is abandoned. `None` uses `N²`, where
    /// `N` is the number of tour points.
    pub stall_cutoff: Option<usize>,

    /// Largest tour accepted by the loaders.
    pub max_points: usize,
}

impl SearchConfig {
    pub const DEFAULT_MAX_POINTS: usize = 100;

    /// Reads a config from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Stall cutoff to use for a tour of `num_points` points.
    pub fn cutoff_for(&self, num_points: usize) -> usize {
        self.stall_cutoff
            .unwrap_or_else(|| num_points.saturating_mul(num_points))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            weights: HeuristicWeights::default(),
            stall_cutoff: None,
            max_points: Self::DEFAULT_MAX_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoff_is_n_squared() {
        let config = SearchConfig::default();
        assert_eq!(config.cutoff_for(1), 1);
        assert_eq!(config.cutoff_for(7), 49);
        assert_eq!(config.cutoff_for(100), 10_000);
    }

    #[test]
    fn test_explicit_cutoff_wins() {
        let config = SearchConfig {
            stall_cutoff: Some(5),
            ..SearchConfig::default()
        };
        assert_eq!(config.cutoff_for(100), 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"stall_cutoff": 12}"#).unwrap();
        assert_eq!(config.stall_cutoff, Some(12));
        assert_eq!(config.weights, HeuristicWeights::DEFAULT);
        assert_eq!(config.max_points, 100);
    }

    #[test]
    fn test_load_json_missing_file_is_io_error() {
        let err = SearchConfig::load_json("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
