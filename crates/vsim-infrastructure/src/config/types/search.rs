//! Search default types

use crate::constants::MAX_SEARCH_LIMIT;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vsim_domain::DistanceMetric;
use vsim_domain::constants::DEFAULT_SEARCH_LIMIT;

/// Search defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count when no limit is given
    #[validate(range(min = 1, max = MAX_SEARCH_LIMIT))]
    pub default_limit: usize,

    /// Metric when none is given
    pub default_metric: DistanceMetric,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            default_metric: DistanceMetric::default(),
        }
    }
}
