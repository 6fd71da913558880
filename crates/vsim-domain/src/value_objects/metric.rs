//! Distance metric value object

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value Object: pgvector Distance Operator
///
/// Every metric maps through a static table to the binary operator the
/// storage engine evaluates. Smaller values are always more similar:
/// [`DistanceMetric::InnerProduct`] is the *negated* inner product, exactly
/// what `<#>` returns, so ascending order works for all four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Euclidean distance, `<->`
    #[default]
    L2,
    /// Cosine distance, `<=>`
    Cosine,
    /// Negative inner product, `<#>`
    InnerProduct,
    /// Manhattan distance, `<+>`
    L1,
}

impl DistanceMetric {
    /// All metrics, in the column order of a multi-metric comparison
    pub const ALL: [Self; 4] = [Self::L2, Self::Cosine, Self::InnerProduct, Self::L1];

    /// SQL operator evaluated by the storage engine
    pub const fn operator(self) -> &'static str {
        match self {
            Self::L2 => "<->",
            Self::Cosine => "<=>",
            Self::InnerProduct => "<#>",
            Self::L1 => "<+>",
        }
    }

    /// Column alias used when all metrics are projected together
    pub const fn column_alias(self) -> &'static str {
        match self {
            Self::L2 => "l2_distance",
            Self::Cosine => "cosine_distance",
            Self::InnerProduct => "neg_inner_product",
            Self::L1 => "l1_distance",
        }
    }

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L2 => "l2",
            Self::Cosine => "cosine",
            Self::InnerProduct => "inner_product",
            Self::L1 => "l1",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "l2" | "euclidean" => Ok(Self::L2),
            "cosine" => Ok(Self::Cosine),
            "inner_product" | "inner-product" | "ip" => Ok(Self::InnerProduct),
            "l1" | "manhattan" => Ok(Self::L1),
            other => Err(Error::invalid_argument(format!(
                "unknown distance metric '{other}'. Use l2, cosine, inner_product or l1"
            ))),
        }
    }
}
