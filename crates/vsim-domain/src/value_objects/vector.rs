//! Query vector value object

use crate::codec;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value Object: Similarity Search Input
///
/// A non-empty sequence of finite `f32` components. Built either from
/// numbers or from the textual `"[v0,v1,...]"` form. Statements bind it as
/// a native pgvector value; the text form is the full-precision
/// [`codec::encode`] output.
///
/// ## Example
///
/// ```rust
/// use vsim_domain::QueryVector;
///
/// let query: QueryVector = "[1.0, 0.5, 0.2, 0.1]".parse().unwrap();
/// assert_eq!(query.dimensions(), 4);
/// assert_eq!(query.to_sql_literal(), "[1,0.5,0.2,0.1]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct QueryVector(Vec<f32>);

impl QueryVector {
    /// Create a query vector from components
    pub fn new(values: Vec<f32>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::parse("query vector must have at least one component"));
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::parse(format!(
                "query vector component {index} is not finite"
            )));
        }
        Ok(Self(values))
    }

    /// Parse the textual `"[v0,v1,...]"` form
    pub fn parse(text: &str) -> Result<Self> {
        let values = codec::decode(Some(text))?
            .ok_or_else(|| Error::parse("query vector is empty"))?;
        Self::new(values)
    }

    /// Components of the vector
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Number of components
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Full-precision `"[v0,v1,...]"` text
    pub fn to_sql_literal(&self) -> String {
        codec::encode(Some(&self.0)).unwrap_or_default()
    }

    /// One-decimal rendering for log lines
    pub fn to_display_string(&self) -> String {
        codec::format_rounded(&self.0)
    }
}

impl FromStr for QueryVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<f32>> for QueryVector {
    type Error = Error;

    fn try_from(values: Vec<f32>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<QueryVector> for Vec<f32> {
    fn from(vector: QueryVector) -> Self {
        vector.0
    }
}

impl fmt::Display for QueryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_literal())
    }
}
