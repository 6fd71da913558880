//! Similarity statement builder

use super::{ITEM_SELECT_LIST, numeric_param, vector_param};
use std::fmt::Write as _;
use vsim_domain::constants::{COL_CATEGORY, COL_DISTANCE, COL_EMBEDDING, COL_PRICE, ITEMS_TABLE};
use vsim_domain::error::{Error, Result};
use vsim_domain::ports::Statement;
use vsim_domain::value_objects::{DistanceMetric, Price, QueryVector, SearchFilters};

/// Distance columns projected next to the item columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// One `distance` column for the primary metric
    Distance,
    /// `l2_distance`, `cosine_distance`, `neg_inner_product`, `l1_distance`
    AllMetrics,
}

/// Price restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    /// `price < max`
    Below(Price),
    /// `price >= min`
    AtLeast(Price),
    /// `price BETWEEN min AND max`, both ends inclusive
    Between(Price, Price),
}

impl PriceFilter {
    /// Derive the filter from optional bounds
    pub fn from_bounds(min: Option<Price>, max: Option<Price>) -> Result<Option<Self>> {
        match (min, max) {
            (None, None) => Ok(None),
            (None, Some(max)) => Ok(Some(Self::Below(max))),
            (Some(min), None) => Ok(Some(Self::AtLeast(min))),
            (Some(min), Some(max)) if min > max => Err(Error::invalid_argument(format!(
                "min price {min} is greater than max price {max}"
            ))),
            (Some(min), Some(max)) => Ok(Some(Self::Between(min, max))),
        }
    }
}

/// How many rows come back
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultBound {
    /// At most `k` rows
    Limit(usize),
    /// Every row with `distance < threshold`, no cap
    Threshold(f64),
}

/// Description of one nearest-neighbour statement
///
/// Rows are ordered ascending by the primary distance with no secondary
/// key, so rows at equal distance come back in whatever order the engine
/// produces. Rows without an embedding never match.
///
/// ## Example
///
/// ```rust
/// use vsim_application::query::SimilarityQuery;
/// use vsim_domain::{DistanceMetric, QueryVector};
///
/// let vector = QueryVector::parse("[1.0, 0.5, 0.2, 0.1]").unwrap();
/// let stmt = SimilarityQuery::top_k(DistanceMetric::Cosine, 3)
///     .in_category("Fruit")
///     .build(&vector)
///     .unwrap();
/// assert!(stmt.sql.contains("embedding <=> CAST($1 AS vector) AS distance"));
/// assert_eq!(stmt.params.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityQuery {
    metric: DistanceMetric,
    projection: Projection,
    category: Option<String>,
    price: Option<PriceFilter>,
    bound: ResultBound,
}

impl SimilarityQuery {
    /// The `limit` nearest items under `metric`
    pub fn top_k(metric: DistanceMetric, limit: usize) -> Self {
        Self {
            metric,
            projection: Projection::Distance,
            category: None,
            price: None,
            bound: ResultBound::Limit(limit),
        }
    }

    /// Every item closer than `threshold` under `metric`
    pub fn within_threshold(metric: DistanceMetric, threshold: f64) -> Self {
        Self {
            bound: ResultBound::Threshold(threshold),
            ..Self::top_k(metric, 0)
        }
    }

    /// The `limit` nearest items by L2, with all four distances projected
    pub fn compare_all(limit: usize) -> Self {
        Self {
            projection: Projection::AllMetrics,
            ..Self::top_k(DistanceMetric::L2, limit)
        }
    }

    /// Restrict to one category
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict by price
    #[must_use]
    pub fn with_price(mut self, filter: PriceFilter) -> Self {
        self.price = Some(filter);
        self
    }

    /// Apply every filter set in `filters`
    pub fn with_filters(mut self, filters: &SearchFilters) -> Result<Self> {
        if let Some(category) = &filters.category {
            self.category = Some(category.clone());
        }
        if let Some(price) = PriceFilter::from_bounds(filters.min_price, filters.max_price)? {
            self.price = Some(price);
        }
        Ok(self)
    }

    /// Primary metric
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Emit the statement for `vector`
    ///
    /// The vector is always `$1`; the remaining placeholders follow the
    /// order filters appear in the WHERE clause, then the limit or threshold.
    pub fn build(&self, vector: &QueryVector) -> Result<Statement> {
        self.validate()?;

        let mut stmt = Statement::new(String::new());
        let vector_ref = vector_param(stmt.push(vector));
        let distance_of =
            |metric: DistanceMetric| format!("{COL_EMBEDDING} {} {vector_ref}", metric.operator());

        let mut sql = format!("SELECT {ITEM_SELECT_LIST}");
        match self.projection {
            Projection::Distance => {
                let _ = write!(sql, ",\n       {} AS {COL_DISTANCE}", distance_of(self.metric));
            }
            Projection::AllMetrics => {
                for metric in DistanceMetric::ALL {
                    let _ = write!(
                        sql,
                        ",\n       {} AS {}",
                        distance_of(metric),
                        metric.column_alias()
                    );
                }
            }
        }

        let _ = write!(sql, "\nFROM {ITEMS_TABLE}\nWHERE {COL_EMBEDDING} IS NOT NULL");

        if let Some(category) = &self.category {
            let n = stmt.push(category.as_str());
            let _ = write!(sql, "\n  AND {COL_CATEGORY} = ${n}::text");
        }

        match self.price {
            Some(PriceFilter::Below(max)) => {
                let max = numeric_param(stmt.push(max.to_string()));
                let _ = write!(sql, "\n  AND {COL_PRICE} < {max}");
            }
            Some(PriceFilter::AtLeast(min)) => {
                let min = numeric_param(stmt.push(min.to_string()));
                let _ = write!(sql, "\n  AND {COL_PRICE} >= {min}");
            }
            Some(PriceFilter::Between(min, max)) => {
                let min = numeric_param(stmt.push(min.to_string()));
                let max = numeric_param(stmt.push(max.to_string()));
                let _ = write!(sql, "\n  AND {COL_PRICE} BETWEEN {min} AND {max}");
            }
            None => {}
        }

        if let ResultBound::Threshold(threshold) = self.bound {
            let n = stmt.push(threshold);
            let _ = write!(sql, "\n  AND {} < ${n}::float8", distance_of(self.metric));
        }

        let order_column = match self.projection {
            Projection::Distance => COL_DISTANCE,
            Projection::AllMetrics => self.metric.column_alias(),
        };
        let _ = write!(sql, "\nORDER BY {order_column}");

        if let ResultBound::Limit(limit) = self.bound {
            let limit = i64::try_from(limit)
                .map_err(|_| Error::invalid_argument(format!("limit {limit} is too large")))?;
            let n = stmt.push(limit);
            let _ = write!(sql, "\nLIMIT ${n}");
        }

        stmt.sql = sql;
        Ok(stmt)
    }

    fn validate(&self) -> Result<()> {
        match self.bound {
            ResultBound::Limit(0) => {
                return Err(Error::invalid_argument("limit must be greater than zero"));
            }
            ResultBound::Threshold(t) if !t.is_finite() => {
                return Err(Error::invalid_argument(format!(
                    "threshold must be a finite number, got {t}"
                )));
            }
            _ => {}
        }
        if self
            .category
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            return Err(Error::invalid_argument("category filter must not be empty"));
        }
        if let Some(PriceFilter::Between(min, max)) = self.price {
            if min > max {
                return Err(Error::invalid_argument(format!(
                    "min price {min} is greater than max price {max}"
                )));
            }
        }
        Ok(())
    }
}
