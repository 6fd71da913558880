//! Storage Query Port
//!
//! The only boundary between the query layer and the database: execute a
//! parameterized statement and get back rows of named columns, or an
//! affected-row count. Values never reach the database through the
//! statement text; they travel as [`SqlParam`]s.

use crate::codec;
use crate::error::{Error, Result};
use crate::value_objects::QueryVector;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::fmt;

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Text, also used for decimal literals cast in SQL
    Text(String),
    /// 64-bit integer (`int8`)
    Int(i64),
    /// 64-bit float (`float8`)
    Float(f64),
    /// NULL bound to a text-typed placeholder
    Null,
    /// pgvector `vector`; `None` binds a vector-typed NULL
    Vector(Option<Vec<f32>>),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for SqlParam {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&QueryVector> for SqlParam {
    fn from(value: &QueryVector) -> Self {
        Self::Vector(Some(value.as_slice().to_vec()))
    }
}

impl From<Option<Vec<f32>>> for SqlParam {
    fn from(value: Option<Vec<f32>>) -> Self {
        Self::Vector(value)
    }
}

/// A parameterized SQL statement
///
/// `params[i]` binds placeholder `$i+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL text with `$n` placeholders
    pub sql: String,
    /// Bound parameters in placeholder order
    pub params: Vec<SqlParam>,
}

impl Statement {
    /// Create a statement without parameters
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter, returning its placeholder number
    pub fn push(&mut self, param: impl Into<SqlParam>) -> usize {
        self.params.push(param.into());
        self.params.len()
    }

    /// Append a parameter, builder style
    #[must_use]
    pub fn bind(mut self, param: impl Into<SqlParam>) -> Self {
        self.push(param);
        self
    }
}

/// A column value returned by the storage engine
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Any integer column
    Int(i64),
    /// Any floating point column
    Float(f64),
    /// Any textual column
    Text(String),
    /// Timestamp without time zone
    Timestamp(NaiveDateTime),
    /// pgvector `vector`
    Vector(Vec<f32>),
}

impl SqlValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
            Self::Vector(_) => "vector",
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Vector(v) => f.write_str(&codec::encode(Some(v)).unwrap_or_default()),
        }
    }
}

/// One returned row, addressed by column name
///
/// Typed accessors fail with [`Error::Mapping`] when the column is absent,
/// NULL where a value is required, or of another type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    columns: Vec<(String, SqlValue)>,
}

impl ResultRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: SqlValue) -> Self {
        self.push(name, value);
        self
    }

    /// Append a column
    pub fn push(&mut self, name: impl Into<String>, value: SqlValue) {
        self.columns.push((name.into(), value));
    }

    /// Column names in select order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Raw value of a column
    pub fn get(&self, name: &str) -> Result<&SqlValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::mapping(format!("column '{name}' missing from result row")))
    }

    /// Required integer column
    pub fn get_i64(&self, name: &str) -> Result<i64> {
        self.get_opt_i64(name)?.ok_or_else(|| null_in(name))
    }

    /// Nullable integer column
    pub fn get_opt_i64(&self, name: &str) -> Result<Option<i64>> {
        match self.get(name)? {
            SqlValue::Null => Ok(None),
            SqlValue::Int(v) => Ok(Some(*v)),
            other => Err(wrong_type(name, "int", other)),
        }
    }

    /// Required float column
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        match self.get(name)? {
            SqlValue::Float(v) => Ok(*v),
            SqlValue::Null => Err(null_in(name)),
            other => Err(wrong_type(name, "float", other)),
        }
    }

    /// Required text column
    pub fn get_str(&self, name: &str) -> Result<&str> {
        self.get_opt_str(name)?.ok_or_else(|| null_in(name))
    }

    /// Nullable text column
    pub fn get_opt_str(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name)? {
            SqlValue::Null => Ok(None),
            SqlValue::Text(v) => Ok(Some(v.as_str())),
            other => Err(wrong_type(name, "text", other)),
        }
    }

    /// Nullable vector column
    ///
    /// Accepts a native vector value or its `"[v0,v1,...]"` text form.
    pub fn get_opt_vector(&self, name: &str) -> Result<Option<Vec<f32>>> {
        match self.get(name)? {
            SqlValue::Null => Ok(None),
            SqlValue::Vector(v) => Ok(Some(v.clone())),
            SqlValue::Text(v) => codec::decode(Some(v))
                .map_err(|e| Error::mapping(format!("column '{name}': {e}"))),
            other => Err(wrong_type(name, "vector", other)),
        }
    }

    /// Nullable timestamp column
    pub fn get_opt_timestamp(&self, name: &str) -> Result<Option<NaiveDateTime>> {
        match self.get(name)? {
            SqlValue::Null => Ok(None),
            SqlValue::Timestamp(v) => Ok(Some(*v)),
            other => Err(wrong_type(name, "timestamp", other)),
        }
    }
}

fn null_in(name: &str) -> Error {
    Error::mapping(format!("column '{name}' is NULL"))
}

fn wrong_type(name: &str, expected: &str, found: &SqlValue) -> Error {
    Error::mapping(format!(
        "column '{name}' has type {}, expected {expected}",
        found.type_name()
    ))
}

/// Storage Query Executor
///
/// Each call is one request/response round trip. Implementations hold no
/// per-request state and do not retry: engine failures come back as
/// [`Error::Storage`].
///
/// # Example
///
/// ```ignore
/// use vsim_domain::ports::{QueryExecutor, Statement};
///
/// let stmt = Statement::new("SELECT id, name FROM items WHERE category = $1::text").bind("Fruit");
/// for row in executor.query(&stmt).await? {
///     println!("{}", row.get_str("name")?);
/// }
/// ```
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Execute a statement returning rows
    async fn query(&self, statement: &Statement) -> Result<Vec<ResultRow>>;

    /// Execute a statement returning the affected-row count
    async fn execute(&self, statement: &Statement) -> Result<u64>;

    /// Name of this executor (e.g., "postgres", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the executor (default implementation)
    async fn health_check(&self) -> Result<()> {
        self.query(&Statement::new("SELECT 1")).await?;
        Ok(())
    }
}
