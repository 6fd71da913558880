//! PostgreSQL query executor
//!
//! Runs statements on pooled `postgres` connections. The driver is
//! synchronous, so every call is moved onto tokio's blocking pool together
//! with a connection checked out for exactly that call.
//!
//! ## Type mapping
//!
//! | Column type | `SqlValue` |
//! |-------------|------------|
//! | `bool` | `Bool` |
//! | `int2`, `int4`, `int8` | `Int` |
//! | `float4`, `float8` | `Float` |
//! | `text`, `varchar`, `bpchar`, `name` | `Text` |
//! | `timestamp` | `Timestamp` |
//! | `timestamptz` | `Timestamp` (UTC) |
//! | `vector` | `Vector` |
//!
//! Any other column type (`numeric`, ...) must be cast to text in the
//! statement; reading it is a mapping error. `SqlParam::Vector` binds a
//! native `pgvector::Vector`.

use crate::constants::{
    DB_CONNECTION_IDLE_TIMEOUT, DB_CONNECTION_MAX_LIFETIME, DB_CONNECTION_TIMEOUT,
    DB_MAX_CONNECTIONS, DB_MIN_IDLE, POSTGRES_PROVIDER,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use pgvector::Vector;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::types::{ToSql, Type};
use r2d2_postgres::postgres::{Client, NoTls, Row};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use validator::Validate;
use vsim_domain::error::{Error, Result};
use vsim_domain::ports::{QueryExecutor, ResultRow, SqlParam, SqlValue, Statement};

/// Helper module for Duration serialization/deserialization
/// Converts between Duration and integer seconds in TOML
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    /// Serialize Duration as integer seconds
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    /// Deserialize Duration from integer seconds
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Executor to use: `postgres` or `null`
    #[validate(length(min = 1))]
    pub provider: String,
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    #[validate(range(min = 1))]
    pub max_connections: u32,
    /// Minimum number of idle connections
    pub min_idle: u32,
    /// Maximum lifetime of a connection (in seconds)
    #[serde(with = "duration_secs")]
    pub max_lifetime: Duration,
    /// Maximum idle time for a connection (in seconds)
    #[serde(with = "duration_secs")]
    pub idle_timeout: Duration,
    /// Connection timeout (in seconds)
    #[serde(with = "duration_secs")]
    pub connection_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: POSTGRES_PROVIDER.to_string(),
            url: String::new(), // Empty - must load from file or environment
            max_connections: DB_MAX_CONNECTIONS,
            min_idle: DB_MIN_IDLE,
            max_lifetime: DB_CONNECTION_MAX_LIFETIME,
            idle_timeout: DB_CONNECTION_IDLE_TIMEOUT,
            connection_timeout: DB_CONNECTION_TIMEOUT,
        }
    }
}

impl DatabaseConfig {
    /// Default configuration pointing at `url`
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The connection string with any password replaced, for logs
    ///
    /// Covers the `user:password@` part and `password=` query parameters of
    /// URLs, and `password=` pairs of key/value connection strings.
    pub fn redacted_url(&self) -> String {
        match self.url.split_once("://") {
            Some((scheme, rest)) => format!("{scheme}://{}", redact_url_body(rest)),
            None => redact_key_values(&self.url),
        }
    }

    /// Field rules plus the cross-field pool checks
    pub fn validate_pool(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::config_with_source("Invalid database configuration", e))?;
        if self.min_idle > self.max_connections {
            return Err(Error::config(format!(
                "database.min_idle ({}) cannot exceed database.max_connections ({})",
                self.min_idle, self.max_connections
            )));
        }
        if self.connection_timeout.is_zero() {
            return Err(Error::config("database.connection_timeout cannot be 0"));
        }
        Ok(())
    }
}

/// PostgreSQL query executor
///
/// Share it behind an `Arc`; the pool is closed when the last handle drops.
pub struct PostgresQueryExecutor {
    pool: Option<Pool<PostgresConnectionManager<NoTls>>>,
}

impl PostgresQueryExecutor {
    /// Create the executor and its connection pool
    ///
    /// Blocks until `min_idle` connections are open or the connection
    /// timeout elapses.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        config.validate_pool()?;
        if config.url.trim().is_empty() {
            return Err(Error::config(
                "database.url is not set (set VSIM_DATABASE__URL or DATABASE_URL)",
            ));
        }

        let manager = PostgresConnectionManager::new(
            config
                .url
                .parse()
                .map_err(|e| Error::config_with_source("Invalid database URL", e))?,
            NoTls,
        );

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_idle))
            .max_lifetime(Some(config.max_lifetime))
            .idle_timeout(Some(config.idle_timeout))
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| {
                Error::storage_with_source(format!("Failed to create connection pool: {e}"), e)
            })?;

        info!(
            url = %config.redacted_url(),
            max_connections = config.max_connections,
            "PostgreSQL pool created"
        );
        Ok(Self { pool: Some(pool) })
    }

    async fn with_client<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Client) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self
            .pool
            .clone()
            .ok_or_else(|| Error::internal("Connection pool is closed"))?;
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                Error::storage_with_source(format!("Failed to get database connection: {e}"), e)
            })?;
            operation(&mut conn)
        })
        .await
        .map_err(|e| Error::internal(format!("Database task failed: {e}")))?
    }
}

impl Drop for PostgresQueryExecutor {
    fn drop(&mut self) {
        // Each driver connection owns a runtime, which must not be dropped on an async worker.
        if let Some(pool) = self.pool.take() {
            if tokio::runtime::Handle::try_current().is_ok() {
                std::thread::spawn(move || drop(pool));
            }
        }
    }
}

#[async_trait]
impl QueryExecutor for PostgresQueryExecutor {
    async fn query(&self, statement: &Statement) -> Result<Vec<ResultRow>> {
        debug!(sql = %statement.sql, params = statement.params.len(), "Executing query");
        let statement = statement.clone();
        self.with_client(move |client| {
            let params = bind_params(&statement.params);
            let rows = client
                .query(statement.sql.as_str(), &param_refs(&params))
                .map_err(|e| Error::storage_with_source(format!("Query failed: {e}"), e))?;
            rows.iter().map(read_row).collect()
        })
        .await
    }

    async fn execute(&self, statement: &Statement) -> Result<u64> {
        debug!(sql = %statement.sql, params = statement.params.len(), "Executing statement");
        let statement = statement.clone();
        self.with_client(move |client| {
            let params = bind_params(&statement.params);
            client
                .execute(statement.sql.as_str(), &param_refs(&params))
                .map_err(|e| Error::storage_with_source(format!("Statement failed: {e}"), e))
        })
        .await
    }

    fn provider_name(&self) -> &str {
        POSTGRES_PROVIDER
    }

    async fn health_check(&self) -> Result<()> {
        self.with_client(|client| {
            client.simple_query("SELECT 1").map_err(|e| {
                Error::storage_with_source(format!("Database health check failed: {e}"), e)
            })?;
            Ok(())
        })
        .await
    }
}

const VECTOR_TYPE: &str = "vector";
const REDACTED: &str = "***";
const PASSWORD_KEY: &str = "password";

/// Redact everything after `scheme://`
fn redact_url_body(body: &str) -> String {
    let authority_end = body.find(['/', '?']).unwrap_or(body.len());
    let (authority, tail) = body.split_at(authority_end);

    let authority = match authority.rsplit_once('@') {
        Some((credentials, host)) => match credentials.split_once(':') {
            Some((user, _)) => format!("{user}:{REDACTED}@{host}"),
            None => authority.to_string(),
        },
        None => authority.to_string(),
    };

    let tail = match tail.split_once('?') {
        Some((path, query)) => {
            let query = query
                .split('&')
                .map(|pair| match pair.split_once('=') {
                    Some((key, _)) if key == PASSWORD_KEY => format!("{PASSWORD_KEY}={REDACTED}"),
                    _ => pair.to_string(),
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{path}?{query}")
        }
        None => tail.to_string(),
    };

    format!("{authority}{tail}")
}

/// Redact `password=` in a `key=value key='quoted value'` connection string
fn redact_key_values(conninfo: &str) -> String {
    let mut out = String::with_capacity(conninfo.len());
    let mut key = String::new();
    let mut chars = conninfo.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '=' {
            out.push(c);
            key.push(c);
            continue;
        }

        out.push(c);
        while let Some(ws) = chars.next_if(|c| c.is_whitespace()) {
            out.push(ws);
        }

        let mut value = String::new();
        if let Some(quote) = chars.next_if_eq(&'\'') {
            value.push(quote);
            while let Some(v) = chars.next() {
                value.push(v);
                if v == '\\' {
                    if let Some(escaped) = chars.next() {
                        value.push(escaped);
                    }
                } else if v == '\'' {
                    break;
                }
            }
        } else {
            while let Some(v) = chars.next_if(|c| !c.is_whitespace()) {
                value.push(v);
            }
        }

        if key.trim() == PASSWORD_KEY {
            out.push_str(REDACTED);
        } else {
            out.push_str(&value);
        }
        key.clear();
    }

    out
}

fn bind_params(params: &[SqlParam]) -> Vec<Box<dyn ToSql + Sync>> {
    params
        .iter()
        .map(|param| -> Box<dyn ToSql + Sync> {
            match param {
                SqlParam::Text(v) => Box::new(v.clone()),
                SqlParam::Int(v) => Box::new(*v),
                SqlParam::Float(v) => Box::new(*v),
                SqlParam::Null => Box::new(Option::<String>::None),
                SqlParam::Vector(v) => Box::new(v.clone().map(Vector::from)),
            }
        })
        .collect()
}

fn param_refs(params: &[Box<dyn ToSql + Sync>]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|param| &**param as &(dyn ToSql + Sync))
        .collect()
}

fn read_row(row: &Row) -> Result<ResultRow> {
    let mut result = ResultRow::new();
    for (idx, column) in row.columns().iter().enumerate() {
        result.push(column.name(), read_value(row, idx, column.type_(), column.name())?);
    }
    Ok(result)
}

fn read_value(row: &Row, idx: usize, ty: &Type, name: &str) -> Result<SqlValue> {
    let decode = |e: r2d2_postgres::postgres::Error| {
        Error::mapping(format!("column '{name}' could not be decoded: {e}"))
    };

    let value = if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(idx)
            .map_err(decode)?
            .map(SqlValue::Bool)
    } else if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)
            .map_err(decode)?
            .map(|v| SqlValue::Int(i64::from(v)))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)
            .map_err(decode)?
            .map(|v| SqlValue::Int(i64::from(v)))
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)
            .map_err(decode)?
            .map(SqlValue::Int)
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(idx)
            .map_err(decode)?
            .map(|v| SqlValue::Float(f64::from(v)))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(idx)
            .map_err(decode)?
            .map(SqlValue::Float)
    } else if [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME].contains(ty) {
        row.try_get::<_, Option<String>>(idx)
            .map_err(decode)?
            .map(SqlValue::Text)
    } else if *ty == Type::TIMESTAMP {
        row.try_get::<_, Option<NaiveDateTime>>(idx)
            .map_err(decode)?
            .map(SqlValue::Timestamp)
    } else if *ty == Type::TIMESTAMPTZ {
        row.try_get::<_, Option<DateTime<Utc>>>(idx)
            .map_err(decode)?
            .map(|v| SqlValue::Timestamp(v.naive_utc()))
    } else if ty.name() == VECTOR_TYPE {
        row.try_get::<_, Option<Vector>>(idx)
            .map_err(decode)?
            .map(|v| SqlValue::Vector(v.to_vec()))
    } else {
        return Err(Error::mapping(format!(
            "column '{name}' has unsupported type {ty}; cast it to text in the statement"
        )));
    };

    Ok(value.unwrap_or(SqlValue::Null))
}
