//! Executor health checks

use crate::logging::log_health_check;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use vsim_domain::ports::QueryExecutor;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Storage answered
    Up,
    /// Storage is unreachable or failing
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the checked component
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Optional error message
    pub error: Option<String>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Down,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error,
        }
    }

    /// Set the response time
    #[must_use]
    pub fn with_response_time(mut self, response_time_ms: u64) -> Self {
        self.response_time_ms = response_time_ms;
        self
    }
}

/// Run the executor's health check and time it
pub async fn check_executor(executor: &dyn QueryExecutor) -> HealthCheck {
    let name = executor.provider_name().to_string();
    let started = Instant::now();
    let result = executor.health_check().await;
    let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let check = match result {
        Ok(()) => HealthCheck::healthy(name),
        Err(e) => HealthCheck::failed(name, Some(e.to_string())),
    };
    log_health_check(
        &check.name,
        check.status.is_healthy(),
        check.error.as_deref(),
    );
    check.with_response_time(elapsed)
}
