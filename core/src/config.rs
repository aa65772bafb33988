//! Configuration management for the ticket purchase service.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Payment gateway configuration
    pub payment: GatewayConfig,
    /// Seat-reservation gateway configuration
    pub reservation: GatewayConfig,
}

/// Per-gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Simulated latency for the mock gateway, in milliseconds
    pub latency_ms: u64,
}

impl GatewayConfig {
    /// Returns the configured latency as a [`Duration`]
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            payment: GatewayConfig {
                latency_ms: env::var("PAYMENT_GATEWAY_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            },
            reservation: GatewayConfig {
                latency_ms: env::var("RESERVATION_GATEWAY_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            },
        }
    }
}
