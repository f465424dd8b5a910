//! Console configuration from environment variables.
//!
//! | Variable                   | Default  |
//! |----------------------------|----------|
//! | `EDUSPOT_STORE_LATENCY_MS` | 300      |
//! | `EDUSPOT_AUTH_LATENCY_MS`  | 500      |
//! | `EDUSPOT_SEED`             | `true`   |
//! | `EDUSPOT_LOG_FORMAT`       | `pretty` |
//!
//! Unset variables take the default silently; unparsable ones take it with a
//! warning.

use std::str::FromStr;
use std::time::Duration;

use eduspot_core::DomainResult;
use eduspot_infra::{AUTH_LATENCY, Backend, BackendLatency, STORE_LATENCY};
use eduspot_observability::LogFormat;

pub const STORE_LATENCY_VAR: &str = "EDUSPOT_STORE_LATENCY_MS";
pub const AUTH_LATENCY_VAR: &str = "EDUSPOT_AUTH_LATENCY_MS";
pub const SEED_VAR: &str = "EDUSPOT_SEED";
pub const LOG_FORMAT_VAR: &str = "EDUSPOT_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub store_latency: Duration,
    pub auth_latency: Duration,
    /// Start from seed records; when false only the seed accounts exist.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            store_latency: STORE_LATENCY,
            auth_latency: AUTH_LATENCY,
            seed: true,
            log_format: LogFormat::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            store_latency: read(&lookup, STORE_LATENCY_VAR, parse_millis)
                .unwrap_or(defaults.store_latency),
            auth_latency: read(&lookup, AUTH_LATENCY_VAR, parse_millis)
                .unwrap_or(defaults.auth_latency),
            seed: read(&lookup, SEED_VAR, parse_flag).unwrap_or(defaults.seed),
            log_format: read(&lookup, LOG_FORMAT_VAR, |v| LogFormat::from_str(v).ok())
                .unwrap_or(defaults.log_format),
        }
    }

    pub fn backend_latency(&self) -> BackendLatency {
        BackendLatency::fixed(self.store_latency, self.auth_latency)
    }

    pub fn build_backend(&self) -> DomainResult<Backend> {
        if self.seed {
            Backend::seeded(self.backend_latency())
        } else {
            Backend::accounts_only(self.backend_latency())
        }
    }
}

fn read<F, T>(lookup: &F, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "invalid configuration value; using default");
    }
    parsed
}

fn parse_millis(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
