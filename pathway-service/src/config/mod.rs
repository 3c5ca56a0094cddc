use crate::services::latency::MAX_SCALE;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default request body limit (100 KiB).
const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone)]
pub struct PathwayConfig {
    pub common: core_config::Config,
    pub latency: LatencyConfig,
    pub limits: LimitsConfig,
    pub client: ClientConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone)]
pub struct LatencyConfig {
    /// Whether generation responses are delayed at all.
    pub enabled: bool,
    /// Multiplier applied to every per-operation delay.
    pub scale: f64,
}

#[derive(Debug, Clone)]
pub struct LimitsConfig {
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Built client bundle to serve for unmatched GET paths.
    pub bundle_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    pub otlp_endpoint: Option<String>,
}

impl Default for PathwayConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            latency: LatencyConfig {
                enabled: true,
                scale: 1.0,
            },
            limits: LimitsConfig {
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            },
            client: ClientConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl PathwayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let scale: f64 = parse_env("PATHWAY_LATENCY_SCALE", 1.0)?;
        let scale = validate_scale(scale)?;

        Ok(PathwayConfig {
            common: common_config,
            latency: LatencyConfig {
                enabled: parse_env("PATHWAY_SIMULATED_LATENCY", true)?,
                scale,
            },
            limits: LimitsConfig {
                max_body_bytes: parse_env("PATHWAY_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            },
            client: ClientConfig {
                bundle_dir: optional_env("PATHWAY_CLIENT_DIR").map(PathBuf::from),
            },
            telemetry: TelemetryConfig {
                otlp_endpoint: optional_env("OTLP_ENDPOINT"),
            },
        })
    }
}

fn validate_scale(scale: f64) -> Result<f64, AppError> {
    if (0.0..=MAX_SCALE).contains(&scale) {
        Ok(scale)
    } else {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "PATHWAY_LATENCY_SCALE must be between 0 and {}, got {}",
            MAX_SCALE,
            scale
        )))
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}
