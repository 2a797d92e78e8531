//! Server configuration from the environment.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::directions::DirectionsConfig;
use crate::geocode::NominatimConfig;
use crate::pipeline::PipelineConfig;
use crate::safety::{OverpassConfig, ScoreSeed};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// A variable was set but could not be parsed.
#[derive(Debug, Error)]
#[error("invalid {name}={value:?}: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the binary needs to wire up the providers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// OpenRouteService key (`ORS_API_KEY`)
    pub ors_api_key: String,

    /// Provider base URL overrides; `None` means the public service
    pub nominatim_url: Option<String>,
    pub ors_url: Option<String>,
    pub overpass_url: Option<String>,

    pub nominatim_user_agent: Option<String>,

    pub safety_radius_m: u32,
    pub call_timeout: Duration,
    pub score_seed: ScoreSeed,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let pipeline = PipelineConfig::default();

        let ors_api_key = get("ORS_API_KEY").unwrap_or_else(|| {
            warn!("ORS_API_KEY not set, directions requests will be rejected");
            String::new()
        });

        let bind_addr = match get("BIND_ADDR") {
            Some(v) => parse("BIND_ADDR", v)?,
            None => parse("BIND_ADDR", DEFAULT_BIND_ADDR.to_string())?,
        };

        let safety_radius_m = match get("SAFETY_RADIUS_M") {
            Some(v) => parse("SAFETY_RADIUS_M", v)?,
            None => pipeline.safety_radius_m,
        };

        let call_timeout = match get("CALL_TIMEOUT_SECS") {
            Some(v) => {
                let secs: u64 = parse("CALL_TIMEOUT_SECS", v.clone())?;
                if secs == 0 {
                    return Err(ConfigError {
                        name: "CALL_TIMEOUT_SECS",
                        value: v,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => pipeline.call_timeout,
        };

        let score_seed = match get("SCORE_SEED") {
            Some(v) => ScoreSeed::Fixed(parse("SCORE_SEED", v)?),
            None => ScoreSeed::Entropy,
        };

        Ok(Self {
            bind_addr,
            ors_api_key,
            nominatim_url: get("NOMINATIM_URL"),
            ors_url: get("ORS_URL"),
            overpass_url: get("OVERPASS_URL"),
            nominatim_user_agent: get("NOMINATIM_USER_AGENT"),
            safety_radius_m,
            call_timeout,
            score_seed,
        })
    }

    pub fn nominatim(&self) -> NominatimConfig {
        let mut config = NominatimConfig::new().with_timeout(self.call_timeout);
        if let Some(url) = &self.nominatim_url {
            config = config.with_base_url(url);
        }
        if let Some(agent) = &self.nominatim_user_agent {
            config = config.with_user_agent(agent);
        }
        config
    }

    pub fn directions(&self) -> DirectionsConfig {
        let config = DirectionsConfig::new(&self.ors_api_key).with_timeout(self.call_timeout);
        match &self.ors_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    pub fn overpass(&self) -> OverpassConfig {
        let config = OverpassConfig::new().with_timeout(self.call_timeout);
        match &self.overpass_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_safety_radius(self.safety_radius_m)
            .with_call_timeout(self.call_timeout)
    }
}

fn parse<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError {
        name,
        reason: e.to_string(),
        value,
    })
}
