//! Application configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::{Optimise, SearchConfig, UnknownOptimise};

/// Address the server binds to when `JOURNEY_PLANNER_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

const ADDR_VAR: &str = "JOURNEY_PLANNER_ADDR";

/// Errors in environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but can't be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// Optimisation name not recognised
    #[error(transparent)]
    Optimise(#[from] UnknownOptimise),
}

/// Configuration for the journey planner binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to serve HTTP on, checked by [`AppConfig::bind_addr`]
    pub addr: String,

    /// JSON network description to load instead of the sample network
    pub network_path: Option<PathBuf>,

    /// Result presentation settings
    pub search: SearchConfig,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// - `JOURNEY_PLANNER_ADDR`: bind address (default `127.0.0.1:3000`)
    /// - `JOURNEY_PLANNER_NETWORK`: path to a JSON network description
    /// - `JOURNEY_PLANNER_MAX_RESULTS`: routes to show per query (default 10)
    /// - `JOURNEY_PLANNER_OPTIMISE`: `duration` (default) or `changes`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let network_path = lookup("JOURNEY_PLANNER_NETWORK")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let mut search = SearchConfig::default();

        let max_var = "JOURNEY_PLANNER_MAX_RESULTS";
        if let Some(value) = lookup(max_var) {
            search.max_results = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { var: max_var, value }),
            };
        }

        if let Some(value) = lookup("JOURNEY_PLANNER_OPTIMISE") {
            search.optimise = value.parse::<Optimise>()?;
        }

        Ok(Self {
            addr,
            network_path,
            search,
        })
    }

    /// Parse the HTTP bind address.
    ///
    /// [`AppConfig::from_lookup`] does not validate the address; only
    /// `serve` calls this.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr.parse().map_err(|_| ConfigError::Invalid {
            var: ADDR_VAR,
            value: self.addr.clone(),
        })
    }
}
