//! Process configuration from environment variables.
//!
//! Every value has a default; unparseable values are logged and ignored.

use std::net::SocketAddr;
use std::str::FromStr;

use careernav_projection::ProjectionSettings;
use careernav_projection::runner::{DEFAULT_MAX_SIMULATIONS, DEFAULT_MAX_YEARS};

pub const BIND_ADDR_VAR: &str = "CAREERNAV_BIND_ADDR";
pub const SIMULATIONS_VAR: &str = "CAREERNAV_SIMULATIONS";
pub const YEARS_VAR: &str = "CAREERNAV_YEARS";
pub const MAX_SIMULATIONS_VAR: &str = "CAREERNAV_MAX_SIMULATIONS";
pub const MAX_YEARS_VAR: &str = "CAREERNAV_MAX_YEARS";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Used when a request omits `simulation_count` / `year_count`.
    pub defaults: ProjectionSettings,
    pub max_simulations: usize,
    pub max_years: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            defaults: ProjectionSettings::default(),
            max_simulations: DEFAULT_MAX_SIMULATIONS,
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(addr) = parse_var(&lookup, BIND_ADDR_VAR) {
            cfg.bind_addr = addr;
        }
        if let Some(n) = parse_var::<usize>(&lookup, SIMULATIONS_VAR).filter(|n| *n > 0) {
            cfg.defaults.simulation_count = n;
        }
        if let Some(n) = parse_var::<u32>(&lookup, YEARS_VAR).filter(|n| *n > 0) {
            cfg.defaults.year_count = n;
        }
        if let Some(n) = parse_var::<usize>(&lookup, MAX_SIMULATIONS_VAR).filter(|n| *n > 0) {
            cfg.max_simulations = n;
        }
        if let Some(n) = parse_var::<u32>(&lookup, MAX_YEARS_VAR).filter(|n| *n > 0) {
            cfg.max_years = n;
        }

        if cfg.defaults.simulation_count > cfg.max_simulations {
            tracing::warn!(
                "{SIMULATIONS_VAR}={} exceeds {MAX_SIMULATIONS_VAR}={}; clamping",
                cfg.defaults.simulation_count,
                cfg.max_simulations
            );
            cfg.defaults.simulation_count = cfg.max_simulations;
        }
        if cfg.defaults.year_count > cfg.max_years {
            tracing::warn!(
                "{YEARS_VAR}={} exceeds {MAX_YEARS_VAR}={}; clamping",
                cfg.defaults.year_count,
                cfg.max_years
            );
            cfg.defaults.year_count = cfg.max_years;
        }

        cfg
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not valid; using default");
            None
        }
    }
}
