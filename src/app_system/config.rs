use std::{env, fmt::Display, str::FromStr};

use tracing::info;

use crate::error::ConfigError;
use crate::resolver::{ResolverSettings, DEFAULT_LISTING_LIMIT, DEFAULT_PLACEHOLDER_PRICE};

pub const DEFAULT_API_URL: &str = "http://localhost:3004";

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub api_url: String,
    pub listing_limit: usize,
    pub placeholder_price: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            listing_limit: DEFAULT_LISTING_LIMIT,
            placeholder_price: DEFAULT_PLACEHOLDER_PRICE,
        }
    }
}

impl ResolverConfig {
    /// Loads `PRINTALMA_API_URL`, `PRINTALMA_LISTING_LIMIT` and
    /// `PRINTALMA_PLACEHOLDER_PRICE`, falling back to defaults when unset.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let listing_limit = try_load(&lookup, "PRINTALMA_LISTING_LIMIT", defaults.listing_limit)?;
        if listing_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "PRINTALMA_LISTING_LIMIT",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            api_url: try_load(&lookup, "PRINTALMA_API_URL", defaults.api_url)?,
            listing_limit,
            placeholder_price: try_load(&lookup, "PRINTALMA_PLACEHOLDER_PRICE", defaults.placeholder_price)?,
        })
    }

    pub fn settings(&self) -> ResolverSettings {
        ResolverSettings {
            listing_limit: self.listing_limit,
            placeholder_price: self.placeholder_price,
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}
