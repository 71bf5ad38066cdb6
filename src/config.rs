//! Runtime configuration read from the environment.

use crate::{
    constants,
    error::{Error, Result},
};
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when the api key variable is unset; only synthesis needs it.
    pub api_key: Option<String>,
    pub proxy_list: Vec<String>,
    pub ip_echo_url: String,
    pub api_base_url: String,
    pub timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            proxy_list: constants::PROXY_LIST.iter().map(|x| x.to_string()).collect(),
            ip_echo_url: constants::IP_ECHO_URL.to_owned(),
            api_base_url: constants::API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(constants::REQUEST_TIMEOUT_SECS),
            output_path: PathBuf::from(constants::OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!("no .env loaded: {}", err);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, unset or empty values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get(constants::API_KEY_ENV);
        if let Some(list) = get(constants::PROXY_LIST_ENV) {
            config.proxy_list = list
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_owned)
                .collect();
        }
        if let Some(url) = get(constants::IP_ECHO_URL_ENV) {
            config.ip_echo_url = url;
        }
        if let Some(url) = get(constants::API_BASE_URL_ENV) {
            config.api_base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(secs) = get(constants::REQUEST_TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    constants::REQUEST_TIMEOUT_ENV,
                    secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = get(constants::OUTPUT_PATH_ENV) {
            config.output_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// The api key, or [Error::Config] when it is missing.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!("{} is not set", constants::API_KEY_ENV))
        })
    }
}
