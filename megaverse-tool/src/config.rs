use std::path::PathBuf;
use std::time::Duration;

use megaverse_core::{RetryPolicy, DEFAULT_BASE_URL};
use serde::Deserialize;

use crate::error::ToolError;

pub const DEFAULT_CANDIDATE_ID: &str = "d0cd286e-7ab6-40e6-84a3-b8e7805a86df";
const CANDIDATE_ID_ENV: &str = "MEGAVERSE_CANDIDATE_ID";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub candidate_id: Option<String>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub retry: RetryConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
}

/// Values given on the command line; `None` falls through to env and file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub candidate_id: Option<String>,
    pub base_url: Option<String>,
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
}

/// Fully resolved run settings.
#[derive(Debug)]
pub struct Settings {
    pub candidate_id: String,
    pub base_url: String,
    pub policy: RetryPolicy,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("megaverse").join("config.toml"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

pub fn candidate_id_from_env() -> Option<String> {
    std::env::var(CANDIDATE_ID_ENV).ok().filter(|id| !id.is_empty())
}

/// Resolves each setting from CLI, then env, then config file, then default.
pub fn resolve_settings(
    overrides: Overrides,
    env_candidate_id: Option<String>,
    config: Config,
) -> Result<Settings, ToolError> {
    let candidate_id = overrides
        .candidate_id
        .or(env_candidate_id)
        .or(config.candidate_id)
        .unwrap_or_else(|| DEFAULT_CANDIDATE_ID.to_string());

    let candidate_id = candidate_id.trim().to_string();
    if candidate_id.is_empty() {
        return Err(ToolError::CandidateIdMissing);
    }

    let base_url = overrides
        .base_url
        .or(config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut policy = RetryPolicy::default();
    if let Some(max_attempts) = overrides.max_attempts.or(config.retry.max_attempts) {
        policy = policy.with_max_attempts(max_attempts);
    }
    if let Some(delay_ms) = overrides.base_delay_ms.or(config.retry.base_delay_ms) {
        policy = policy.with_base_delay(Duration::from_millis(delay_ms));
    }

    Ok(Settings {
        candidate_id,
        base_url,
        policy,
    })
}
