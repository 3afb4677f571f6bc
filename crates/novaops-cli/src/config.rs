//! Runtime configuration read from the environment.

use std::path::PathBuf;

use novaops_analysis::DEFAULT_EMBEDDING_DIM;
use novaops_tools::DEFAULT_MODEL_ID;
use thiserror::Error;

pub const AWS_REGION_ENV: &str = "AWS_REGION";
pub const MODEL_ID_ENV: &str = "BEDROCK_MODEL_ID";
pub const LITE_MODEL_ID_ENV: &str = "BEDROCK_LITE_MODEL_ID";
pub const DEMO_MODE_ENV: &str = "DEMO_MODE";
pub const MAX_AGENT_TURNS_ENV: &str = "NOVAOPS_MAX_AGENT_TURNS";
pub const AGENT_TIMEOUT_ENV: &str = "NOVAOPS_AGENT_TIMEOUT";
pub const EMBEDDING_DIM_ENV: &str = "NOVAOPS_EMBEDDING_DIM";
pub const STATE_DIR_ENV: &str = "NOVAOPS_STATE_DIR";

/// Errors from reading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// NovaOps settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub aws_region: String,
    pub model_id: String,
    /// Cheaper model for lightweight sub-agents.
    pub lite_model_id: String,
    /// Mock tools only; no cloud calls.
    pub demo_mode: bool,
    pub max_agent_turns: u32,
    /// Seconds.
    pub agent_timeout: u64,
    pub embedding_dim: usize,
    /// Where REPL history lives.
    pub state_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws_region: "us-east-1".to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            lite_model_id: "us.amazon.nova-lite-v1:0".to_string(),
            demo_mode: true,
            max_agent_turns: 10,
            agent_timeout: 120,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            state_dir: default_state_dir(),
        }
    }
}

/// `~/.novaops`, or `.novaops` when there is no home directory.
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".novaops"))
        .unwrap_or_else(|| PathBuf::from(".novaops"))
}

impl Config {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            aws_region: get(AWS_REGION_ENV).unwrap_or(defaults.aws_region),
            model_id: get(MODEL_ID_ENV).unwrap_or(defaults.model_id),
            lite_model_id: get(LITE_MODEL_ID_ENV).unwrap_or(defaults.lite_model_id),
            demo_mode: match get(DEMO_MODE_ENV) {
                Some(v) => parse_bool(DEMO_MODE_ENV, &v)?,
                None => defaults.demo_mode,
            },
            max_agent_turns: parse_or(MAX_AGENT_TURNS_ENV, get(MAX_AGENT_TURNS_ENV), defaults.max_agent_turns)?,
            agent_timeout: parse_or(AGENT_TIMEOUT_ENV, get(AGENT_TIMEOUT_ENV), defaults.agent_timeout)?,
            embedding_dim: parse_or(EMBEDDING_DIM_ENV, get(EMBEDDING_DIM_ENV), defaults.embedding_dim)?,
            state_dir: get(STATE_DIR_ENV).map(PathBuf::from).unwrap_or(defaults.state_dir),
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(v) => {
            let parsed = v.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value: v,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.model_id, "us.amazon.nova-pro-v1:0");
        assert_eq!(config.lite_model_id, "us.amazon.nova-lite-v1:0");
        assert!(config.demo_mode);
        assert_eq!(config.max_agent_turns, 10);
        assert_eq!(config.agent_timeout, 120);
        assert_eq!(config.embedding_dim, 256);
        assert!(config.state_dir.ends_with(".novaops"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (AWS_REGION_ENV, "eu-west-1"),
            (DEMO_MODE_ENV, "false"),
            (EMBEDDING_DIM_ENV, "64"),
            (STATE_DIR_ENV, "/tmp/novaops"),
        ]))
        .unwrap();

        assert_eq!(config.aws_region, "eu-west-1");
        assert!(!config.demo_mode);
        assert_eq!(config.embedding_dim, 64);
        assert_eq!(config.state_dir, PathBuf::from("/tmp/novaops"));
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[(MODEL_ID_ENV, "  ")])).unwrap();
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup(&[(MAX_AGENT_TURNS_ENV, "many")])).unwrap_err();
        let ConfigError::Invalid { key, value, .. } = &err;

        assert_eq!(*key, MAX_AGENT_TURNS_ENV);
        assert_eq!(value, "many");
        assert!(err.to_string().starts_with("invalid value 'many' for NOVAOPS_MAX_AGENT_TURNS"));
    }

    #[test]
    fn test_agent_limits_overrides_and_errors() {
        let config = Config::from_lookup(lookup(&[
            (LITE_MODEL_ID_ENV, "custom-lite"),
            (MAX_AGENT_TURNS_ENV, "4"),
            (AGENT_TIMEOUT_ENV, " 30 "),
        ]))
        .unwrap();
        assert_eq!(config.lite_model_id, "custom-lite");
        assert_eq!(config.max_agent_turns, 4);
        assert_eq!(config.agent_timeout, 30);

        let err = Config::from_lookup(lookup(&[(AGENT_TIMEOUT_ENV, "-5")])).unwrap_err();
        let ConfigError::Invalid { key, .. } = &err;
        assert_eq!(*key, AGENT_TIMEOUT_ENV);
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup(&[(DEMO_MODE_ENV, "maybe")])).unwrap_err();
        assert!(err.to_string().contains("expected true or false"));
    }
}
