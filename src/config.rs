//! Runtime configuration from environment variables (and `.env`).

use crate::error::{Result, SubnetError};
use crate::processing::{prefix_from_int, DEFAULT_MAX_SUBNETS, DEFAULT_PREFIX};
use std::path::Path;

pub const ENV_DEFAULT_PREFIX: &str = "SUBNET_CALC_DEFAULT_PREFIX";
pub const ENV_MAX_SUBNETS: &str = "SUBNET_CALC_MAX_SUBNETS";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for a bare address with no `/len` and no `--cidr`.
    pub default_prefix: u8,
    /// Upper bound on subnets produced by one split.
    pub max_subnets: u64,
    /// log4rs YAML file set through the environment. When unset,
    /// [`DEFAULT_LOG_CONFIG`] is used if it exists.
    pub log_config: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_prefix: DEFAULT_PREFIX,
            max_subnets: DEFAULT_MAX_SUBNETS,
            log_config: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_DEFAULT_PREFIX) {
            let len: i64 = value
                .trim()
                .parse()
                .map_err(|_| SubnetError::Config(format!("{ENV_DEFAULT_PREFIX}={value} is not a number")))?;
            config.default_prefix = prefix_from_int(len)
                .map_err(|e| SubnetError::Config(format!("{ENV_DEFAULT_PREFIX}: {e}")))?;
        }

        if let Some(value) = lookup(ENV_MAX_SUBNETS) {
            let max: u64 = value
                .trim()
                .parse()
                .map_err(|_| SubnetError::Config(format!("{ENV_MAX_SUBNETS}={value} is not a number")))?;
            if max == 0 {
                return Err(SubnetError::Config(format!("{ENV_MAX_SUBNETS} must be at least 1")));
            }
            config.max_subnets = max;
        }

        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = Some(value);
        }

        Ok(config)
    }

    /// The log4rs file to load, if any.
    ///
    /// An explicitly configured path is always returned so a bad path gets
    /// reported. The default path is only returned when the file exists.
    pub fn log_config_path(&self) -> Option<&Path> {
        match &self.log_config {
            Some(path) => Some(Path::new(path)),
            None => {
                let default = Path::new(DEFAULT_LOG_CONFIG);
                default.exists().then_some(default)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_prefix, 32);
        assert_eq!(config.max_subnets, 65536);
        assert_eq!(config.log_config, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_PREFIX, "24"),
            (ENV_MAX_SUBNETS, " 1024 "),
            (ENV_LOG_CONFIG, "/etc/subnet-calc/log4rs.yml"),
        ]))
        .unwrap();
        assert_eq!(config.default_prefix, 24);
        assert_eq!(config.max_subnets, 1024);
        assert_eq!(
            config.log_config.as_deref(),
            Some("/etc/subnet-calc/log4rs.yml")
        );
        assert_eq!(
            config.log_config_path(),
            Some(Path::new("/etc/subnet-calc/log4rs.yml"))
        );
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_DEFAULT_PREFIX, "abc")])),
            Err(SubnetError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_DEFAULT_PREFIX, "40")])),
            Err(SubnetError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_MAX_SUBNETS, "0")])),
            Err(SubnetError::Config(_))
        ));
    }

    #[test]
    fn test_default_log_config_only_when_present() {
        let config = Config::default();
        let expected = Path::new(DEFAULT_LOG_CONFIG)
            .exists()
            .then(|| Path::new(DEFAULT_LOG_CONFIG));
        assert_eq!(config.log_config_path(), expected);

        let missing = Config {
            log_config: Some("does/not/exist.yml".to_string()),
            ..Config::default()
        };
        assert_eq!(
            missing.log_config_path(),
            Some(Path::new("does/not/exist.yml"))
        );
    }
}
