//! Runtime Configuration
//!
//! Settings resolve in three layers: built-in defaults, then environment
//! variables, then command-line flags.
//!
//! | Setting | Env var | Flag | Default |
//! |---|---|---|---|
//! | HTTP bind address | `ADDRESSBOOK_BIND` | `--bind <addr:port>` | `127.0.0.1:8080` |
//! | Log level | `ADDRESSBOOK_LOG` | `--log-level <level>` | `info` |

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use tracing::Level;

pub const ENV_BIND: &str = "ADDRESSBOOK_BIND";
pub const ENV_LOG: &str = "ADDRESSBOOK_LOG";

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

pub const USAGE: &str = "Usage: addressbook [--bind <addr:port>] [--log-level <level>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Reads the process environment and arguments.
    pub fn load() -> Result<Self> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Resolves a config from explicit sources.
    ///
    /// `args` excludes the program name. `env` looks up a variable by name.
    pub fn from_sources<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bind) = env(ENV_BIND) {
            config.bind_addr = parse_bind(&bind)?;
        }
        if let Some(level) = env(ENV_LOG) {
            config.log_level = parse_level(&level)?;
        }

        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--bind" => {
                    let value = args.next().context("--bind requires a value")?;
                    config.bind_addr = parse_bind(&value)?;
                }
                "--log-level" => {
                    let value = args.next().context("--log-level requires a value")?;
                    config.log_level = parse_level(&value)?;
                }
                other => bail!("unknown argument: {}", other),
            }
        }

        Ok(config)
    }
}

fn parse_bind(value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .with_context(|| format!("invalid bind address: {}", value))
}

fn parse_level(value: &str) -> Result<Level> {
    value
        .parse()
        .with_context(|| format!("invalid log level: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(Vec::new(), no_env).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = HashMap::from([(ENV_BIND, "0.0.0.0:9000"), (ENV_LOG, "debug")]);

        let config =
            Config::from_sources(Vec::new(), |k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_flags_override_env() {
        let env = HashMap::from([(ENV_BIND, "0.0.0.0:9000")]);

        let config = Config::from_sources(
            args(&["--bind", "127.0.0.1:5000", "--log-level", "WARN"]),
            |k| env.get(k).map(|v| v.to_string()),
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_missing_flag_value_is_error() {
        let err = Config::from_sources(args(&["--bind"]), no_env).unwrap_err();
        assert!(err.to_string().contains("--bind requires a value"));
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(Config::from_sources(args(&["--seed", "x"]), no_env).is_err());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_sources(args(&["--bind", "nowhere"]), no_env).is_err());
        assert!(Config::from_sources(args(&["--log-level", "loud"]), no_env).is_err());
    }
}
