use dotenv::dotenv;
use leaderboard_core::ticker::DEFAULT_LOOP_SECONDS;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_DATA_PATH: &str = "data.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("TICKER_SECONDS must be a whole number of seconds, got {0:?}")]
    InvalidTickerSeconds(String),
    #[error("TICKER_SECONDS must be greater than zero")]
    ZeroTickerSeconds,
}

/// Runtime settings, read from the environment after `.env` and CLI
/// overrides have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub logo_root: PathBuf,
    pub ticker_seconds: u64,
    pub fuzzy_search: bool,
    pub debug: bool,
}

impl Settings {
    /// Reads the process environment after loading `.env`. Invalid values
    /// fall back to defaults; the returned errors say which, so they can be
    /// logged once logging is up.
    pub fn from_env() -> (Self, Vec<SettingsError>) {
        // Load environment variables from .env file
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<SettingsError>) {
        let mut fallbacks = Vec::new();

        let data_path =
            lookup("DATA_PATH").map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);
        let logo_root = lookup("LOGO_ROOT")
            .map_or_else(|| default_logo_root(&data_path), PathBuf::from);

        let ticker_seconds = lookup("TICKER_SECONDS").map_or(DEFAULT_LOOP_SECONDS, |raw| {
            parse_ticker_seconds(&raw).unwrap_or_else(|error| {
                fallbacks.push(error);
                DEFAULT_LOOP_SECONDS
            })
        });

        let flag = |name: &str| lookup(name).is_some_and(|value| is_enabled(&value));
        let settings = Self {
            data_path,
            logo_root,
            ticker_seconds,
            fuzzy_search: flag("FUZZY_SEARCH"),
            debug: flag("DEBUG"),
        };
        (settings, fallbacks)
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes")
}

/// Logos live next to the data file unless configured otherwise.
pub fn default_logo_root(data_path: &Path) -> PathBuf {
    data_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

pub fn parse_ticker_seconds(raw: &str) -> Result<u64, SettingsError> {
    let seconds: u64 = raw
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidTickerSeconds(raw.to_string()))?;
    if seconds == 0 {
        return Err(SettingsError::ZeroTickerSeconds);
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_seconds_must_be_positive_integers() {
        assert_eq!(parse_ticker_seconds(" 90 "), Ok(90));
        assert_eq!(parse_ticker_seconds("0"), Err(SettingsError::ZeroTickerSeconds));
        assert_eq!(
            parse_ticker_seconds("fast"),
            Err(SettingsError::InvalidTickerSeconds("fast".to_string()))
        );
    }

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn bad_ticker_seconds_are_reported_with_the_fallback() {
        let (settings, fallbacks) = Settings::from_lookup(lookup(&[("TICKER_SECONDS", "fast")]));

        assert_eq!(settings.ticker_seconds, DEFAULT_LOOP_SECONDS);
        assert_eq!(
            fallbacks,
            [SettingsError::InvalidTickerSeconds("fast".to_string())]
        );
    }

    #[test]
    fn valid_environment_needs_no_fallback() {
        let (settings, fallbacks) = Settings::from_lookup(lookup(&[
            ("DATA_PATH", "exports/data.json"),
            ("TICKER_SECONDS", "90"),
            ("DEBUG", "true"),
        ]));

        assert!(fallbacks.is_empty());
        assert_eq!(settings.ticker_seconds, 90);
        assert_eq!(settings.logo_root, PathBuf::from("exports"));
        assert!(settings.debug);
        assert!(!settings.fuzzy_search);
    }

    #[test]
    fn logo_root_defaults_to_data_directory() {
        assert_eq!(
            default_logo_root(Path::new("exports/data.json")),
            PathBuf::from("exports")
        );
        assert_eq!(default_logo_root(Path::new("data.json")), PathBuf::from("."));
    }
}
