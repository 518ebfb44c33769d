//! Runtime configuration.
//!
//! Values come from defaults, then a `.env` file, then the process
//! environment, then command-line flags (highest precedence).
//!
//! | Variable            | Meaning                                  | Default   |
//! |---------------------|------------------------------------------|-----------|
//! | `ROSTER_STORE`      | Directory holding `roster.yaml`          | `.roster` |
//! | `ROSTER_LOCALE`     | Weekday label language (`en`, `ar`)      | `en`      |
//! | `ROSTER_UTC_OFFSET` | Reference zone for "today", whole hours  | `0`       |
//! | `ROSTER_NOW`        | Pin the clock to an RFC 3339 instant     | unset     |

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::roster::Locale;

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Directory holding the persisted roster.
    pub store_root: PathBuf,
    /// Language for weekday labels in output.
    pub locale: Locale,
    /// Zone used to turn the clock's instant into today's date.
    pub utc_offset: FixedOffset,
    /// When set, the clock always reports this instant.
    pub pinned_now: Option<DateTime<Utc>>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(".roster"),
            locale: Locale::English,
            utc_offset: Utc.fix(),
            pinned_now: None,
        }
    }
}

impl RosterConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first malformed variable.
    pub fn from_env() -> Result<Self, String> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(format!("Failed to load .env: {err}"));
            }
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first malformed variable.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        // A blank value, as left by `KEY=` in `.env`, counts as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(root) = var("ROSTER_STORE") {
            config.store_root = PathBuf::from(root);
        }
        if let Some(locale) = var("ROSTER_LOCALE") {
            config.locale = locale.parse().map_err(|e| format!("ROSTER_LOCALE: {e}"))?;
        }
        if let Some(offset) = var("ROSTER_UTC_OFFSET") {
            config.utc_offset = parse_utc_offset(&offset)?;
        }
        if let Some(now) = var("ROSTER_NOW") {
            let pinned = DateTime::parse_from_rfc3339(now.trim())
                .map_err(|e| format!("ROSTER_NOW: {e}"))?
                .with_timezone(&Utc);
            config.pinned_now = Some(pinned);
        }
        Ok(config)
    }

    /// Applies command-line flags on top of the loaded values.
    #[must_use]
    pub fn with_flags(mut self, store: Option<PathBuf>, locale: Option<Locale>) -> Self {
        if let Some(store) = store {
            self.store_root = store;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}

/// Parses a whole-hour offset such as `+3`, `-5` or `0`.
///
/// # Errors
///
/// Returns an error string for non-numeric input or an offset outside
/// `-12..=14`.
pub fn parse_utc_offset(input: &str) -> Result<FixedOffset, String> {
    let hours: i32 = input
        .trim()
        .trim_start_matches('+')
        .parse()
        .map_err(|_| format!("ROSTER_UTC_OFFSET: expected whole hours, got '{input}'"))?;
    if !(-12..=14).contains(&hours) {
        return Err(format!("ROSTER_UTC_OFFSET: {hours} is outside -12..=14"));
    }
    FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| format!("ROSTER_UTC_OFFSET: {hours} is not a valid offset"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<RosterConfig, String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        RosterConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.store_root, PathBuf::from(".roster"));
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("ROSTER_STORE", "/var/lib/roster"),
            ("ROSTER_LOCALE", "ar"),
            ("ROSTER_UTC_OFFSET", "+3"),
            ("ROSTER_NOW", "2024-03-10T08:00:00Z"),
        ])
        .unwrap();

        assert_eq!(config.store_root, PathBuf::from("/var/lib/roster"));
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.utc_offset.local_minus_utc(), 3 * 3600);
        assert_eq!(config.pinned_now.unwrap().to_rfc3339(), "2024-03-10T08:00:00+00:00");
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("ROSTER_LOCALE", "klingon")]).unwrap_err().contains("ROSTER_LOCALE"));
        assert!(config_from(&[("ROSTER_UTC_OFFSET", "3.5")]).is_err());
        assert!(config_from(&[("ROSTER_UTC_OFFSET", "+15")]).is_err());
        assert!(config_from(&[("ROSTER_NOW", "noon")]).unwrap_err().contains("ROSTER_NOW"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("ROSTER_STORE", ""),
            ("ROSTER_LOCALE", ""),
            ("ROSTER_UTC_OFFSET", "  "),
            ("ROSTER_NOW", ""),
        ])
        .unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn flags_override_environment() {
        let config = config_from(&[("ROSTER_STORE", "/env/store")])
            .unwrap()
            .with_flags(Some(PathBuf::from("/flag/store")), Some(Locale::Arabic));
        assert_eq!(config.store_root, PathBuf::from("/flag/store"));
        assert_eq!(config.locale, Locale::Arabic);

        let untouched = RosterConfig::default().with_flags(None, None);
        assert_eq!(untouched, RosterConfig::default());
    }

    #[test]
    fn parses_negative_offsets() {
        assert_eq!(parse_utc_offset("-5").unwrap().local_minus_utc(), -5 * 3600);
        assert_eq!(parse_utc_offset(" 0 ").unwrap().local_minus_utc(), 0);
    }
}
