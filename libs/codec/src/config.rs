//! # Codec Configuration
//!
//! Tunable limits and options for the label and domain codecs, with
//! environment overrides for deployment-specific tuning.
//!
//! | Field | Default | Environment |
//! |-------|---------|-------------|
//! | `strict_dots` | `false` | `IDNA_STRICT_DOTS` |
//! | `max_label_octets` | `63` | none |
//! | `max_domain_octets` | `253` | `IDNA_MAX_DOMAIN_OCTETS` |
//! | `check_ltr_bidi` | `false` | `IDNA_CHECK_LTR_BIDI` |
//! | `errors` | `strict` | `IDNA_ERRORS` |

use crate::error::{IdnaError, IdnaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// DNS limit on a single label, in octets
pub const MAX_LABEL_OCTETS: usize = 63;

/// DNS limit on a whole name in text form, excluding the trailing dot
pub const MAX_DOMAIN_OCTETS: usize = 253;

/// How transcoding errors are handled
///
/// Only `Strict` is implemented; the other modes are recognised so that
/// requesting them fails loudly instead of being silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    #[default]
    Strict,
    Ignore,
    Replace,
}

impl ErrorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorMode::Strict => "strict",
            ErrorMode::Ignore => "ignore",
            ErrorMode::Replace => "replace",
        }
    }

    /// Fail unless the mode is strict
    pub fn require_strict(self) -> IdnaResult<()> {
        match self {
            ErrorMode::Strict => Ok(()),
            other => Err(IdnaError::UnsupportedErrorMode {
                mode: other.as_str().to_string(),
            }),
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorMode {
    type Err = IdnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ErrorMode::Strict),
            "ignore" => Ok(ErrorMode::Ignore),
            "replace" => Ok(ErrorMode::Replace),
            other => Err(IdnaError::config(
                "errors",
                format!("unknown error handling \"{}\"", other),
            )),
        }
    }
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdnaConfig {
    /// Split domains on U+002E only instead of all four Unicode full stops
    pub strict_dots: bool,

    /// Longest accepted label in A-label form, capped at 63
    pub max_label_octets: usize,

    /// Longest accepted domain in A-label form, excluding the trailing dot
    pub max_domain_octets: usize,

    /// Apply the bidi rule to labels with no right-to-left code points
    pub check_ltr_bidi: bool,

    /// Error handling for the codec-style entry points
    pub errors: ErrorMode,
}

impl Default for IdnaConfig {
    fn default() -> Self {
        Self {
            strict_dots: false,
            max_label_octets: MAX_LABEL_OCTETS,
            max_domain_octets: MAX_DOMAIN_OCTETS,
            check_ltr_bidi: false,
            errors: ErrorMode::Strict,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl IdnaConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source
    ///
    /// Unparsable values are logged and ignored, leaving the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("IDNA_STRICT_DOTS") {
            match parse_bool(&val) {
                Some(flag) => config.strict_dots = flag,
                None => warn!("Ignoring IDNA_STRICT_DOTS={:?}: expected a boolean", val),
            }
        }

        if let Some(val) = lookup("IDNA_MAX_DOMAIN_OCTETS") {
            match val.trim().parse() {
                Ok(octets) => config.max_domain_octets = octets,
                Err(_) => warn!("Ignoring IDNA_MAX_DOMAIN_OCTETS={:?}: expected an integer", val),
            }
        }

        if let Some(val) = lookup("IDNA_CHECK_LTR_BIDI") {
            match parse_bool(&val) {
                Some(flag) => config.check_ltr_bidi = flag,
                None => warn!("Ignoring IDNA_CHECK_LTR_BIDI={:?}: expected a boolean", val),
            }
        }

        if let Some(val) = lookup("IDNA_ERRORS") {
            match val.parse() {
                Ok(mode) => config.errors = mode,
                Err(e) => warn!("Ignoring IDNA_ERRORS={:?}: {}", val, e),
            }
        }

        config
    }

    /// Check limits and options before building codecs from this configuration
    pub fn validate(&self) -> IdnaResult<()> {
        if self.max_label_octets == 0 || self.max_label_octets > MAX_LABEL_OCTETS {
            return Err(IdnaError::config(
                "max_label_octets",
                format!(
                    "{} is outside 1..={}",
                    self.max_label_octets, MAX_LABEL_OCTETS
                ),
            ));
        }
        if self.max_domain_octets == 0 {
            return Err(IdnaError::config(
                "max_domain_octets",
                "must be greater than zero",
            ));
        }
        self.errors.require_strict()
    }

    /// Label limit actually enforced
    pub(crate) fn label_limit(&self) -> usize {
        self.max_label_octets.min(MAX_LABEL_OCTETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = IdnaConfig::default();
        assert!(!config.strict_dots);
        assert_eq!(config.max_label_octets, 63);
        assert_eq!(config.max_domain_octets, 253);
        assert!(!config.check_ltr_bidi);
        assert_eq!(config.errors, ErrorMode::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = IdnaConfig::from_lookup(lookup_from(&[
            ("IDNA_STRICT_DOTS", "true"),
            ("IDNA_MAX_DOMAIN_OCTETS", "100"),
            ("IDNA_CHECK_LTR_BIDI", "1"),
            ("IDNA_ERRORS", "Replace"),
        ]));
        assert!(config.strict_dots);
        assert_eq!(config.max_domain_octets, 100);
        assert!(config.check_ltr_bidi);
        assert_eq!(config.errors, ErrorMode::Replace);
    }

    #[test]
    fn test_unparsable_overrides_are_ignored() {
        let config = IdnaConfig::from_lookup(lookup_from(&[
            ("IDNA_STRICT_DOTS", "maybe"),
            ("IDNA_MAX_DOMAIN_OCTETS", "-4"),
            ("IDNA_ERRORS", "surrogateescape"),
        ]));
        assert_eq!(config, IdnaConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = IdnaConfig {
            max_label_octets: 64,
            ..IdnaConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Configuration);

        let config = IdnaConfig {
            max_domain_octets: 0,
            ..IdnaConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Configuration);

        let config = IdnaConfig {
            errors: ErrorMode::Ignore,
            ..IdnaConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(IdnaError::UnsupportedErrorMode {
                mode: "ignore".to_string()
            })
        );
    }

    #[test]
    fn test_error_mode_parsing() {
        assert_eq!("strict".parse::<ErrorMode>().unwrap(), ErrorMode::Strict);
        assert_eq!(" IGNORE ".parse::<ErrorMode>().unwrap(), ErrorMode::Ignore);
        assert_eq!(
            "xmlcharrefreplace".parse::<ErrorMode>().unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_eq!(ErrorMode::Replace.to_string(), "replace");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: IdnaConfig =
            serde_json::from_str(r#"{"strict_dots": true, "errors": "strict"}"#).unwrap();
        assert!(config.strict_dots);
        assert_eq!(config.max_domain_octets, MAX_DOMAIN_OCTETS);

        let round_trip: IdnaConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}
