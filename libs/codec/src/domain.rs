//! # Domain Processing
//!
//! ## Purpose
//!
//! Splits a domain into labels, transcodes each one with [`LabelCodec`]
//! and joins the results, preserving a trailing dot and enforcing the
//! whole-name length limit.
//!
//! ## Architecture Role
//!
//! ```text
//! "bücher.example."  → split → ["bücher", "example"] + trailing dot
//!                    → alabel each → "xn--bcher-kva.example" (≤ 253 octets)
//!                    → re-append dot → "xn--bcher-kva.example."
//! ```
//!
//! The first failing label fails the whole call; there is no partial
//! output.

use crate::config::IdnaConfig;
use crate::error::{IdnaError, IdnaResult};
use crate::labels::{ascii_text, LabelCodec};
use idna_tables::{CodepointLookup, IdnaTables};
use std::sync::Arc;
use tracing::debug;

/// Label separators accepted in lenient mode: FULL STOP, IDEOGRAPHIC FULL
/// STOP, FULLWIDTH FULL STOP, HALFWIDTH IDEOGRAPHIC FULL STOP
pub const LENIENT_DOTS: [char; 4] = ['\u{002E}', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Separator accepted in strict mode
pub const STRICT_DOTS: [char; 1] = ['\u{002E}'];

/// Separators for the given mode
pub fn separators(strict: bool) -> &'static [char] {
    if strict {
        &STRICT_DOTS
    } else {
        &LENIENT_DOTS
    }
}

/// Split a domain into labels, dropping a final empty label
///
/// Returns the labels and whether the domain ended with a separator.
pub fn split_labels<'a>(domain: &'a str, separators: &[char]) -> (Vec<&'a str>, bool) {
    let mut labels: Vec<&str> = domain.split(separators).collect();
    let trailing_dot = labels.last().is_some_and(|label| label.is_empty());
    if trailing_dot {
        labels.pop();
    }
    (labels, trailing_dot)
}

/// Length of labels joined with single-octet dots
fn joined_length<S: AsRef<str>>(labels: &[S]) -> usize {
    let octets: usize = labels.iter().map(|label| label.as_ref().len()).sum();
    octets + labels.len().saturating_sub(1)
}

/// Domain-level encoder and decoder
#[derive(Debug, Clone)]
pub struct DomainCodec {
    labels: LabelCodec,
    max_domain_octets: usize,
}

impl DomainCodec {
    /// Codec over the given tables with default limits
    pub fn new(tables: Arc<dyn CodepointLookup>) -> Self {
        Self::with_config(tables, &IdnaConfig::default())
    }

    pub fn with_config(tables: Arc<dyn CodepointLookup>, config: &IdnaConfig) -> Self {
        Self {
            labels: LabelCodec::with_config(tables, config),
            max_domain_octets: config.max_domain_octets,
        }
    }

    /// Validate the configuration and build a codec over the shared tables
    pub fn from_config(config: &IdnaConfig) -> IdnaResult<Self> {
        config.validate()?;
        Ok(Self::with_config(IdnaTables::shared(), config))
    }

    pub fn labels(&self) -> &LabelCodec {
        &self.labels
    }

    pub fn max_domain_octets(&self) -> usize {
        self.max_domain_octets
    }

    /// Fail if an A-label form domain of `length` octets, trailing dot
    /// excluded, is over the limit
    pub fn check_domain_length(&self, length: usize) -> IdnaResult<()> {
        if length > self.max_domain_octets {
            return Err(IdnaError::DomainTooLong {
                length,
                max: self.max_domain_octets,
            });
        }
        Ok(())
    }

    /// Encode a domain to its A-label form
    pub fn encode(&self, domain: &str, strict: bool) -> IdnaResult<Vec<u8>> {
        let (labels, trailing_dot) = split_labels(domain, separators(strict));
        if labels.is_empty() {
            return Err(IdnaError::EmptyDomain);
        }

        let mut output = Vec::with_capacity(domain.len() + 8);
        for (index, label) in labels.iter().enumerate() {
            if index > 0 {
                output.push(b'.');
            }
            output.extend(self.labels.alabel(label)?);
        }
        self.check_domain_length(output.len())?;

        if trailing_dot {
            output.push(b'.');
        }
        debug!(
            "Encoded domain with {} labels to {} octets",
            labels.len(),
            output.len()
        );
        Ok(output)
    }

    /// Decode a domain given as text
    pub fn decode(&self, domain: &str, strict: bool) -> IdnaResult<String> {
        let (labels, trailing_dot) = split_labels(domain, separators(strict));
        self.decode_labels(&labels, trailing_dot)
    }

    /// Decode a domain given as ASCII bytes, split on `.` only
    pub fn decode_bytes(&self, domain: &[u8]) -> IdnaResult<String> {
        let text = ascii_text(domain, 0)?;
        let (labels, trailing_dot) = split_labels(&text, &STRICT_DOTS);
        self.decode_labels(&labels, trailing_dot)
    }

    fn decode_labels(&self, labels: &[&str], trailing_dot: bool) -> IdnaResult<String> {
        if labels.is_empty() {
            return Err(IdnaError::EmptyDomain);
        }
        if labels.iter().all(|label| label.is_ascii()) {
            self.check_domain_length(joined_length(labels))?;
        }

        let mut output = String::new();
        for (index, label) in labels.iter().enumerate() {
            if index > 0 {
                output.push('.');
            }
            output.push_str(&self.labels.ulabel(label)?);
        }

        if trailing_dot {
            output.push('.');
        }
        debug!("Decoded domain with {} labels", labels.len());
        Ok(output)
    }
}

impl Default for DomainCodec {
    fn default() -> Self {
        Self::new(IdnaTables::shared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_split_labels() {
        assert_eq!(split_labels("a.b", separators(true)), (vec!["a", "b"], false));
        assert_eq!(split_labels("a.b.", separators(true)), (vec!["a", "b"], true));
        assert_eq!(split_labels("", separators(true)), (vec![], true));
        assert_eq!(split_labels(".", separators(true)), (vec![""], true));
        assert_eq!(
            split_labels("a\u{3002}b\u{FF0E}c\u{FF61}", separators(false)),
            (vec!["a", "b", "c"], true)
        );
        assert_eq!(
            split_labels("a\u{3002}b", separators(true)),
            (vec!["a\u{3002}b"], false)
        );
    }

    #[test]
    fn test_encode_mixed_domain() {
        let codec = DomainCodec::default();
        assert_eq!(
            codec.encode("\u{30C6}\u{30B9}\u{30C8}.xn--zckzah", false).unwrap(),
            b"xn--zckzah.xn--zckzah"
        );
        assert_eq!(
            codec.encode("b\u{00FC}cher.example.", false).unwrap(),
            b"xn--bcher-kva.example."
        );
    }

    #[test]
    fn test_encode_lenient_and_strict_dots() {
        let codec = DomainCodec::default();
        assert_eq!(
            codec.encode("\u{6D4B}\u{8BD5}\u{3002}example", false).unwrap(),
            b"xn--0zwm56d.example"
        );
        // In strict mode the ideographic full stop stays inside the label
        assert_eq!(
            codec
                .encode("\u{6D4B}\u{8BD5}\u{3002}example", true)
                .unwrap_err()
                .kind(),
            ErrorKind::DisallowedCodepoint
        );
    }

    #[test]
    fn test_empty_domains() {
        let codec = DomainCodec::default();
        assert_eq!(codec.encode("", false), Err(IdnaError::EmptyDomain));
        assert_eq!(codec.decode("", false), Err(IdnaError::EmptyDomain));
        assert_eq!(codec.decode_bytes(b""), Err(IdnaError::EmptyDomain));
        assert_eq!(codec.encode(".", false), Err(IdnaError::EmptyLabel));
        assert_eq!(codec.encode("a..b", false), Err(IdnaError::EmptyLabel));
    }

    #[test]
    fn test_decode() {
        let codec = DomainCodec::default();
        assert_eq!(codec.decode("abc.abc", false).unwrap(), "abc.abc");
        assert_eq!(
            codec.decode("xn--zckzah.xn--zckzah.", false).unwrap(),
            "\u{30C6}\u{30B9}\u{30C8}.\u{30C6}\u{30B9}\u{30C8}."
        );
        assert_eq!(
            codec.decode("XN--PYTHN-MUA\u{FF0E}ORG", false).unwrap(),
            "pyth\u{00F6}n.org"
        );
        assert_eq!(
            codec.decode_bytes(b"xn--pythn-mua.org.").unwrap(),
            "pyth\u{00F6}n.org."
        );
    }

    #[test]
    fn test_decode_bytes_rejects_non_ascii() {
        let codec = DomainCodec::default();
        assert_eq!(
            codec.decode_bytes("abc.d\u{00E9}f".as_bytes()),
            Err(IdnaError::NonAsciiBytes {
                byte: 0xC3,
                offset: 5
            })
        );
    }

    #[test]
    fn test_domain_length_limit() {
        let codec = DomainCodec::default();
        let label = "a".repeat(63);
        // 4 * 63 + 3 dots = 255
        let too_long = [label.as_str(); 4].join(".");
        // 3 * 63 + 61 + 3 dots = 253
        let at_limit = format!("{}.{}", [label.as_str(); 3].join("."), "a".repeat(61));

        assert_eq!(
            codec.encode(&too_long, true),
            Err(IdnaError::DomainTooLong {
                length: 255,
                max: 253
            })
        );
        assert_eq!(codec.encode(&at_limit, true).unwrap().len(), 253);

        // The trailing dot does not count
        let with_dot = format!("{}.", at_limit);
        assert_eq!(codec.encode(&with_dot, true).unwrap().len(), 254);
        assert_eq!(codec.decode(&with_dot, true).unwrap(), with_dot);

        assert_eq!(
            codec.decode(&too_long, true).unwrap_err().kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            codec.decode_bytes(too_long.as_bytes()).unwrap_err().kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn test_from_config() {
        let config = IdnaConfig {
            max_domain_octets: 10,
            ..IdnaConfig::default()
        };
        let codec = DomainCodec::from_config(&config).unwrap();
        assert!(codec.encode("abcd.efghi", true).is_ok());
        assert_eq!(
            codec.encode("abcd.efghij", true),
            Err(IdnaError::DomainTooLong {
                length: 11,
                max: 10
            })
        );

        let invalid = IdnaConfig {
            max_label_octets: 100,
            ..IdnaConfig::default()
        };
        assert!(DomainCodec::from_config(&invalid).is_err());
    }
}
