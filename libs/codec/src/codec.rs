//! Codec-style entry points that report how much input was consumed
//!
//! Both directions consume the whole input or fail. Empty input yields
//! empty output without touching the domain rules, so an empty buffer is
//! not an [`IdnaError::EmptyDomain`] here.

use crate::config::{ErrorMode, IdnaConfig};
use crate::domain::DomainCodec;
use crate::error::{IdnaError, IdnaResult};

/// Whole-buffer encoder and decoder
#[derive(Debug, Clone, Default)]
pub struct Codec {
    domains: DomainCodec,
    strict_dots: bool,
}

impl Codec {
    pub fn new(domains: DomainCodec, strict_dots: bool) -> Self {
        Self {
            domains,
            strict_dots,
        }
    }

    pub fn from_config(config: &IdnaConfig) -> IdnaResult<Self> {
        Ok(Self::new(
            DomainCodec::from_config(config)?,
            config.strict_dots,
        ))
    }

    /// Encode `data`, returning the A-label bytes and the input bytes consumed
    pub fn encode(&self, data: &str, errors: ErrorMode) -> IdnaResult<(Vec<u8>, usize)> {
        errors.require_strict()?;
        if data.is_empty() {
            return Ok((Vec::new(), 0));
        }
        let encoded = self.domains.encode(data, self.strict_dots)?;
        Ok((encoded, data.len()))
    }

    /// Decode `data`, returning the Unicode text and the input bytes consumed
    pub fn decode(&self, data: &[u8], errors: ErrorMode) -> IdnaResult<(String, usize)> {
        errors.require_strict()?;
        if data.is_empty() {
            return Ok((String::new(), 0));
        }
        let decoded = self.domains.decode_bytes(data)?;
        Ok((decoded, data.len()))
    }
}

/// Parse an error handling name given by a caller
///
/// Unknown names fail the same way as unsupported ones.
pub fn parse_error_mode(name: &str) -> IdnaResult<ErrorMode> {
    name.parse::<ErrorMode>().map_err(|_| IdnaError::UnsupportedErrorMode {
        mode: name.to_string(),
    })
}
