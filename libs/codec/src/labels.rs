//! # Label Transcoding
//!
//! Conversion of single labels between U-label (Unicode) and A-label
//! (`xn--` + Punycode) form, validating on the way in both directions.
//!
//! ```text
//! alabel: "bücher" → check_label → punycode "bcher-kva" → "xn--bcher-kva"
//! ulabel: "XN--BCHER-KVA" → lower → decode → check_label → re-encode == input → "bücher"
//! ```

use crate::config::{IdnaConfig, MAX_LABEL_OCTETS};
use crate::error::{IdnaError, IdnaResult};
use crate::punycode;
use crate::validation::LabelValidator;
use idna_tables::CodepointLookup;
use std::sync::Arc;
use tracing::trace;

/// ASCII compatible encoding prefix
pub const ACE_PREFIX: &str = "xn--";

/// Label-level encoder and decoder
#[derive(Debug, Clone)]
pub struct LabelCodec {
    validator: LabelValidator,
    max_label_octets: usize,
}

impl LabelCodec {
    pub fn new(tables: Arc<dyn CodepointLookup>) -> Self {
        Self {
            validator: LabelValidator::new(tables),
            max_label_octets: MAX_LABEL_OCTETS,
        }
    }

    pub fn with_config(tables: Arc<dyn CodepointLookup>, config: &IdnaConfig) -> Self {
        Self {
            validator: LabelValidator::with_config(tables, config),
            max_label_octets: config.label_limit(),
        }
    }

    pub fn validator(&self) -> &LabelValidator {
        &self.validator
    }

    /// Validate a U-label
    pub fn check_label(&self, label: &str) -> IdnaResult<()> {
        self.validator.check_label(label)
    }

    fn check_length(&self, length: usize) -> IdnaResult<()> {
        if length > self.max_label_octets {
            return Err(IdnaError::LabelTooLong {
                length,
                max: self.max_label_octets,
            });
        }
        Ok(())
    }

    /// Convert a label to its A-label bytes
    ///
    /// ASCII labels are validated as A-labels or LDH labels and returned
    /// with their original case.
    pub fn alabel(&self, label: &str) -> IdnaResult<Vec<u8>> {
        if label.is_empty() {
            return Err(IdnaError::EmptyLabel);
        }

        if label.is_ascii() {
            self.ulabel(label)?;
            self.check_length(label.len())?;
            return Ok(label.as_bytes().to_vec());
        }

        self.validator.check_label(label)?;
        let cps: Vec<char> = label.chars().collect();
        let encoded = format!("{}{}", ACE_PREFIX, punycode::encode(&cps)?);
        self.check_length(encoded.len())?;

        trace!("Encoded label {:?} as {}", label, encoded);
        Ok(encoded.into_bytes())
    }

    /// Convert a label to its U-label
    pub fn ulabel(&self, label: &str) -> IdnaResult<String> {
        if !label.is_ascii() {
            self.validator.check_label(label)?;
            return Ok(label.to_string());
        }

        self.check_length(label.len())?;
        let lowered = label.to_ascii_lowercase();

        let Some(payload) = lowered.strip_prefix(ACE_PREFIX) else {
            self.validator.check_label(&lowered)?;
            return Ok(lowered);
        };

        if payload.is_empty() {
            return Err(IdnaError::punycode("empty payload after the xn-- prefix"));
        }

        let cps = punycode::decode(payload)?;
        let decoded: String = cps.iter().collect();
        if decoded.is_ascii() {
            return Err(IdnaError::invalid_alabel(lowered));
        }
        self.validator.check_label(&decoded)?;

        if punycode::encode(&cps)? != payload {
            return Err(IdnaError::invalid_alabel(lowered));
        }

        trace!("Decoded label {} as {:?}", lowered, decoded);
        Ok(decoded)
    }

    /// Convert an ASCII byte label to its U-label
    pub fn ulabel_bytes(&self, label: &[u8]) -> IdnaResult<String> {
        let text = ascii_text(label, 0)?;
        self.ulabel(&text)
    }
}

/// Copy ASCII bytes into a `String`, reporting the first non-ASCII byte
///
/// `base_offset` is added to the reported offset so callers can point into
/// a larger buffer.
pub(crate) fn ascii_text(bytes: &[u8], base_offset: usize) -> IdnaResult<String> {
    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(IdnaError::NonAsciiBytes {
            byte: bytes[offset],
            offset: base_offset + offset,
        });
    }
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}
