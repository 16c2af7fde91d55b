//! # Label Validation
//!
//! ## Purpose
//!
//! Decides whether a Unicode label is a valid IDNA2008 U-label
//! (RFC 5891 section 5.4, RFC 5892, RFC 5893).
//!
//! ## Architecture
//!
//! ```text
//! label → empty → NFC → hyphens → leading mark → per-codepoint class → bidi → Ok
//!                                                   ├── PVALID   continue
//!                                                   ├── CONTEXTJ valid_contextj
//!                                                   ├── CONTEXTO valid_contexto
//!                                                   └── other    InvalidCodepoint
//! ```
//!
//! Rules run in that fixed order and the first failure is returned.

pub mod bidi;
pub mod context;
pub mod label;

use crate::config::IdnaConfig;
use crate::error::{IdnaError, IdnaResult};
use idna_tables::{CodepointClass, CodepointLookup};
use std::fmt;
use std::sync::Arc;

pub use bidi::is_bidi_label;

/// Full IDNA2008 label check against a classification table
#[derive(Clone)]
pub struct LabelValidator {
    tables: Arc<dyn CodepointLookup>,
    check_ltr_bidi: bool,
}

impl LabelValidator {
    pub fn new(tables: Arc<dyn CodepointLookup>) -> Self {
        Self {
            tables,
            check_ltr_bidi: false,
        }
    }

    pub fn with_config(tables: Arc<dyn CodepointLookup>, config: &IdnaConfig) -> Self {
        Self {
            tables,
            check_ltr_bidi: config.check_ltr_bidi,
        }
    }

    pub fn tables(&self) -> &Arc<dyn CodepointLookup> {
        &self.tables
    }

    /// Validate a U-label
    pub fn check_label(&self, label: &str) -> IdnaResult<()> {
        let cps: Vec<char> = label.chars().collect();

        label::check_not_empty(&cps)?;
        label::check_nfc(label)?;
        label::check_hyphen_ok(&cps)?;
        label::check_initial_combiner(&cps)?;

        for (pos, &cp) in cps.iter().enumerate() {
            match self.tables.class_of(cp) {
                CodepointClass::Pvalid => {}
                CodepointClass::ContextJ => {
                    if !self.valid_contextj(&cps, pos) {
                        return Err(IdnaError::invalid_context(cp, pos));
                    }
                }
                CodepointClass::ContextO => {
                    if !self.valid_contexto(&cps, pos) {
                        return Err(IdnaError::invalid_context(cp, pos));
                    }
                }
                CodepointClass::Disallowed => {
                    return Err(IdnaError::invalid_codepoint(cp, pos));
                }
            }
        }

        self.check_bidi(&cps, self.check_ltr_bidi)
    }

    /// Joiner context rule for the code point at `pos`
    pub fn valid_contextj(&self, label: &[char], pos: usize) -> bool {
        context::valid_contextj(self.tables.as_ref(), label, pos)
    }

    /// Other context rule for the code point at `pos`
    pub fn valid_contexto(&self, label: &[char], pos: usize) -> bool {
        context::valid_contexto(self.tables.as_ref(), label, pos)
    }

    /// RFC 5893 bidi rule
    pub fn check_bidi(&self, label: &[char], check_ltr: bool) -> IdnaResult<()> {
        bidi::check_bidi(label, check_ltr)
    }
}

impl fmt::Debug for LabelValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelValidator")
            .field("check_ltr_bidi", &self.check_ltr_bidi)
            .finish_non_exhaustive()
    }
}
