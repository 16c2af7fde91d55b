//! Errors for label validation and domain transcoding
//!
//! Every failure carries enough context to point at the offending input:
//! code points are rendered as `U+XXXX` and positions are 1-based code
//! point offsets into the label, so a message can be matched against the
//! input by eye.

use std::fmt;
use thiserror::Error;

/// Broad category of an [`IdnaError`], for callers that branch on the
/// kind of failure rather than the exact variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or over-long labels and domains, byte-level problems, stream state
    Structural,
    /// Label is not in Normalization Form C
    Normalization,
    /// Hyphen in a forbidden position
    HyphenPlacement,
    /// Label starts with a combining mark
    LeadingCombiningMark,
    /// Code point is DISALLOWED or unassigned
    DisallowedCodepoint,
    /// CONTEXTJ or CONTEXTO code point outside its permitted context
    ContextRule,
    /// RFC 5893 bidirectional rule violated
    Bidi,
    /// Punycode or A-label conversion failed
    Transcoding,
    /// Error handling mode other than strict
    UnsupportedOption,
    /// Invalid configuration
    Configuration,
}

/// Hyphen restriction a label violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyphenRule {
    /// `--` in the third and fourth positions
    ThirdAndFourth,
    /// `-` as the first or last code point
    StartOrEnd,
}

impl fmt::Display for HyphenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HyphenRule::ThirdAndFourth => {
                write!(f, "Label has disallowed hyphens in 3rd and 4th position")
            }
            HyphenRule::StartOrEnd => write!(f, "Label must not start or end with a hyphen"),
        }
    }
}

/// Numbered rule of RFC 5893 section 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiRule {
    /// Rule 1: first code point must be L, R or AL
    FirstCodepoint,
    /// Rule 2: direction not allowed in a right-to-left label
    RtlDirection,
    /// Rule 3: right-to-left label ends badly
    RtlEnding,
    /// Rule 4: EN and AN mixed in a right-to-left label
    MixedNumerals,
    /// Rule 5: direction not allowed in a left-to-right label
    LtrDirection,
    /// Rule 6: left-to-right label ends badly
    LtrEnding,
}

impl BidiRule {
    /// Rule number as written in RFC 5893
    pub fn number(self) -> u8 {
        match self {
            BidiRule::FirstCodepoint => 1,
            BidiRule::RtlDirection => 2,
            BidiRule::RtlEnding => 3,
            BidiRule::MixedNumerals => 4,
            BidiRule::LtrDirection => 5,
            BidiRule::LtrEnding => 6,
        }
    }
}

impl fmt::Display for BidiRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            BidiRule::FirstCodepoint => "first codepoint must be directionality L, R or AL",
            BidiRule::RtlDirection => "invalid direction for codepoint in a right-to-left label",
            BidiRule::RtlEnding => "right-to-left label ends with illegal codepoint directionality",
            BidiRule::MixedNumerals => "can not mix numeral types in a right-to-left label",
            BidiRule::LtrDirection => "invalid direction for codepoint in a left-to-right label",
            BidiRule::LtrEnding => "left-to-right label ends with illegal codepoint directionality",
        };
        write!(f, "rule {}: {}", self.number(), description)
    }
}

/// Code point wrapper that displays as `U+XXXX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codepoint(pub char);

impl Codepoint {
    /// ZERO WIDTH NON-JOINER or ZERO WIDTH JOINER
    pub fn is_joiner(self) -> bool {
        matches!(self.0, '\u{200C}' | '\u{200D}')
    }

    fn subject(self) -> &'static str {
        if self.is_joiner() {
            "Joiner"
        } else {
            "Codepoint"
        }
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0 as u32)
    }
}

/// IDNA processing errors
///
/// Positions are 1-based code point offsets within the label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdnaError {
    /// Domain has no labels at all
    #[error("Empty domain")]
    EmptyDomain,

    /// Label has no code points
    #[error("Empty label")]
    EmptyLabel,

    /// Label exceeds the DNS label limit in A-label form
    #[error("Label too long: {length} octets exceeds limit {max}")]
    LabelTooLong { length: usize, max: usize },

    /// Domain exceeds the DNS name limit in A-label form
    #[error("Domain too long: {length} octets exceeds limit {max} (trailing dot excluded)")]
    DomainTooLong { length: usize, max: usize },

    /// Byte-oriented input contains a non-ASCII byte
    #[error("Non-ASCII byte {byte:#04x} at offset {offset}: encoded domain names must be ASCII")]
    NonAsciiBytes { byte: u8, offset: usize },

    /// Stream was fed after an earlier failure
    #[error("Stream aborted by an earlier error: call reset() before feeding more input")]
    StreamAborted,

    /// Label is not in Normalization Form C
    #[error("Label must be in Normalization Form C")]
    NotNfc,

    /// Hyphen placement restriction violated
    #[error("{rule}")]
    HyphenPlacement { rule: HyphenRule },

    /// First code point is a combining mark
    #[error("Label begins with an illegal combining character {codepoint}")]
    LeadingCombiningMark { codepoint: Codepoint },

    /// Code point is not permitted anywhere in a label
    #[error("Codepoint {codepoint} at position {position} not allowed")]
    InvalidCodepoint { codepoint: Codepoint, position: usize },

    /// Contextual code point without a qualifying context
    #[error("{} {codepoint} not allowed at position {position}", .codepoint.subject())]
    InvalidCodepointContext { codepoint: Codepoint, position: usize },

    /// Bidirectional rule violated
    #[error("Bidi {rule} (position {position})")]
    Bidi { rule: BidiRule, position: usize },

    /// Malformed Punycode or arithmetic overflow while transcoding
    #[error("Invalid Punycode: {reason}")]
    Punycode { reason: String },

    /// `xn--` label that does not round-trip to a valid U-label
    #[error("The label {label} is not a valid A-label")]
    InvalidALabel { label: String },

    /// Error handling other than strict was requested
    #[error("Unsupported error handling \"{mode}\": only strict is supported")]
    UnsupportedErrorMode { mode: String },

    /// Configuration value out of range or unparsable
    #[error("Invalid configuration for {field}: {reason}")]
    Config { field: String, reason: String },
}

impl IdnaError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdnaError::EmptyDomain
            | IdnaError::EmptyLabel
            | IdnaError::LabelTooLong { .. }
            | IdnaError::DomainTooLong { .. }
            | IdnaError::NonAsciiBytes { .. }
            | IdnaError::StreamAborted => ErrorKind::Structural,
            IdnaError::NotNfc => ErrorKind::Normalization,
            IdnaError::HyphenPlacement { .. } => ErrorKind::HyphenPlacement,
            IdnaError::LeadingCombiningMark { .. } => ErrorKind::LeadingCombiningMark,
            IdnaError::InvalidCodepoint { .. } => ErrorKind::DisallowedCodepoint,
            IdnaError::InvalidCodepointContext { .. } => ErrorKind::ContextRule,
            IdnaError::Bidi { .. } => ErrorKind::Bidi,
            IdnaError::Punycode { .. } | IdnaError::InvalidALabel { .. } => {
                ErrorKind::Transcoding
            }
            IdnaError::UnsupportedErrorMode { .. } => ErrorKind::UnsupportedOption,
            IdnaError::Config { .. } => ErrorKind::Configuration,
        }
    }

    /// Disallowed code point at 0-based `index`
    pub fn invalid_codepoint(cp: char, index: usize) -> Self {
        Self::InvalidCodepoint {
            codepoint: Codepoint(cp),
            position: index + 1,
        }
    }

    /// Contextual code point at 0-based `index` whose rule failed
    pub fn invalid_context(cp: char, index: usize) -> Self {
        Self::InvalidCodepointContext {
            codepoint: Codepoint(cp),
            position: index + 1,
        }
    }

    /// Bidi rule failure at 0-based `index`
    pub fn bidi(rule: BidiRule, index: usize) -> Self {
        Self::Bidi {
            rule,
            position: index + 1,
        }
    }

    pub fn punycode(reason: impl Into<String>) -> Self {
        Self::Punycode {
            reason: reason.into(),
        }
    }

    pub fn invalid_alabel(label: impl Into<String>) -> Self {
        Self::InvalidALabel {
            label: label.into(),
        }
    }

    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for IDNA operations
pub type IdnaResult<T> = std::result::Result<T, IdnaError>;
