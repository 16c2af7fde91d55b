//! # IDNA Codec - Internationalized Domain Name Rules
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer for internationalized domain
//! names (IDNA2008, RFC 5890-5893):
//! - Label validation (NFC, hyphens, combining marks, CONTEXTJ/CONTEXTO, bidi)
//! - Punycode transcoding and the `xn--` A-label convention
//! - Domain encode/decode with trailing-dot and length handling
//! - Streaming encode/decode over arbitrary chunks
//!
//! ## Architecture Role
//!
//! ```text
//! libs/tables → [codec] → callers
//!     ↑            ↓
//! Code point    LabelValidator   validation/
//! classes       LabelCodec       labels.rs + punycode.rs
//! PackedIntSet  DomainCodec      domain.rs
//!               StreamEncoder    stream.rs
//! ```
//!
//! ## Usage
//!
//! ```rust
//! let encoded = idna_codec::encode("b\u{00FC}cher.example", false)?;
//! assert_eq!(encoded, b"xn--bcher-kva.example");
//!
//! let decoded = idna_codec::decode("xn--bcher-kva.example", false)?;
//! assert_eq!(decoded, "b\u{00FC}cher.example");
//! # Ok::<(), idna_codec::IdnaError>(())
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - UTS #46 mapping or IDNA2003 compatibility processing
//! - DNS resolution, URL parsing or display policy

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod labels;
pub mod punycode;
pub mod stream;
pub mod validation;

pub use codec::{parse_error_mode, Codec};
pub use config::{ErrorMode, IdnaConfig, MAX_DOMAIN_OCTETS, MAX_LABEL_OCTETS};
pub use domain::{split_labels, DomainCodec, LENIENT_DOTS, STRICT_DOTS};
pub use error::{BidiRule, Codepoint, ErrorKind, HyphenRule, IdnaError, IdnaResult};
pub use labels::{LabelCodec, ACE_PREFIX};
pub use stream::{split_chunk, ChunkSplit, StreamBuffer, StreamDecoder, StreamEncoder};
pub use validation::LabelValidator;

pub use idna_tables::{CodepointLookup, IdnaTables};

use once_cell::sync::Lazy;

static DEFAULT_CODEC: Lazy<DomainCodec> = Lazy::new(DomainCodec::default);

/// Encode a domain to A-label bytes; `strict` splits on U+002E only
pub fn encode(domain: &str, strict: bool) -> IdnaResult<Vec<u8>> {
    DEFAULT_CODEC.encode(domain, strict)
}

/// Decode a domain given as text
pub fn decode(domain: &str, strict: bool) -> IdnaResult<String> {
    DEFAULT_CODEC.decode(domain, strict)
}

/// Decode a domain given as ASCII bytes
pub fn decode_bytes(domain: &[u8]) -> IdnaResult<String> {
    DEFAULT_CODEC.decode_bytes(domain)
}

/// Convert one label to A-label bytes
pub fn alabel(label: &str) -> IdnaResult<Vec<u8>> {
    DEFAULT_CODEC.labels().alabel(label)
}

/// Convert one label to its U-label
pub fn ulabel(label: &str) -> IdnaResult<String> {
    DEFAULT_CODEC.labels().ulabel(label)
}

/// Convert one ASCII byte label to its U-label
pub fn ulabel_bytes(label: &[u8]) -> IdnaResult<String> {
    DEFAULT_CODEC.labels().ulabel_bytes(label)
}

/// Validate one U-label
pub fn check_label(label: &str) -> IdnaResult<()> {
    DEFAULT_CODEC.labels().check_label(label)
}
