//! # IDNA Tables - Code Point Classification Store
//!
//! ## Purpose
//!
//! Pure data layer for internationalized domain name processing. Holds the
//! IDNA2008 derived property of every code point, the script membership
//! and Arabic joining types consulted by the contextual rules, and the
//! compact packed integer set they are stored in.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/tables → libs/codec
//!      ↑             ↓
//! Classification  Label rules
//! PackedIntSet    Punycode / A-label / U-label
//! Unicode data    Domain and stream codecs
//! ```
//!
//! ## What This Crate Contains
//! - [`PackedIntSet`]: sorted big-endian `u32` entries with binary search
//! - [`IdnaTables`]: default [`CodepointLookup`] built from the bundled data
//! - [`CodepointClass`], [`Script`], [`JoiningType`] property values
//!
//! ## What This Crate Does NOT Contain
//! - Label validation or transcoding (belongs in libs/codec)
//! - UTS #46 compatibility mapping

pub mod classification;
pub mod data;
pub mod error;
pub mod intset;

pub use classification::{CodepointClass, CodepointLookup, IdnaTables, JoiningType, Script};
pub use data::UNICODE_VERSION;
pub use error::{IntSetError, IntSetResult};
pub use intset::{pack, pack_u32, PackedIntSet, ENTRY_WIDTH};
