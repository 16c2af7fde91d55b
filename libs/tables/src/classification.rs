//! # Code Point Classification
//!
//! ## Purpose
//!
//! Answers the three questions the label rules ask about a code point:
//! its IDNA2008 derived property (RFC 5892), whether it belongs to one of
//! the scripts named by the contextual rules, and its Arabic joining type.
//!
//! ## Architecture Role
//!
//! ```text
//! data.rs (static ranges) → IdnaTables::load() → one packed buffer
//!                                                  ├── PVALID    start..end
//!                                                  ├── CONTEXTJ  start..end
//!                                                  ├── CONTEXTO  start..end
//!                                                  └── scripts   start..end
//! label rules ── CodepointLookup ──→ PackedIntSet::contains_u32
//! ```
//!
//! The tables are built once and shared behind an `Arc`; nothing in here
//! is mutable after construction.

use crate::data;
use crate::intset::{pack_u32, PackedIntSet};
use once_cell::sync::Lazy;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

/// IDNA2008 derived property of a code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodepointClass {
    /// Protocol valid anywhere in a label
    Pvalid,
    /// Join control, valid only in a qualifying context
    ContextJ,
    /// Valid only in a qualifying context
    ContextO,
    /// Disallowed or unassigned
    Disallowed,
}

/// Scripts consulted by the CONTEXTO rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Greek,
    Han,
    Hebrew,
    Hiragana,
    Katakana,
}

impl Script {
    pub const ALL: [Script; 5] = [
        Script::Greek,
        Script::Han,
        Script::Hebrew,
        Script::Hiragana,
        Script::Katakana,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Script::Greek => "Greek",
            Script::Han => "Han",
            Script::Hebrew => "Hebrew",
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        }
    }
}

/// Unicode `Joining_Type`; non-joining (`U`) code points have no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoiningType {
    /// Left joining
    L,
    /// Dual joining
    D,
    /// Transparent
    T,
    /// Right joining
    R,
    /// Join causing
    C,
}

/// Lookup interface consumed by the label validator
pub trait CodepointLookup: Send + Sync {
    /// Derived property of `cp`
    fn class_of(&self, cp: char) -> CodepointClass;

    /// Whether `cp` has the given `Script` property value
    fn in_script(&self, cp: char, script: Script) -> bool;

    /// Joining type of `cp`, `None` for non-joining
    fn joining_type(&self, cp: char) -> Option<JoiningType>;
}

// Section order inside the shared packed buffer
const PVALID: usize = 0;
const CONTEXTJ: usize = 1;
const CONTEXTO: usize = 2;
const FIRST_SCRIPT: usize = 3;
const SECTION_COUNT: usize = FIRST_SCRIPT + Script::ALL.len();

fn script_section(script: Script) -> usize {
    FIRST_SCRIPT
        + match script {
            Script::Greek => 0,
            Script::Han => 1,
            Script::Hebrew => 2,
            Script::Hiragana => 3,
            Script::Katakana => 4,
        }
}

fn script_ranges(script: Script) -> &'static [(u32, u32)] {
    match script {
        Script::Greek => data::SCRIPT_GREEK,
        Script::Han => data::SCRIPT_HAN,
        Script::Hebrew => data::SCRIPT_HEBREW,
        Script::Hiragana => data::SCRIPT_HIRAGANA,
        Script::Katakana => data::SCRIPT_KATAKANA,
    }
}

fn expand(ranges: &[(u32, u32)]) -> impl Iterator<Item = u32> + '_ {
    ranges.iter().flat_map(|&(first, last)| first..=last)
}

static SHARED: Lazy<Arc<IdnaTables>> = Lazy::new(|| Arc::new(IdnaTables::load()));

/// Default classification tables backed by one packed buffer
pub struct IdnaTables {
    packed: Vec<u8>,
    sections: [Range<usize>; SECTION_COUNT],
    joining_types: &'static [(u32, u32, JoiningType)],
}

impl IdnaTables {
    /// Build the tables from the pre-built Unicode data
    ///
    /// Expands every category into packed entries and appends it to a
    /// single buffer, remembering the byte window of each category.
    pub fn load() -> Self {
        let mut sources: Vec<&'static [(u32, u32)]> =
            vec![data::PVALID, data::CONTEXTJ, data::CONTEXTO];
        sources.extend(Script::ALL.iter().map(|script| script_ranges(*script)));

        let mut packed = Vec::new();
        let mut sections: [Range<usize>; SECTION_COUNT] = Default::default();
        for (section, ranges) in sections.iter_mut().zip(sources) {
            let start = packed.len();
            packed.extend(pack_u32(expand(ranges)));
            *section = start..packed.len();
        }

        let tables = Self {
            packed,
            sections,
            joining_types: data::JOINING_TYPES,
        };
        debug!(
            "Built IDNA tables for Unicode {}: {} PVALID, {} CONTEXTJ, {} CONTEXTO entries, {} bytes packed",
            data::UNICODE_VERSION,
            tables.section(PVALID).len(),
            tables.section(CONTEXTJ).len(),
            tables.section(CONTEXTO).len(),
            tables.packed.len()
        );
        tables
    }

    /// Process-wide tables, built on first use
    pub fn shared() -> Arc<IdnaTables> {
        Arc::clone(&SHARED)
    }

    /// Unicode version of the underlying data
    pub fn unicode_version(&self) -> &'static str {
        data::UNICODE_VERSION
    }

    /// Size of the shared packed buffer in bytes
    pub fn packed_len(&self) -> usize {
        self.packed.len()
    }

    fn section(&self, index: usize) -> PackedIntSet<'_> {
        PackedIntSet::from_aligned(&self.packed[self.sections[index].clone()])
    }

    /// Packed view of one derived property; `Disallowed` has no table
    pub fn class_set(&self, class: CodepointClass) -> Option<PackedIntSet<'_>> {
        match class {
            CodepointClass::Pvalid => Some(self.section(PVALID)),
            CodepointClass::ContextJ => Some(self.section(CONTEXTJ)),
            CodepointClass::ContextO => Some(self.section(CONTEXTO)),
            CodepointClass::Disallowed => None,
        }
    }

    /// Packed view of one script
    pub fn script_set(&self, script: Script) -> PackedIntSet<'_> {
        self.section(script_section(script))
    }
}

impl CodepointLookup for IdnaTables {
    fn class_of(&self, cp: char) -> CodepointClass {
        let value = cp as u32;
        if self.section(PVALID).contains_u32(value) {
            CodepointClass::Pvalid
        } else if self.section(CONTEXTJ).contains_u32(value) {
            CodepointClass::ContextJ
        } else if self.section(CONTEXTO).contains_u32(value) {
            CodepointClass::ContextO
        } else {
            CodepointClass::Disallowed
        }
    }

    fn in_script(&self, cp: char, script: Script) -> bool {
        self.script_set(script).contains_u32(cp as u32)
    }

    fn joining_type(&self, cp: char) -> Option<JoiningType> {
        let value = cp as u32;
        self.joining_types
            .binary_search_by(|&(first, last, _)| {
                if last < value {
                    std::cmp::Ordering::Less
                } else if first > value {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()
            .map(|index| self.joining_types[index].2)
    }
}

impl fmt::Debug for IdnaTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdnaTables")
            .field("unicode_version", &data::UNICODE_VERSION)
            .field("packed_bytes", &self.packed.len())
            .field("joining_ranges", &self.joining_types.len())
            .finish()
    }
}
