//! # Classification Store Integration Tests
//!
//! Exercises the public surface of the tables crate the way the label
//! validator uses it: a shared `Arc<IdnaTables>` behind the
//! `CodepointLookup` trait object, plus the packed set views it exposes.

use idna_tables::{
    pack, CodepointClass, CodepointLookup, IdnaTables, IntSetError, JoiningType, PackedIntSet,
    Script, ENTRY_WIDTH, UNICODE_VERSION,
};
use std::sync::Arc;

/// Test 1: Shared tables are built once and reused
#[test]
fn test_shared_tables_are_reused() {
    let first = IdnaTables::shared();
    let second = IdnaTables::shared();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.unicode_version(), UNICODE_VERSION);
}

/// Test 2: Lookup works through a trait object
#[test]
fn test_lookup_through_trait_object() {
    let lookup: Arc<dyn CodepointLookup> = IdnaTables::shared();

    // Latin, German sharp s, CJK, Hiragana, Arabic
    for cp in ['z', '\u{00DF}', '\u{6D4B}', '\u{3042}', '\u{0628}'] {
        assert_eq!(lookup.class_of(cp), CodepointClass::Pvalid, "U+{:04X}", cp as u32);
    }

    // Space, dot, upper case, full width digit
    for cp in [' ', '.', 'Z', '\u{FF11}'] {
        assert_eq!(
            lookup.class_of(cp),
            CodepointClass::Disallowed,
            "U+{:04X}",
            cp as u32
        );
    }
}

/// Test 3: Every CONTEXTO code point is present
#[test]
fn test_contexto_members() {
    let tables = IdnaTables::shared();
    let mut expected: Vec<u32> = [0x00B7, 0x0375, 0x05F3, 0x05F4, 0x30FB]
        .into_iter()
        .chain(0x0660..=0x0669)
        .chain(0x06F0..=0x06F9)
        .collect();

    expected.sort_unstable();

    let contexto = tables.class_set(CodepointClass::ContextO).unwrap();
    assert_eq!(contexto.iter().collect::<Vec<_>>(), expected);
}

/// Test 4: Digits used by the Arabic-Indic rules are not PVALID
#[test]
fn test_arabic_indic_digits_are_contextual() {
    let tables = IdnaTables::shared();
    assert_eq!(tables.class_of('\u{0663}'), CodepointClass::ContextO);
    assert_eq!(tables.class_of('\u{06F3}'), CodepointClass::ContextO);
}

/// Test 5: Script views are non-empty and disjoint from each other
#[test]
fn test_script_views() {
    let tables = IdnaTables::shared();
    for script in Script::ALL {
        let set = tables.script_set(script);
        assert!(!set.is_empty(), "{} has no code points", script.name());
        for other in Script::ALL.into_iter().filter(|other| *other != script) {
            let other_set = tables.script_set(other);
            assert!(
                set.iter().take(64).all(|cp| !other_set.contains_u32(cp)),
                "{} overlaps {}",
                script.name(),
                other.name()
            );
        }
    }
}

/// Test 6: Joining types of the code points used in ZWNJ contexts
#[test]
fn test_joining_types_for_zwnj_context() {
    let tables = IdnaTables::shared();
    assert_eq!(tables.joining_type('\u{0644}'), Some(JoiningType::D)); // LAM
    assert_eq!(tables.joining_type('\u{0648}'), Some(JoiningType::R)); // WAW
    assert_eq!(tables.joining_type('\u{0300}'), Some(JoiningType::T));
    assert_eq!(tables.joining_type('\u{0621}'), None); // HAMZA is non-joining
    assert_eq!(tables.joining_type('\u{200C}'), None);
}

/// Test 7: Caller-built packed sets follow the same format
#[test]
fn test_caller_built_packed_set() {
    let packed = pack([0x61, 0x7A, 0x30]).unwrap();
    assert_eq!(packed.len(), 3 * ENTRY_WIDTH);

    let set = PackedIntSet::new(&packed).unwrap();
    assert!(set.contains(0x7A).unwrap());
    assert!(!set.contains(0x41).unwrap());
    assert_eq!(
        set.contains(u64::from(u32::MAX) + 7),
        Err(IntSetError::OutOfRange {
            value: u64::from(u32::MAX) + 7,
            max: u64::from(u32::MAX)
        })
    );
}
