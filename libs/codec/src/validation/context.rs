//! CONTEXTJ and CONTEXTO rules (RFC 5892 Appendix A)

use idna_tables::{CodepointLookup, JoiningType, Script};
use unicode_normalization::char::canonical_combining_class;

const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';
const VIRAMA_COMBINING_CLASS: u8 = 9;

const MIDDLE_DOT: char = '\u{00B7}';
const GREEK_KERAIA: char = '\u{0375}';
const HEBREW_GERESH: char = '\u{05F3}';
const HEBREW_GERSHAYIM: char = '\u{05F4}';
const KATAKANA_MIDDLE_DOT: char = '\u{30FB}';

fn is_arabic_indic_digit(cp: char) -> bool {
    ('\u{0660}'..='\u{0669}').contains(&cp)
}

fn is_extended_arabic_indic_digit(cp: char) -> bool {
    ('\u{06F0}'..='\u{06F9}').contains(&cp)
}

fn follows_virama(label: &[char], pos: usize) -> bool {
    pos > 0 && canonical_combining_class(label[pos - 1]) == VIRAMA_COMBINING_CLASS
}

/// First non-transparent joining type found walking `indices`
fn nearest_joining_type<I>(
    lookup: &dyn CodepointLookup,
    label: &[char],
    indices: I,
) -> Option<JoiningType>
where
    I: Iterator<Item = usize>,
{
    indices
        .map(|i| lookup.joining_type(label[i]))
        .find(|joining| *joining != Some(JoiningType::T))
        .flatten()
}

/// Joiner context rule for the code point at `pos`
///
/// ZWNJ is valid after a virama, or between a left/dual joining code
/// point and a right/dual joining one with only transparent code points
/// in between. ZWJ is valid only after a virama. Anything else, including
/// an out-of-range position, is invalid.
pub fn valid_contextj(lookup: &dyn CodepointLookup, label: &[char], pos: usize) -> bool {
    match label.get(pos) {
        Some(&ZERO_WIDTH_NON_JOINER) => {
            if follows_virama(label, pos) {
                return true;
            }
            let before = nearest_joining_type(lookup, label, (0..pos).rev());
            if !matches!(before, Some(JoiningType::L | JoiningType::D)) {
                return false;
            }
            let after = nearest_joining_type(lookup, label, pos + 1..label.len());
            matches!(after, Some(JoiningType::R | JoiningType::D))
        }
        Some(&ZERO_WIDTH_JOINER) => follows_virama(label, pos),
        _ => false,
    }
}

/// Other context rule for the code point at `pos`
pub fn valid_contexto(lookup: &dyn CodepointLookup, label: &[char], pos: usize) -> bool {
    let Some(&cp) = label.get(pos) else {
        return false;
    };

    match cp {
        MIDDLE_DOT => {
            pos > 0 && label.get(pos - 1) == Some(&'l') && label.get(pos + 1) == Some(&'l')
        }
        GREEK_KERAIA => label
            .get(pos + 1)
            .is_some_and(|next| lookup.in_script(*next, Script::Greek)),
        HEBREW_GERESH | HEBREW_GERSHAYIM => {
            pos > 0 && lookup.in_script(label[pos - 1], Script::Hebrew)
        }
        KATAKANA_MIDDLE_DOT => label
            .iter()
            .filter(|other| **other != KATAKANA_MIDDLE_DOT)
            .all(|other| {
                lookup.in_script(*other, Script::Hiragana)
                    || lookup.in_script(*other, Script::Katakana)
                    || lookup.in_script(*other, Script::Han)
            }),
        _ if is_arabic_indic_digit(cp) => {
            !label.iter().any(|other| is_extended_arabic_indic_digit(*other))
        }
        _ if is_extended_arabic_indic_digit(cp) => {
            !label.iter().any(|other| is_arabic_indic_digit(*other))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idna_tables::IdnaTables;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_zero_width_non_joiner() {
        let tables = IdnaTables::shared();

        // Lone or trailing ZWNJ
        assert!(!valid_contextj(tables.as_ref(), &chars("\u{200C}"), 0));
        assert!(!valid_contextj(tables.as_ref(), &chars("a\u{200C}"), 1));

        // After DEVANAGARI SIGN VIRAMA
        assert!(valid_contextj(tables.as_ref(), &chars("\u{0915}\u{094D}\u{200C}"), 2));

        // BEH ZWNJ BEH, with and without a transparent mark in between
        assert!(valid_contextj(tables.as_ref(), &chars("\u{0628}\u{200C}\u{0628}"), 1));
        assert!(valid_contextj(
            tables.as_ref(),
            &chars("\u{0628}\u{064B}\u{200C}\u{064B}\u{0627}"),
            2
        ));

        // ALEF only joins on the right, so it cannot precede ZWNJ
        assert!(!valid_contextj(tables.as_ref(), &chars("\u{0627}\u{200C}\u{0628}"), 1));
        // Nothing joining after
        assert!(!valid_contextj(tables.as_ref(), &chars("\u{0628}\u{200C}"), 1));
    }

    #[test]
    fn test_zero_width_joiner() {
        let tables = IdnaTables::shared();
        assert!(valid_contextj(tables.as_ref(), &chars("\u{094D}\u{200D}"), 1));
        assert!(!valid_contextj(tables.as_ref(), &chars("\u{200D}"), 0));
        assert!(!valid_contextj(tables.as_ref(), &chars("\u{0628}\u{200D}\u{0628}"), 1));
    }

    #[test]
    fn test_contextj_rejects_other_code_points_and_positions() {
        let tables = IdnaTables::shared();
        assert!(!valid_contextj(tables.as_ref(), &chars("ab"), 0));
        assert!(!valid_contextj(tables.as_ref(), &chars("a\u{200C}"), 5));
    }

    #[test]
    fn test_middle_dot() {
        let tables = IdnaTables::shared();
        assert!(valid_contexto(tables.as_ref(), &chars("l\u{00B7}l"), 1));
        assert!(!valid_contexto(tables.as_ref(), &chars("l\u{00B7}"), 1));
        assert!(!valid_contexto(tables.as_ref(), &chars("\u{00B7}l"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("a\u{00B7}l"), 1));
    }

    #[test]
    fn test_greek_keraia() {
        let tables = IdnaTables::shared();
        assert!(valid_contexto(tables.as_ref(), &chars("\u{0375}\u{03B1}"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("\u{0375}a"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("\u{03B1}\u{0375}"), 1));
    }

    #[test]
    fn test_hebrew_punctuation() {
        let tables = IdnaTables::shared();
        assert!(valid_contexto(tables.as_ref(), &chars("\u{05D0}\u{05F3}"), 1));
        assert!(valid_contexto(tables.as_ref(), &chars("\u{05D0}\u{05F4}"), 1));
        assert!(!valid_contexto(tables.as_ref(), &chars("\u{05F3}"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("a\u{05F4}"), 1));
    }

    #[test]
    fn test_katakana_middle_dot() {
        let tables = IdnaTables::shared();
        assert!(valid_contexto(tables.as_ref(), &chars("\u{30A2}\u{30FB}\u{30A4}"), 1));
        assert!(valid_contexto(tables.as_ref(), &chars("\u{6F22}\u{30FB}\u{3042}"), 1));
        assert!(valid_contexto(tables.as_ref(), &chars("\u{30FB}"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("a\u{30FB}"), 1));
    }

    #[test]
    fn test_arabic_indic_digits() {
        let tables = IdnaTables::shared();
        assert!(valid_contexto(tables.as_ref(), &chars("\u{0628}\u{0660}\u{0661}"), 1));
        assert!(valid_contexto(tables.as_ref(), &chars("\u{06F0}\u{06F1}"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("\u{0660}\u{06F0}"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("\u{0660}\u{06F0}"), 1));
    }

    #[test]
    fn test_contexto_rejects_other_code_points() {
        let tables = IdnaTables::shared();
        assert!(!valid_contexto(tables.as_ref(), &chars("a"), 0));
        assert!(!valid_contexto(tables.as_ref(), &chars("a"), 3));
    }
}
