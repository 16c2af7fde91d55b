//! Structural label rules that need no classification data
//!
//! Each check takes the label as code points and returns the first
//! violation it finds.

use crate::error::{Codepoint, HyphenRule, IdnaError, IdnaResult};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::is_nfc;

/// Label must be non-empty
pub fn check_not_empty(label: &[char]) -> IdnaResult<()> {
    if label.is_empty() {
        return Err(IdnaError::EmptyLabel);
    }
    Ok(())
}

/// Label must already be in Normalization Form C
pub fn check_nfc(label: &str) -> IdnaResult<()> {
    if !is_nfc(label) {
        return Err(IdnaError::NotNfc);
    }
    Ok(())
}

/// No `--` in the 3rd and 4th positions, no leading or trailing `-`
pub fn check_hyphen_ok(label: &[char]) -> IdnaResult<()> {
    if label.get(2..4) == Some(&['-', '-'][..]) {
        return Err(IdnaError::HyphenPlacement {
            rule: HyphenRule::ThirdAndFourth,
        });
    }
    if label.first() == Some(&'-') || label.last() == Some(&'-') {
        return Err(IdnaError::HyphenPlacement {
            rule: HyphenRule::StartOrEnd,
        });
    }
    Ok(())
}

/// First code point must not be a combining mark (General_Category M*)
pub fn check_initial_combiner(label: &[char]) -> IdnaResult<()> {
    match label.first() {
        Some(&first) if is_combining_mark(first) => Err(IdnaError::LeadingCombiningMark {
            codepoint: Codepoint(first),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_hyphen_rules() {
        assert!(check_hyphen_ok(&chars("abcd")).is_ok());
        assert!(check_hyphen_ok(&chars("a--b")).is_ok());
        assert!(check_hyphen_ok(&chars("a-b-c")).is_ok());
        assert_eq!(
            check_hyphen_ok(&chars("aa--")),
            Err(IdnaError::HyphenPlacement {
                rule: HyphenRule::ThirdAndFourth
            })
        );
        assert_eq!(
            check_hyphen_ok(&chars("xn--abc")),
            Err(IdnaError::HyphenPlacement {
                rule: HyphenRule::ThirdAndFourth
            })
        );
        for label in ["a-", "-a", "-"] {
            assert_eq!(
                check_hyphen_ok(&chars(label)),
                Err(IdnaError::HyphenPlacement {
                    rule: HyphenRule::StartOrEnd
                }),
                "{}",
                label
            );
        }
    }

    #[test]
    fn test_nfc() {
        assert!(check_nfc("\u{00E4}").is_ok());
        assert_eq!(check_nfc("a\u{0308}"), Err(IdnaError::NotNfc));
        // ANGSTROM SIGN normalizes to U+00C5
        assert_eq!(check_nfc("\u{212B}"), Err(IdnaError::NotNfc));
    }

    #[test]
    fn test_initial_combiner() {
        assert!(check_initial_combiner(&chars("a\u{0301}")).is_ok());
        assert_eq!(
            check_initial_combiner(&chars("\u{0301}a")),
            Err(IdnaError::LeadingCombiningMark {
                codepoint: Codepoint('\u{0301}')
            })
        );
        assert!(check_initial_combiner(&[]).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(check_not_empty(&[]), Err(IdnaError::EmptyLabel));
        assert!(check_not_empty(&['a']).is_ok());
    }
}
