//! Bidi rule (RFC 5893 section 2)

use crate::error::{BidiRule, IdnaError, IdnaResult};
use unicode_bidi::{bidi_class, BidiClass};

/// Whether the label contains any right-to-left or Arabic number code point
pub fn is_bidi_label(label: &[char]) -> bool {
    label
        .iter()
        .any(|cp| matches!(bidi_class(*cp), BidiClass::R | BidiClass::AL | BidiClass::AN))
}

fn allowed_in_rtl(class: BidiClass) -> bool {
    matches!(
        class,
        BidiClass::R
            | BidiClass::AL
            | BidiClass::AN
            | BidiClass::EN
            | BidiClass::ES
            | BidiClass::CS
            | BidiClass::ET
            | BidiClass::ON
            | BidiClass::BN
            | BidiClass::NSM
    )
}

fn allowed_in_ltr(class: BidiClass) -> bool {
    matches!(
        class,
        BidiClass::L
            | BidiClass::EN
            | BidiClass::ES
            | BidiClass::CS
            | BidiClass::ET
            | BidiClass::ON
            | BidiClass::BN
            | BidiClass::NSM
    )
}

/// Apply the six bidi rules
///
/// Labels without R, AL or AN code points pass untouched unless
/// `check_ltr` is set.
pub fn check_bidi(label: &[char], check_ltr: bool) -> IdnaResult<()> {
    if !check_ltr && !is_bidi_label(label) {
        return Ok(());
    }
    let Some(&first) = label.first() else {
        return Ok(());
    };

    // Rule 1
    let rtl = match bidi_class(first) {
        BidiClass::R | BidiClass::AL => true,
        BidiClass::L => false,
        _ => return Err(IdnaError::bidi(BidiRule::FirstCodepoint, 0)),
    };

    let mut valid_ending = false;
    let mut last_significant = 0;
    let mut number_type: Option<BidiClass> = None;

    for (index, cp) in label.iter().enumerate() {
        let class = bidi_class(*cp);

        if rtl {
            // Rule 2
            if !allowed_in_rtl(class) {
                return Err(IdnaError::bidi(BidiRule::RtlDirection, index));
            }
            // Rule 3
            if matches!(class, BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN) {
                valid_ending = true;
            } else if class != BidiClass::NSM {
                valid_ending = false;
            }
            // Rule 4
            if matches!(class, BidiClass::AN | BidiClass::EN) {
                match number_type {
                    None => number_type = Some(class),
                    Some(seen) if seen != class => {
                        return Err(IdnaError::bidi(BidiRule::MixedNumerals, index));
                    }
                    Some(_) => {}
                }
            }
        } else {
            // Rule 5
            if !allowed_in_ltr(class) {
                return Err(IdnaError::bidi(BidiRule::LtrDirection, index));
            }
            // Rule 6
            if matches!(class, BidiClass::L | BidiClass::EN) {
                valid_ending = true;
            } else if class != BidiClass::NSM {
                valid_ending = false;
            }
        }

        if class != BidiClass::NSM {
            last_significant = index;
        }
    }

    if !valid_ending {
        let rule = if rtl {
            BidiRule::RtlEnding
        } else {
            BidiRule::LtrEnding
        };
        return Err(IdnaError::bidi(rule, last_significant));
    }

    Ok(())
}
