//! Punycode ([RFC 3492](https://tools.ietf.org/html/rfc3492)) bootstring conversion
//!
//! Works on code points, so `encode` takes a slice of `char` and `decode`
//! returns a vector of them. The `xn--` prefix is not handled here; see
//! [`crate::labels`].

use crate::error::{IdnaError, IdnaResult};

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

const DIGITS: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

#[inline]
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

#[inline]
fn encode_digit(digit: u32) -> char {
    char::from(DIGITS[digit as usize % DIGITS.len()])
}

#[inline]
fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

fn overflow() -> IdnaError {
    IdnaError::punycode("arithmetic overflow")
}

/// Convert code points to Punycode
///
/// Fails only on overflow, which needs inputs far longer than any DNS
/// label.
pub fn encode(input: &[char]) -> IdnaResult<String> {
    let total = u32::try_from(input.len()).map_err(|_| overflow())?;

    let mut output: String = input.iter().filter(|c| c.is_ascii()).collect();
    let basic_length = output.len() as u32;
    if basic_length > 0 {
        output.push(DELIMITER);
    }

    let mut code_point = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_length;

    while processed < total {
        // Smallest code point not yet handled
        let min_code_point = input
            .iter()
            .map(|c| *c as u32)
            .filter(|c| *c >= code_point)
            .min()
            .ok_or_else(overflow)?;

        let increment = (min_code_point - code_point)
            .checked_mul(processed + 1)
            .ok_or_else(overflow)?;
        delta = delta.checked_add(increment).ok_or_else(overflow)?;
        code_point = min_code_point;

        for c in input.iter().map(|c| *c as u32) {
            if c < code_point {
                delta = delta.checked_add(1).ok_or_else(overflow)?;
            }
            if c == code_point {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, processed + 1, processed == basic_length);
                delta = 0;
                processed += 1;
            }
        }

        delta = delta.checked_add(1).ok_or_else(overflow)?;
        code_point = code_point.checked_add(1).ok_or_else(overflow)?;
    }

    Ok(output)
}

/// Convert Punycode to code points
///
/// Digits are case-insensitive. Basic code points before the last
/// delimiter are copied through unchanged.
pub fn decode(input: &str) -> IdnaResult<Vec<char>> {
    if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
        return Err(IdnaError::punycode(format!(
            "non-ASCII code point U+{:04X} in input",
            c as u32
        )));
    }

    let (mut output, extended) = match input.rfind(DELIMITER) {
        Some(position) => (
            input[..position].chars().collect::<Vec<char>>(),
            &input[position + 1..],
        ),
        None => (Vec::new(), input),
    };

    let mut code_point = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i: u32 = 0;
    let mut digits = extended.chars();

    while let Some(first) = digits.next() {
        let previous_i = i;
        let mut weight: u32 = 1;
        let mut k = BASE;
        let mut c = first;

        loop {
            let digit = decode_digit(c)
                .ok_or_else(|| IdnaError::punycode(format!("invalid digit {:?}", c)))?;
            i = digit
                .checked_mul(weight)
                .and_then(|step| i.checked_add(step))
                .ok_or_else(overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            weight = weight.checked_mul(BASE - t).ok_or_else(overflow)?;
            k += BASE;

            c = digits
                .next()
                .ok_or_else(|| IdnaError::punycode("truncated variable-length integer"))?;
        }

        let length = u32::try_from(output.len() + 1).map_err(|_| overflow())?;
        bias = adapt(i - previous_i, length, previous_i == 0);
        code_point = code_point
            .checked_add(i / length)
            .ok_or_else(overflow)?;
        i %= length;

        let decoded = char::from_u32(code_point).ok_or_else(|| {
            IdnaError::punycode(format!("invalid code point {:#x}", code_point))
        })?;
        output.insert(i as usize, decoded);
        i += 1;
    }

    Ok(output)
}
