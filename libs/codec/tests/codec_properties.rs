//! Codec Property Tests
//!
//! Properties that must hold for any valid input: labels round-trip
//! through their A-label form, and streaming output never depends on
//! where the input was split.

use idna_codec::{
    alabel, decode_bytes, encode, ulabel, StreamDecoder, StreamEncoder, LENIENT_DOTS,
};
use proptest::prelude::*;

/// Labels drawn from Latin, Han and Katakana PVALID code points
fn label_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9\u{00E4}\u{00F6}\u{00FC}\u{00E9}\u{6D4B}\u{8BD5}\u{30C6}\u{30B9}]{1,8}"
}

fn domain_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(label_strategy(), 1..4), any::<bool>()).prop_map(
        |(labels, trailing_dot)| {
            let mut domain = labels.join(".");
            if trailing_dot {
                domain.push('.');
            }
            domain
        },
    )
}

/// Domains whose separators are any of the lenient full stops
fn lenient_domain_strategy() -> impl Strategy<Value = String> {
    let label_with_separator = (label_strategy(), prop::sample::select(LENIENT_DOTS.to_vec()));
    (
        prop::collection::vec(label_with_separator, 1..4),
        any::<bool>(),
    )
        .prop_map(|(labels, trailing_dot)| {
            let mut domain = String::new();
            let count = labels.len();
            for (index, (label, separator)) in labels.into_iter().enumerate() {
                domain.push_str(&label);
                if index + 1 < count || trailing_dot {
                    domain.push(separator);
                }
            }
            domain
        })
}

/// Split `text` at the given code point counts
fn chunks_of(text: &str, cuts: &[usize]) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (chars.len() + 1)).collect();
    points.push(0);
    points.push(chars.len());
    points.sort_unstable();
    points.dedup();
    points
        .windows(2)
        .map(|w| chars[w[0]..w[1]].iter().collect())
        .collect()
}

proptest! {
    #[test]
    fn label_round_trips_through_alabel(label in label_strategy()) {
        let encoded = alabel(&label).unwrap();
        prop_assert!(encoded.is_ascii());
        let text = String::from_utf8(encoded).unwrap();
        let decoded = ulabel(&text).unwrap();
        prop_assert_eq!(&decoded, &label);
        prop_assert_eq!(alabel(&decoded).unwrap(), text.into_bytes());
    }

    #[test]
    fn domain_round_trips(domain in domain_strategy()) {
        let encoded = encode(&domain, true).unwrap();
        prop_assert_eq!(decode_bytes(&encoded).unwrap(), domain);
    }

    #[test]
    fn stream_encoder_matches_single_shot(
        domain in lenient_domain_strategy(),
        cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let expected = encode(&domain, false).unwrap();

        let mut encoder = StreamEncoder::default();
        let mut output = Vec::new();
        for chunk in chunks_of(&domain, &cuts) {
            output.extend(encoder.feed(&chunk, false).unwrap());
        }
        output.extend(encoder.feed("", true).unwrap());
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn stream_decoder_matches_single_shot(
        domain in domain_strategy(),
        cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let encoded = String::from_utf8(encode(&domain, true).unwrap()).unwrap();

        let mut decoder = StreamDecoder::default();
        let mut output = String::new();
        for chunk in chunks_of(&encoded, &cuts) {
            output.push_str(&decoder.feed(chunk.as_bytes(), false).unwrap());
        }
        output.push_str(&decoder.feed(b"", true).unwrap());
        prop_assert_eq!(output, domain);
    }
}
