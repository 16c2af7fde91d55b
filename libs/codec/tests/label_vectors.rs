//! # Country Code TLD Label Vectors
//!
//! Every internationalized country code top-level domain label paired
//! with its registered A-label. Covers Han, Hangul, Indic scripts, Arabic
//! (right-to-left, with joining letters), Cyrillic, Greek, Georgian, Thai
//! and Katakana.

use idna_codec::{alabel, check_label, ulabel, ulabel_bytes};

const TLD_LABELS: &[(&str, &str)] = &[
    ("\u{6D4B}\u{8BD5}", "xn--0zwm56d"),
    ("\u{092A}\u{0930}\u{0940}\u{0915}\u{094D}\u{0937}\u{093E}", "xn--11b5bs3a9aj6g"),
    ("\u{D55C}\u{AD6D}", "xn--3e0b707e"),
    ("\u{09AD}\u{09BE}\u{09B0}\u{09A4}", "xn--45brj9c"),
    ("\u{09AC}\u{09BE}\u{0982}\u{09B2}\u{09BE}", "xn--54b7fta0cc"),
    ("\u{0438}\u{0441}\u{043F}\u{044B}\u{0442}\u{0430}\u{043D}\u{0438}\u{0435}", "xn--80akhbyknj4f"),
    ("\u{0441}\u{0440}\u{0431}", "xn--90a3ac"),
    ("\u{D14C}\u{C2A4}\u{D2B8}", "xn--9t4b11yi5a"),
    ("\u{0B9A}\u{0BBF}\u{0B99}\u{0BCD}\u{0B95}\u{0BAA}\u{0BCD}\u{0BAA}\u{0BC2}\u{0BB0}\u{0BCD}", "xn--clchc0ea0b2g2a9gcd"),
    ("\u{05D8}\u{05E2}\u{05E1}\u{05D8}", "xn--deba0ad"),
    ("\u{4E2D}\u{56FD}", "xn--fiqs8s"),
    ("\u{4E2D}\u{570B}", "xn--fiqz9s"),
    ("\u{0C2D}\u{0C3E}\u{0C30}\u{0C24}\u{0C4D}", "xn--fpcrj9c3d"),
    ("\u{0DBD}\u{0D82}\u{0D9A}\u{0DCF}", "xn--fzc2c9e2c"),
    ("\u{6E2C}\u{8A66}", "xn--g6w251d"),
    ("\u{0AAD}\u{0ABE}\u{0AB0}\u{0AA4}", "xn--gecrj9c"),
    ("\u{092D}\u{093E}\u{0930}\u{0924}", "xn--h2brj9c"),
    ("\u{0622}\u{0632}\u{0645}\u{0627}\u{06CC}\u{0634}\u{06CC}", "xn--hgbk6aj7f53bba"),
    ("\u{0BAA}\u{0BB0}\u{0BBF}\u{0B9F}\u{0BCD}\u{0B9A}\u{0BC8}", "xn--hlcj6aya9esc7a"),
    ("\u{0443}\u{043A}\u{0440}", "xn--j1amh"),
    ("\u{9999}\u{6E2F}", "xn--j6w193g"),
    ("\u{03B4}\u{03BF}\u{03BA}\u{03B9}\u{03BC}\u{03AE}", "xn--jxalpdlp"),
    ("\u{0625}\u{062E}\u{062A}\u{0628}\u{0627}\u{0631}", "xn--kgbechtv"),
    ("\u{53F0}\u{6E7E}", "xn--kprw13d"),
    ("\u{53F0}\u{7063}", "xn--kpry57d"),
    ("\u{0627}\u{0644}\u{062C}\u{0632}\u{0627}\u{0626}\u{0631}", "xn--lgbbat1ad8j"),
    ("\u{0639}\u{0645}\u{0627}\u{0646}", "xn--mgb9awbf"),
    ("\u{0627}\u{06CC}\u{0631}\u{0627}\u{0646}", "xn--mgba3a4f16a"),
    ("\u{0627}\u{0645}\u{0627}\u{0631}\u{0627}\u{062A}", "xn--mgbaam7a8h"),
    ("\u{067E}\u{0627}\u{06A9}\u{0633}\u{062A}\u{0627}\u{0646}", "xn--mgbai9azgqp6j"),
    ("\u{0627}\u{0644}\u{0627}\u{0631}\u{062F}\u{0646}", "xn--mgbayh7gpa"),
    ("\u{0628}\u{06BE}\u{0627}\u{0631}\u{062A}", "xn--mgbbh1a71e"),
    ("\u{0627}\u{0644}\u{0645}\u{063A}\u{0631}\u{0628}", "xn--mgbc0a9azcg"),
    ("\u{0627}\u{0644}\u{0633}\u{0639}\u{0648}\u{062F}\u{064A}\u{0629}", "xn--mgberp4a5d4ar"),
    ("\u{10D2}\u{10D4}", "xn--node"),
    ("\u{0E44}\u{0E17}\u{0E22}", "xn--o3cw4h"),
    ("\u{0633}\u{0648}\u{0631}\u{064A}\u{0629}", "xn--ogbpf8fl"),
    ("\u{0440}\u{0444}", "xn--p1ai"),
    ("\u{062A}\u{0648}\u{0646}\u{0633}", "xn--pgbs0dh"),
    ("\u{0A2D}\u{0A3E}\u{0A30}\u{0A24}", "xn--s9brj9c"),
    ("\u{0645}\u{0635}\u{0631}", "xn--wgbh1c"),
    ("\u{0642}\u{0637}\u{0631}", "xn--wgbl6a"),
    ("\u{0B87}\u{0BB2}\u{0B99}\u{0BCD}\u{0B95}\u{0BC8}", "xn--xkc2al3hye2a"),
    ("\u{0B87}\u{0BA8}\u{0BCD}\u{0BA4}\u{0BBF}\u{0BAF}\u{0BBE}", "xn--xkc2dl3a5ee0h"),
    ("\u{65B0}\u{52A0}\u{5761}", "xn--yfro4i67o"),
    ("\u{0641}\u{0644}\u{0633}\u{0637}\u{064A}\u{0646}", "xn--ygbi2ammx"),
    ("\u{30C6}\u{30B9}\u{30C8}", "xn--zckzah"),
    ("\u{049B}\u{0430}\u{0437}", "xn--80ao21a"),
    ("\u{0645}\u{0644}\u{064A}\u{0633}\u{064A}\u{0627}", "xn--mgbx4cd0ab"),
    ("\u{043C}\u{043E}\u{043D}", "xn--l1acc"),
    ("\u{0633}\u{0648}\u{062F}\u{0627}\u{0646}", "xn--mgbpl2fh"),
];

/// Test 1: Every U-label encodes to its registered A-label
#[test]
fn test_tld_alabels() {
    for (u, a) in TLD_LABELS {
        assert_eq!(
            alabel(u).unwrap(),
            a.as_bytes(),
            "alabel({:?}) should be {}",
            u,
            a
        );
    }
}

/// Test 2: Every registered A-label decodes to its U-label
#[test]
fn test_tld_ulabels() {
    for (u, a) in TLD_LABELS {
        assert_eq!(ulabel(a).unwrap(), *u, "ulabel({}) should be {:?}", a, u);
        assert_eq!(ulabel_bytes(a.as_bytes()).unwrap(), *u);
    }
}

/// Test 3: Upper case A-labels decode the same way
#[test]
fn test_tld_ulabels_case_insensitive() {
    for (u, a) in TLD_LABELS {
        assert_eq!(ulabel(&a.to_ascii_uppercase()).unwrap(), *u);
    }
}

/// Test 4: Every U-label passes the full label check
#[test]
fn test_tld_labels_are_valid() {
    for (u, _) in TLD_LABELS {
        assert!(check_label(u).is_ok(), "{:?} should be a valid label", u);
    }
}

/// Test 5: A-labels are accepted unchanged by alabel
#[test]
fn test_tld_alabels_are_idempotent() {
    for (_, a) in TLD_LABELS {
        assert_eq!(alabel(a).unwrap(), a.as_bytes());
    }
}
