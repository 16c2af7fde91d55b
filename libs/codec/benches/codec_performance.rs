//! Performance of domain conversion
//!
//! Covers the happy path in both directions, the streaming codec, and the
//! error path so that rich error construction stays off the hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idna_codec::{punycode, DomainCodec, StreamDecoder, StreamEncoder};

const UNICODE_DOMAIN: &str = "b\u{00FC}cher.\u{6D4B}\u{8BD5}.\u{30C6}\u{30B9}\u{30C8}.example.";
const ASCII_DOMAIN: &str = "xn--bcher-kva.xn--0zwm56d.xn--zckzah.example.";

/// Benchmark whole-domain encode and decode
fn bench_domain_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain_conversion");
    let codec = DomainCodec::default();

    group.bench_function("encode_mixed_domain", |b| {
        b.iter(|| black_box(codec.encode(black_box(UNICODE_DOMAIN), false)));
    });

    group.bench_function("decode_mixed_domain", |b| {
        b.iter(|| black_box(codec.decode_bytes(black_box(ASCII_DOMAIN.as_bytes()))));
    });

    group.bench_function("encode_ldh_domain", |b| {
        b.iter(|| black_box(codec.encode(black_box("www.example.org"), false)));
    });

    group.finish();
}

/// Benchmark raw Punycode transcoding without validation
fn bench_punycode(c: &mut Criterion) {
    let mut group = c.benchmark_group("punycode");
    let label: Vec<char> = "\u{4ED6}\u{4EEC}\u{4E3A}\u{4EC0}\u{4E48}\u{4E0D}\u{8BF4}\u{4E2D}\u{6587}"
        .chars()
        .collect();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(punycode::encode(black_box(&label))));
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(punycode::decode(black_box("ihqwcrb4cv8a8dqg056pqjye"))));
    });

    group.finish();
}

/// Benchmark the streaming codec fed in small chunks
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    group.bench_function("encode_in_chunks", |b| {
        b.iter(|| {
            let mut encoder = StreamEncoder::default();
            let mut output = Vec::new();
            for chunk in ["b\u{00FC}ch", "er.\u{6D4B}", "\u{8BD5}.exa", "mple."] {
                if let Ok(bytes) = encoder.feed(black_box(chunk), false) {
                    output.extend(bytes);
                }
            }
            black_box(encoder.feed("", true).map(|tail| output.len() + tail.len()))
        });
    });

    group.bench_function("decode_in_chunks", |b| {
        b.iter(|| {
            let mut decoder = StreamDecoder::default();
            let mut output = String::new();
            for chunk in ASCII_DOMAIN.as_bytes().chunks(7) {
                if let Ok(text) = decoder.feed(black_box(chunk), false) {
                    output.push_str(&text);
                }
            }
            black_box(decoder.feed(b"", true).map(|tail| output.len() + tail.len()))
        });
    });

    group.finish();
}

/// Benchmark the error path
fn bench_error_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_path");
    let codec = DomainCodec::default();

    group.bench_function("disallowed_codepoint", |b| {
        b.iter(|| black_box(codec.encode(black_box("bad_label.example"), false)));
    });

    group.bench_function("bidi_failure", |b| {
        b.iter(|| black_box(codec.encode(black_box("\u{05D0}a.example"), false)));
    });

    group.bench_function("error_display", |b| {
        let error = codec.encode("bad_label.example", false).unwrap_err();
        b.iter(|| black_box(error.to_string()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_domain_conversion,
    bench_punycode,
    bench_streaming,
    bench_error_path
);
criterion_main!(benches);
