//! # IDNA Encode/Decode Demo
//!
//! Converts a handful of domains in both directions, shows the errors
//! produced for invalid labels, and streams a domain in small chunks.
//!
//! Run with `RUST_LOG=idna_codec=trace` to see per-label tracing.

use idna_codec::{decode_bytes, encode, IdnaConfig, StreamDecoder, StreamEncoder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("IDNA2008 Encode/Decode Demo");
    println!("===========================\n");

    demo_domains();
    demo_errors();
    demo_streaming();
}

fn demo_domains() {
    println!("1. Domain conversion");

    for domain in [
        "b\u{00FC}cher.example",
        "\u{6D4B}\u{8BD5}\u{3002}\u{4E2D}\u{56FD}",
        "\u{30C6}\u{30B9}\u{30C8}.xn--zckzah.",
        "\u{0645}\u{0635}\u{0631}.eg",
    ] {
        match encode(domain, false) {
            Ok(bytes) => {
                let ascii = String::from_utf8_lossy(&bytes);
                println!("   {} -> {}", domain, ascii);
                match decode_bytes(&bytes) {
                    Ok(back) => println!("   {} -> {}", ascii, back),
                    Err(e) => println!("   decode failed: {}", e),
                }
            }
            Err(e) => println!("   {} failed: {}", domain, e),
        }
    }
    println!();
}

fn demo_errors() {
    println!("2. Rejected labels");

    for domain in [
        "under_score.example",
        "ab--cd.example",
        "a\u{200D}b.example",
        "\u{05D0}a.example",
        "xn--zz.example",
    ] {
        match encode(domain, false) {
            Ok(bytes) => println!("   {} unexpectedly encoded to {:?}", domain, bytes),
            Err(e) => println!("   {:<24} [{:?}] {}", domain, e.kind(), e),
        }
    }
    println!();
}

fn demo_streaming() {
    println!("3. Streaming");

    let config = IdnaConfig::from_env();
    let mut encoder = match StreamEncoder::from_config(&config) {
        Ok(encoder) => encoder,
        Err(e) => {
            println!("   invalid configuration: {}", e);
            return;
        }
    };

    let mut encoded = Vec::new();
    for chunk in ["\u{00E4}x", "ample.o", "rg"] {
        match encoder.feed(chunk, false) {
            Ok(bytes) => {
                println!("   feed {:?} -> {:?}", chunk, String::from_utf8_lossy(&bytes));
                encoded.extend(bytes);
            }
            Err(e) => println!("   feed {:?} failed: {}", chunk, e),
        }
    }
    if let Ok(tail) = encoder.feed("", true) {
        println!("   final -> {:?}", String::from_utf8_lossy(&tail));
        encoded.extend(tail);
    }

    let mut decoder = StreamDecoder::default();
    let mut decoded = String::new();
    for chunk in encoded.chunks(5) {
        if let Ok(text) = decoder.feed(chunk, false) {
            decoded.push_str(&text);
        }
    }
    if let Ok(tail) = decoder.feed(b"", true) {
        decoded.push_str(&tail);
    }
    println!("   round trip: {}\n", decoded);
}
