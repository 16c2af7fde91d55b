//! # Streaming Codec
//!
//! ## Purpose
//!
//! Incremental encode and decode over input that arrives in arbitrary
//! chunks. A label is only transcoded once a separator (or the final
//! chunk) proves it complete; the possibly unfinished tail is held back
//! until the next call.
//!
//! ## Chunk Handling
//!
//! ```text
//! feed("xn--xam")        held "xn--xam"                  → ""
//! feed("ple-9ta.o")      labels ["xn--xample-9ta"], held "o" → "äxample."
//! feed("rg")             held "org"                      → ""
//! feed("", final)        labels ["org"], state cleared   → "org"
//! ```
//!
//! The separator after a complete label is emitted immediately, so the
//! concatenated output of any chunking equals the single-shot result.

use crate::config::IdnaConfig;
use crate::domain::{separators, DomainCodec, STRICT_DOTS};
use crate::error::{IdnaError, IdnaResult};
use crate::labels::ascii_text;
use tracing::{debug, trace};

/// Complete labels found in a chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkSplit {
    /// Labels ready to transcode, in order
    pub labels: Vec<String>,
    /// Output must end with a separator after these labels
    pub delimited: bool,
}

/// Split `held + chunk` into complete labels and the new held text
///
/// A final empty element means the input ended with a separator. Otherwise,
/// unless `final_chunk` is set, the last element may be unfinished and is
/// held back.
pub fn split_chunk(
    held: &str,
    chunk: &str,
    final_chunk: bool,
    separators: &[char],
) -> (ChunkSplit, String) {
    let input = format!("{}{}", held, chunk);
    if input.is_empty() {
        return (ChunkSplit::default(), String::new());
    }

    let mut labels: Vec<String> = input.split(separators).map(str::to_owned).collect();
    let mut held_out = String::new();
    let mut delimited = false;

    if labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
        delimited = true;
    } else if !final_chunk {
        held_out = labels.pop().unwrap_or_default();
        delimited = !labels.is_empty();
    }

    (ChunkSplit { labels, delimited }, held_out)
}

/// Buffering state shared by the stream encoder and decoder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamBuffer {
    /// Possibly incomplete trailing label
    pub held: String,
    /// Output emitted so far ends with a separator
    pub ended_with_delimiter: bool,
    /// A-label octets accounted so far, separators included
    pub octets: usize,
    /// An earlier feed failed
    pub failed: bool,
}

impl StreamBuffer {
    fn ensure_usable(&self) -> IdnaResult<()> {
        if self.failed {
            return Err(IdnaError::StreamAborted);
        }
        Ok(())
    }

    /// Add `octets` of A-label output and check the whole-domain limit,
    /// not counting a separator that may turn out to be the trailing dot
    fn account(&mut self, octets: usize, delimited: bool, codec: &DomainCodec) -> IdnaResult<()> {
        if octets == 0 && !delimited {
            return Ok(());
        }
        self.octets += octets;
        self.ended_with_delimiter = delimited;
        let pending_dot = usize::from(delimited);
        codec.check_domain_length(self.octets - pending_dot)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn join_length(split: &ChunkSplit, label_octets: usize) -> usize {
    label_octets + split.labels.len().saturating_sub(1) + usize::from(split.delimited)
}

/// Run one feed step, marking the buffer failed on error and clearing it
/// after the final chunk
fn guarded<T, F>(buffer: &mut StreamBuffer, final_chunk: bool, step: F) -> IdnaResult<T>
where
    F: FnOnce(&mut StreamBuffer) -> IdnaResult<T>,
{
    buffer.ensure_usable()?;
    match step(buffer) {
        Ok(output) => {
            if final_chunk {
                debug!("Stream flushed after {} octets", buffer.octets);
                buffer.reset();
            }
            Ok(output)
        }
        Err(e) => {
            debug!("Stream failed: {}", e);
            buffer.failed = true;
            Err(e)
        }
    }
}

/// Incremental Unicode → A-label encoder
#[derive(Debug, Clone)]
pub struct StreamEncoder {
    codec: DomainCodec,
    strict_dots: bool,
    buffer: StreamBuffer,
}

impl StreamEncoder {
    pub fn new(codec: DomainCodec, strict_dots: bool) -> Self {
        Self {
            codec,
            strict_dots,
            buffer: StreamBuffer::default(),
        }
    }

    pub fn from_config(config: &IdnaConfig) -> IdnaResult<Self> {
        Ok(Self::new(DomainCodec::from_config(config)?, config.strict_dots))
    }

    pub fn buffer(&self) -> &StreamBuffer {
        &self.buffer
    }

    /// Encode the labels completed by `chunk`
    pub fn feed(&mut self, chunk: &str, final_chunk: bool) -> IdnaResult<Vec<u8>> {
        let codec = &self.codec;
        let seps = separators(self.strict_dots);
        guarded(&mut self.buffer, final_chunk, |buffer| {
            let (split, held) = split_chunk(&buffer.held, chunk, final_chunk, seps);

            let mut output = Vec::new();
            for (index, label) in split.labels.iter().enumerate() {
                if index > 0 {
                    output.push(b'.');
                }
                output.extend(codec.labels().alabel(label)?);
            }
            if split.delimited {
                output.push(b'.');
            }

            buffer.account(output.len(), split.delimited, codec)?;
            buffer.held = held;
            trace!(
                "Stream encoder emitted {} octets (delimited: {}), holding {:?}",
                output.len(),
                buffer.ended_with_delimiter,
                buffer.held
            );
            Ok(output)
        })
    }

    /// Drop all buffered state, including a previous failure
    pub fn reset(&mut self) {
        self.buffer.reset();
    }
}

impl Default for StreamEncoder {
    fn default() -> Self {
        Self::new(DomainCodec::default(), false)
    }
}

/// Incremental A-label → Unicode decoder over ASCII bytes
#[derive(Debug, Clone)]
pub struct StreamDecoder {
    codec: DomainCodec,
    buffer: StreamBuffer,
}

impl StreamDecoder {
    pub fn new(codec: DomainCodec) -> Self {
        Self {
            codec,
            buffer: StreamBuffer::default(),
        }
    }

    pub fn from_config(config: &IdnaConfig) -> IdnaResult<Self> {
        Ok(Self::new(DomainCodec::from_config(config)?))
    }

    pub fn buffer(&self) -> &StreamBuffer {
        &self.buffer
    }

    /// Decode the labels completed by `chunk`
    pub fn feed(&mut self, chunk: &[u8], final_chunk: bool) -> IdnaResult<String> {
        let codec = &self.codec;
        guarded(&mut self.buffer, final_chunk, |buffer| {
            let offset = buffer.octets + buffer.held.len();
            let text = ascii_text(chunk, offset)?;
            let (split, held) = split_chunk(&buffer.held, &text, final_chunk, &STRICT_DOTS);

            let label_octets: usize = split.labels.iter().map(String::len).sum();
            buffer.account(join_length(&split, label_octets), split.delimited, codec)?;

            let mut output = String::new();
            for (index, label) in split.labels.iter().enumerate() {
                if index > 0 {
                    output.push('.');
                }
                output.push_str(&codec.labels().ulabel(label)?);
            }
            if split.delimited {
                output.push('.');
            }

            buffer.held = held;
            trace!(
                "Stream decoder emitted {} code points (delimited: {}), holding {:?}",
                output.chars().count(),
                buffer.ended_with_delimiter,
                buffer.held
            );
            Ok(output)
        })
    }

    /// Drop all buffered state, including a previous failure
    pub fn reset(&mut self) {
        self.buffer.reset();
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new(DomainCodec::default())
    }
}
