//! # Packed Integer Set
//!
//! ## Purpose
//!
//! Immutable set of unsigned 32-bit integers stored as a flat buffer of
//! big-endian entries, sorted so that a binary search over the raw bytes
//! answers membership without ever deserializing into a hash set. The
//! classification tables hold well over a hundred thousand code points
//! and are queried for every character of every label, so lookups must
//! stay cheap and the storage must stay compact.
//!
//! ## Layout
//!
//! ```text
//! shared buffer:  [ PVALID entries ........ | CONTEXTJ | CONTEXTO | Greek ... ]
//!                   ↑ start            end ↑
//! PackedIntSet::with_range(buffer, start, end) views one category in place
//! ```
//!
//! Big-endian byte order makes lexicographic byte order equal to numeric
//! order, so the buffer is sorted in both senses at once.

use crate::error::{IntSetError, IntSetResult};
use byteorder::{BigEndian, ByteOrder};
use std::cmp::Ordering;
use std::fmt;

/// Width in bytes of one packed entry
pub const ENTRY_WIDTH: usize = 4;

/// Largest value the packed format can hold
pub const MAX_VALUE: u64 = u32::MAX as u64;

fn checked_u32(value: u64) -> IntSetResult<u32> {
    u32::try_from(value).map_err(|_| IntSetError::OutOfRange {
        value,
        max: MAX_VALUE,
    })
}

/// Pack arbitrary values into a sorted, deduplicated big-endian buffer
///
/// Fails with [`IntSetError::OutOfRange`] on the first value that does
/// not fit in 32 bits; nothing is returned for a partially valid input.
pub fn pack<I>(values: I) -> IntSetResult<Vec<u8>>
where
    I: IntoIterator<Item = u64>,
{
    let ints = values
        .into_iter()
        .map(checked_u32)
        .collect::<IntSetResult<Vec<u32>>>()?;
    Ok(pack_u32(ints))
}

/// Pack values that are already 32-bit; cannot fail
pub fn pack_u32<I>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = u32>,
{
    let mut ints: Vec<u32> = values.into_iter().collect();
    ints.sort_unstable();
    ints.dedup();

    let mut buffer = vec![0u8; ints.len() * ENTRY_WIDTH];
    for (slot, value) in buffer.chunks_exact_mut(ENTRY_WIDTH).zip(&ints) {
        BigEndian::write_u32(slot, *value);
    }
    buffer
}

/// Read-only view over packed entries
#[derive(Clone, Copy)]
pub struct PackedIntSet<'a> {
    data: &'a [u8],
}

impl<'a> PackedIntSet<'a> {
    /// View an entire packed buffer
    pub fn new(data: &'a [u8]) -> IntSetResult<Self> {
        Self::with_range(data, 0, data.len())
    }

    /// View the `start..end` byte window of a larger shared buffer
    pub fn with_range(data: &'a [u8], start: usize, end: usize) -> IntSetResult<Self> {
        if start > end || end > data.len() {
            return Err(IntSetError::RangeOutOfBounds {
                start,
                end,
                buffer_len: data.len(),
            });
        }
        let length = end - start;
        if start % ENTRY_WIDTH != 0 || length % ENTRY_WIDTH != 0 {
            return Err(IntSetError::Misaligned {
                offset: start,
                length,
                width: ENTRY_WIDTH,
            });
        }
        Ok(Self {
            data: &data[start..end],
        })
    }

    /// View a window the caller has already aligned to whole entries
    pub(crate) fn from_aligned(data: &'a [u8]) -> Self {
        debug_assert_eq!(data.len() % ENTRY_WIDTH, 0);
        Self { data }
    }

    /// Number of entries in the view
    pub fn len(&self) -> usize {
        self.data.len() / ENTRY_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn entry(&self, index: usize) -> u32 {
        let offset = index * ENTRY_WIDTH;
        BigEndian::read_u32(&self.data[offset..offset + ENTRY_WIDTH])
    }

    /// Membership test for a value already known to fit in 32 bits
    pub fn contains_u32(&self, value: u32) -> bool {
        let (mut low, mut high) = (0, self.len());
        while low < high {
            let mid = low + (high - low) / 2;
            match self.entry(mid).cmp(&value) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Membership test; values above `u32::MAX` are rejected, not reported absent
    pub fn contains(&self, value: u64) -> IntSetResult<bool> {
        Ok(self.contains_u32(checked_u32(value)?))
    }

    /// Entries in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        self.data.chunks_exact(ENTRY_WIDTH).map(BigEndian::read_u32)
    }
}

impl fmt::Debug for PackedIntSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedIntSet")
            .field("entries", &self.len())
            .finish()
    }
}
