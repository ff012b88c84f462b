//! Chunking and sequence helpers for staging payloads into link-sized windows
use crate::codec::{hex_to_bytes, to_hex};
use crate::ErrorKind;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

/// Restartable partition of a slice into chunks of at most **size** elements
///
/// Chunk `i` covers `[i * size, min((i + 1) * size, len))`, only the last chunk may be shorter.
/// Concatenating the chunks in order gives the original slice back.
#[derive(Debug, Clone, Copy)]
pub struct ChunkPlan<'a, T> {
    data: &'a [T],
    size: usize,
}

impl<'a, T> ChunkPlan<'a, T> {
    /// Errors:
    ///
    /// * **InvalidChunkSize** size is zero
    pub fn new(data: &'a [T], size: usize) -> Result<Self, ErrorKind> {
        if size == 0 {
            return Err(ErrorKind::InvalidChunkSize);
        }
        Ok(Self { data, size })
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.size
    }

    /// Number of chunks, zero for an empty slice
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len().div_ceil(self.size)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn range(&self, index: usize) -> Option<Range<usize>> {
        let start = index.checked_mul(self.size)?;
        if start >= self.data.len() {
            return None;
        }
        let end = start.saturating_add(self.size).min(self.data.len());
        Some(start..end)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a [T]> {
        self.range(index).map(|r| &self.data[r])
    }

    /// Iterate from the first chunk, may be called any number of times
    #[inline]
    pub fn iter(&self) -> core::slice::Chunks<'a, T> {
        self.data.chunks(self.size)
    }
}

impl<'a, T: Clone> ChunkPlan<'a, T> {
    pub fn to_vecs(&self) -> Vec<Vec<T>> {
        self.iter().map(<[T]>::to_vec).collect()
    }
}

impl<'a, T> IntoIterator for ChunkPlan<'a, T> {
    type Item = &'a [T];
    type IntoIter = core::slice::Chunks<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, T> IntoIterator for &'b ChunkPlan<'a, T> {
    type Item = &'a [T];
    type IntoIter = core::slice::Chunks<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split data into chunks of at most **size** elements (eager form of [`ChunkPlan`])
///
/// Errors:
///
/// * **InvalidChunkSize** size is zero
pub fn chunk<T: Clone>(data: &[T], size: usize) -> Result<Vec<Vec<T>>, ErrorKind> {
    Ok(ChunkPlan::new(data, size)?.to_vecs())
}

/// Split a hex image into hex chunks of at most **bytes_per_chunk** bytes each
///
/// Errors:
///
/// * **MalformedHex** the input is not valid hex
/// * **InvalidChunkSize** bytes_per_chunk is zero
pub fn chunk_hex(hex: &str, bytes_per_chunk: usize) -> Result<Vec<String>, ErrorKind> {
    let data = hex_to_bytes(hex)?;
    Ok(ChunkPlan::new(&data, bytes_per_chunk)?
        .iter()
        .map(to_hex)
        .collect())
}

/// Split into two halves by count, an odd element goes to the first half
pub fn split<T: Clone>(data: &[T]) -> (Vec<T>, Vec<T>) {
    let (first, second) = data.split_at(data.len().div_ceil(2));
    (first.to_vec(), second.to_vec())
}

/// Concatenate chunks back into one sequence
pub fn merge<T: Clone, C: AsRef<[T]>>(chunks: &[C]) -> Vec<T> {
    let mut result = Vec::with_capacity(chunks.iter().map(|c| c.as_ref().len()).sum());
    for c in chunks {
        result.extend_from_slice(c.as_ref());
    }
    result
}

#[inline]
pub fn append<T: Clone>(objects: &[T], target: &mut Vec<T>) {
    target.extend_from_slice(objects);
}

/// Plain order inversion of the whole sequence
///
/// Unlike [`crate::codec::swap_endianness_hex`] this knows nothing about field widths.
pub fn reverse<T: Clone>(data: &[T]) -> Vec<T> {
    data.iter().rev().cloned().collect()
}
