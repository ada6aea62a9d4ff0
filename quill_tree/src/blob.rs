//! Contains the [`Blob`] byte container that texts and names build upon.

use std::cmp::Ordering;

use getset::CopyGetters;
use quill_base::position::SrcPos;

/// Is a variable-length container of raw bytes tagged with its source position.
///
/// A blob stores binary data that the language does not interpret in any way; what the bytes
/// mean is left to the kind built on top of it. The storage is owned, so appending or
/// narrowing a blob never affects another holder.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct Blob {
    /// Gets the source position the blob was created at.
    #[get_copy = "pub"]
    position: SrcPos,

    data: Vec<u8>,
}

impl Blob {
    /// Creates a new [`Blob`] with the given bytes.
    #[must_use]
    pub fn new(position: SrcPos, data: impl Into<Vec<u8>>) -> Self {
        Self {
            position,
            data: data.into(),
        }
    }

    /// Gets the bytes of the blob.
    #[must_use]
    pub fn data(&self) -> &[u8] { &self.data }

    /// Gets the number of bytes in the blob.
    #[must_use]
    pub fn len(&self) -> usize { self.data.len() }

    /// Returns `true` if the blob contains no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Appends the given bytes at the end of the blob.
    pub fn append_data(&mut self, data: &[u8]) { self.data.extend_from_slice(data); }

    /// Appends the bytes of another blob at the end of this one.
    pub fn append(&mut self, other: &Self) { self.append_data(other.data()); }

    /// Narrows the blob in place to the `len` bytes starting at `start`.
    pub fn range(&mut self, start: usize, len: usize) {
        assert!(
            start + len <= self.data.len(),
            "the requested range must lie within the blob"
        );

        self.data.drain(..start);
        self.data.truncate(len);
    }

    /// Compares the bytes of two blobs lexicographically, ignoring their positions.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering { self.data.cmp(&other.data) }
}

#[cfg(test)]
mod tests;
