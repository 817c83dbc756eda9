//! Error types for the `static-views` crate

/// Errors raised while building or reading views, bucket tables and maps
///
/// Construction-time variants (sizes, capacities) are fatal to the instance
/// being built; nothing is retried. Access-time variants are reported per
/// call and the view remains usable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Checked access outside of `[0, size)`.
    ///
    /// Raised by [`View::at`](crate::View::at) and friends. The unchecked
    /// accessors never produce this; they have undefined behavior instead.
    #[error("index {index} is out of bounds for a view of size {size}")]
    OutOfBound {
        /// The index that was requested
        index: usize,
        /// The size of the view at the time of the request
        size: usize,
    },

    /// A range did not fit the parent view.
    ///
    /// Produced by the exact variants of drop and take when the count
    /// exceeds the parent's size.
    #[error("range {begin}..{end} is invalid for a view of size {size}")]
    InvalidRange {
        /// First index of the requested range
        begin: usize,
        /// One past the last index of the requested range
        end: usize,
        /// Size of the parent view
        size: usize,
    },

    /// Chunk size is zero or does not evenly divide the parent size.
    #[error("chunk size {chunk} does not evenly divide a view of size {size}")]
    ChunkSize {
        /// Requested number of elements per chunk
        chunk: usize,
        /// Size of the parent view
        size: usize,
    },

    /// A bucket ran out of slots while building a hashed table.
    ///
    /// The table is not resized. Rebuild it with a larger bucket count or
    /// bucket size.
    #[error("bucket {bucket} is full, all {capacity} slots are occupied")]
    BucketFull {
        /// Index of the bucket that overflowed
        bucket: usize,
        /// Number of slots in every bucket
        capacity: usize,
    },

    /// The slot index type is too narrow for the table shape.
    ///
    /// Every slot must be able to hold the empty marker, which equals the
    /// total number of slots.
    #[error("slot index type can hold at most {max}, but the table needs {slots}")]
    SlotOverflow {
        /// Total number of slots, also the value of the empty marker
        slots: usize,
        /// Largest value representable by the slot index type
        max: usize,
    },

    /// Inner views passed to flatten do not all have the same size.
    #[error("inner view {index} has size {size}, expected {expected}")]
    NonUniform {
        /// Position of the first inner view with a different size
        index: usize,
        /// Its size
        size: usize,
        /// Size of the first inner view
        expected: usize,
    },

    /// No element of a static map matched the requested key.
    #[error("key not found")]
    KeyNotFound,
}
