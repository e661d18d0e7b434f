//! The error type shared by every fallible operation in this crate.

use thiserror::Error;

/// The reasons a heap or insertion operation can fail.
///
/// Errors surface synchronously to the immediate caller; no operation retries or
/// recovers internally, and a failed call leaves the sequence untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The operation needs the root of the heap, but the heap holds no elements.
    #[error("heap is empty")]
    EmptyHeap,

    /// The search range handed to a sorted-insertion helper does not lie within
    /// the sequence.
    #[error("range {lo}..{hi} is invalid for a sequence of length {len}")]
    InvalidRange {
        /// Resolved inclusive lower bound.
        lo: usize,
        /// Resolved exclusive upper bound.
        hi: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(HeapError::EmptyHeap.to_string(), "heap is empty");
        assert_eq!(
            HeapError::InvalidRange { lo: 4, hi: 2, len: 3 }.to_string(),
            "range 4..2 is invalid for a sequence of length 3"
        );
    }

    #[test]
    fn is_an_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&HeapError::EmptyHeap);
    }
}
