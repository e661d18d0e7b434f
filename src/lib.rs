//! Binary min-heap algorithms that sort according to a specified comparator
//! rather than the [`Ord`] trait.
//!
//! The crate offers two faces over the same engine:
//!
//! * free functions in [`heapq`] (re-exported at the crate root) that operate in
//!   place on a caller-owned [`Vec`] or slice, borrowed mutably for the duration
//!   of each call; and
//! * [`Heap`], an owning priority queue that binds one comparator to its own
//!   storage for its whole lifetime.
//!
//! Every operation has a natural-order form that relies on [`Ord`] and a `_by`
//! form that takes any [`TotalOrder`], including plain closures returning an
//! [`Ordering`](core::cmp::Ordering).
//!
//! ```
//! let mut data = vec![5, 1, 4, 2, 8];
//! heapq::heapify(&mut data);
//! assert!(heapq::is_heap(&data));
//!
//! let mut drained = Vec::new();
//! while let Ok(x) = heapq::pop(&mut data) {
//!     drained.push(x);
//! }
//! assert_eq!(drained, [1, 2, 4, 5, 8]);
//!
//! assert_eq!(heapq::nlargest(2, [3, 1, 4, 1, 5, 9, 2, 6]), [9, 6]);
//! assert_eq!(heapq::nsmallest(3, [3, 1, 4, 1, 5, 9, 2, 6]), [1, 1, 2]);
//! ```
//!
//! It is a logic error to use different comparators on the same sequence: the
//! heap invariant only holds with respect to the order it was built under. The
//! behavior resulting from such a logic error is not specified, but will not
//! result in undefined behavior.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

extern crate alloc;

mod polyfill;

pub mod binary_heap;
pub mod bisect;
pub mod error;
pub mod heapq;
pub mod order;
pub mod select;

pub use binary_heap::Heap;
pub use bisect::{
    bisect_right, bisect_right_by, insort, insort_by, insort_range, insort_range_by,
};
pub use error::HeapError;
pub use heapq::{
    heapify, heapify_by, is_heap, is_heap_by, pop, pop_by, push, push_by, pushpop, pushpop_by,
    replace, replace_by,
};
pub use order::{OrdTotalOrder, TotalOrder};
pub use select::{
    nlargest, nlargest_by, nsmallest, nsmallest_by, nsmallest_by_with_crossover,
    DEFAULT_CROSSOVER,
};
