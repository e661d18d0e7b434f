//! Binary-search insertion into sequences that are already sorted.
//!
//! Insertion is *stable*: a new element lands after every existing element
//! that compares equal to it.
//!
//! ```
//! let mut sorted = vec![1, 3, 3, 5];
//! assert_eq!(heapq::insort(&mut sorted, 3), 3);
//! assert_eq!(sorted, [1, 3, 3, 3, 5]);
//! ```

use core::ops::{Bound, RangeBounds};

use alloc::vec::Vec;

use crate::polyfill::is_sorted_by;
use crate::{HeapError, OrdTotalOrder, TotalOrder};


/// The rightmost index at which `x` could be inserted into the sorted `sorted`
/// while keeping it sorted.
pub fn bisect_right<T: Ord>(sorted: &[T], x: &T) -> usize {
    bisect_right_by(sorted, x, &OrdTotalOrder::<T>::new())
}

/// [`bisect_right`] under `order`.
pub fn bisect_right_by<T, O>(sorted: &[T], x: &T, order: &O) -> usize
where
    O: ?Sized + TotalOrder<T>,
{
    sorted.partition_point(|elem| !order.lt(x, elem))
}

/// Inserts `x` into the sorted `sorted`, after any elements equal to it, and
/// returns the index at which it was placed.
///
/// `sorted` must already be in ascending order; this is checked only in debug
/// builds.
pub fn insort<T: Ord>(sorted: &mut Vec<T>, x: T) -> usize {
    insort_by(sorted, x, &OrdTotalOrder::<T>::new())
}

/// [`insort`] under `order`.
pub fn insort_by<T, O>(sorted: &mut Vec<T>, x: T, order: &O) -> usize
where
    O: ?Sized + TotalOrder<T>,
{
    debug_assert!(is_sorted_by(sorted, order));
    let at = bisect_right_by(sorted, &x, order);
    sorted.insert(at, x);
    at
}

/// Inserts `x` into `sorted`, searching only the subslice `range`, and returns
/// the index at which it was placed.
///
/// Only `sorted[range]` needs to be sorted. The insertion point is clamped to the
/// range, so an `x` that sorts outside it lands at the range's nearer end.
///
/// # Errors
///
/// [`HeapError::InvalidRange`] if `range` does not lie within `sorted`; `x` is
/// then dropped and `sorted` left unchanged.
///
/// # Examples
///
/// ```
/// use heapq::HeapError;
///
/// let mut v = vec![9, 1, 2, 4, 0];
/// assert_eq!(heapq::insort_range(&mut v, 3, 1..4), Ok(3));
/// assert_eq!(v, [9, 1, 2, 3, 4, 0]);
///
/// assert_eq!(
///     heapq::insort_range(&mut v, 3, 4..2),
///     Err(HeapError::InvalidRange { lo: 4, hi: 2, len: 6 }),
/// );
/// ```
pub fn insort_range<T, R>(sorted: &mut Vec<T>, x: T, range: R) -> Result<usize, HeapError>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    insort_range_by(sorted, x, range, &OrdTotalOrder::<T>::new())
}

/// [`insort_range`] under `order`.
///
/// # Errors
///
/// [`HeapError::InvalidRange`] if `range` does not lie within `sorted`.
pub fn insort_range_by<T, R, O>(
    sorted: &mut Vec<T>,
    x: T,
    range: R,
    order: &O,
) -> Result<usize, HeapError>
where
    R: RangeBounds<usize>,
    O: ?Sized + TotalOrder<T>,
{
    let (lo, hi) = resolve(&range, sorted.len())?;
    let window = &sorted[lo..hi];
    debug_assert!(is_sorted_by(window, order));
    let at = lo + bisect_right_by(window, &x, order);
    sorted.insert(at, x);
    Ok(at)
}

/// Turns `range` into `lo..hi` with `lo <= hi <= len`.
fn resolve<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<(usize, usize), HeapError> {
    let lo = match range.start_bound() {
        Bound::Included(&lo) => Some(lo),
        Bound::Excluded(&lo) => lo.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let hi = match range.end_bound() {
        Bound::Included(&hi) => hi.checked_add(1),
        Bound::Excluded(&hi) => Some(hi),
        Bound::Unbounded => Some(len),
    };
    match (lo, hi) {
        (Some(lo), Some(hi)) if lo <= hi && hi <= len => Ok((lo, hi)),
        (lo, hi) => Err(HeapError::InvalidRange {
            lo: lo.unwrap_or(usize::MAX),
            hi: hi.unwrap_or(usize::MAX),
            len,
        }),
    }
}
