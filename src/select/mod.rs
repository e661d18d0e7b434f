//! Order statistics: the `n` smallest or largest elements of a dataset, in
//! order, without sorting all of it.
//!
//! Both queries take ownership of their input and work inside it, so any
//! `IntoIterator` will do: a `Vec`, an array, or a borrowing iterator such as
//! `slice.iter()` (yielding references, ordered through them).
//!
//! ```
//! let words = ["pear", "fig", "banana", "kiwis"];
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//!
//! assert_eq!(heapq::nsmallest_by(2, words, &by_len), ["fig", "pear"]);
//! assert_eq!(heapq::nlargest(1, words.iter()), [&"pear"]);
//! ```

use core::iter;

use alloc::vec::Vec;

use crate::bisect::insort_by;
use crate::heapq::{heapify_by, pop_by, pushpop_by};
use crate::{OrdTotalOrder, TotalOrder};


/// Crossover factor between the two [`nsmallest`] strategies.
///
/// When `n * DEFAULT_CROSSOVER <= len`, `n` is considered small and a sorted
/// window of `n` elements is maintained by insertion (*O*(*len* · *n*) with a
/// low constant). Otherwise the whole input is heapified and popped
/// (*O*(*len* + *n* · log(*len*))). The value is a tuning heuristic; use
/// [`nsmallest_by_with_crossover`] to pick another.
pub const DEFAULT_CROSSOVER: usize = 10;

/// The `n` largest elements of `data`, in descending order.
///
/// Returns every element, sorted, when `n` is at least the number of elements.
///
/// # Examples
///
/// ```
/// assert_eq!(heapq::nlargest(2, [3, 1, 4, 1, 5, 9, 2, 6]), [9, 6]);
/// assert!(heapq::nlargest(0, [3, 1, 4]).is_empty());
/// ```
pub fn nlargest<T, I>(n: usize, data: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    nlargest_by(n, data, &OrdTotalOrder::<T>::new())
}

/// [`nlargest`] under `order`.
///
/// A min-heap of the first `n` elements is kept as the `n` largest seen so far,
/// each further element being streamed through it with [`pushpop_by`], for a
/// total of *O*(*len* · log(*n*)).
pub fn nlargest_by<T, I, O>(n: usize, data: I, order: &O) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    O: ?Sized + TotalOrder<T>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut data = data.into_iter();
    let mut result: Vec<T> = data.by_ref().take(n).collect();
    if result.is_empty() {
        return result;
    }

    heapify_by(&mut result, order);
    for elem in data {
        pushpop_by(&mut result, elem, order);
    }

    result.sort_by(|a, b| order.cmp(a, b));
    result.reverse();
    result
}

/// The `n` smallest elements of `data`, in ascending order.
///
/// Returns every element, sorted, when `n` is at least the number of elements.
///
/// # Examples
///
/// ```
/// assert_eq!(heapq::nsmallest(3, [3, 1, 4, 1, 5, 9, 2, 6]), [1, 1, 2]);
/// assert_eq!(heapq::nsmallest(9, [3, 1, 4]), [1, 3, 4]);
/// ```
pub fn nsmallest<T, I>(n: usize, data: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    nsmallest_by(n, data, &OrdTotalOrder::<T>::new())
}

/// [`nsmallest`] under `order`.
pub fn nsmallest_by<T, I, O>(n: usize, data: I, order: &O) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    O: ?Sized + TotalOrder<T>,
{
    nsmallest_by_with_crossover(n, data, order, DEFAULT_CROSSOVER)
}

/// [`nsmallest_by`] with an explicit strategy crossover in place of
/// [`DEFAULT_CROSSOVER`].
///
/// `crossover` affects only the cost of the query; the result is the same up to
/// the arrangement of elements that compare equal.
pub fn nsmallest_by_with_crossover<T, I, O>(
    n: usize,
    data: I,
    order: &O,
    crossover: usize,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    O: ?Sized + TotalOrder<T>,
{
    let mut data: Vec<T> = data.into_iter().collect();

    if n.saturating_mul(crossover) <= data.len() {
        // Few wanted: keep the best `n` sorted, inserting anything that beats
        // the current worst and then dropping the worst.
        let rest = data.split_off(n.min(data.len()));
        let mut result = data;
        result.sort_by(|a, b| order.cmp(a, b));
        for elem in rest {
            let beats_worst = match result.last() {
                Some(worst) => order.lt(&elem, worst),
                None => return result,
            };
            if beats_worst {
                insort_by(&mut result, elem, order);
                result.pop();
            }
        }
        return result;
    }

    heapify_by(&mut data, order);
    let k = n.min(data.len());
    iter::from_fn(|| pop_by(&mut data, order).ok()).take(k).collect()
}
