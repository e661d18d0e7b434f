//! An owning priority queue implemented with a binary min-heap.
//!
//! [`Heap`] bundles a [`TotalOrder`] with the vector it keeps in heap order, so
//! that the same comparator is guaranteed to be used for every operation. The
//! free functions in [`heapq`](crate::heapq) are the engine underneath.
//!
//! # Examples
//!
//! A task queue popping the most urgent task first, ordered by a closure:
//!
//! ```
//! use heapq::Heap;
//!
//! struct Task {
//!     urgency: u8,
//!     name: &'static str,
//! }
//!
//! let mut queue = Heap::new(|a: &Task, b: &Task| b.urgency.cmp(&a.urgency));
//! queue.push(Task { urgency: 1, name: "water plants" });
//! queue.push(Task { urgency: 9, name: "put out fire" });
//! queue.push(Task { urgency: 5, name: "pay rent" });
//!
//! let order: Vec<_> = core::iter::from_fn(|| queue.pop().ok()).map(|t| t.name).collect();
//! assert_eq!(order, ["put out fire", "pay rent", "water plants"]);
//! ```

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem::swap;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::heapq::{self, sift_toward_leaves};
use crate::{HeapError, OrdTotalOrder, TotalOrder};


/// A priority queue implemented with a binary heap.
///
/// This will be a min-heap under its order `O`, which defaults to the natural
/// [`Ord`] order of `T`.
///
/// It is a logic error for an item to be modified in such a way that the item's
/// ordering relative to any other item, as determined by the heap's order,
/// changes while it is in the heap. This is normally only possible through
/// interior mutability, global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated
/// to the `Heap` that observed the logic error and not result in undefined
/// behavior.
///
/// ```
/// use heapq::{Heap, HeapError};
///
/// let mut heap: Heap<i32> = Heap::default();
/// assert!(heap.is_empty());
///
/// heap.push(5);
/// heap.push(1);
/// heap.push(3);
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.peek(), Some(&1));
///
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek] | [heapify] |
/// |---------------|---------------|--------|-----------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1) | *O*(*n*)  |
///
/// [push]: Heap::push
/// [pop]: Heap::pop
/// [peek]: Heap::peek
/// [heapify]: Heap::heapify
pub struct Heap<T, O = OrdTotalOrder<T>> {
    data: Vec<T>,
    order: O,
}

impl<T: Clone, O: Clone> Clone for Heap<T, O> {
    fn clone(&self) -> Self {
        Heap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: TotalOrder<T> + Default> Default for Heap<T, O> {
    /// Creates an empty `Heap` under the default order.
    #[inline]
    fn default() -> Heap<T, O> {
        Heap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O: TotalOrder<T>> Heap<T, O> {
    /// Creates an empty `Heap` ordered by `order`.
    #[must_use]
    pub fn new(order: O) -> Heap<T, O> {
        Heap { data: Vec::new(), order }
    }

    /// Creates an empty `Heap` ordered by `order`, with room for at least
    /// `capacity` elements before reallocating.
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> Heap<T, O> {
        Heap { data: Vec::with_capacity(capacity), order }
    }

    /// Builds a `Heap` ordered by `order` out of `vec`, in *O*(*n*) time.
    pub fn from_vec(mut vec: Vec<T>, order: O) -> Heap<T, O> {
        heapq::heapify_by(&mut vec, &order);
        Heap { data: vec, order }
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        heapq::push_by(&mut self.data, item, &self.order)
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        heapq::pop_by(&mut self.data, &self.order)
    }

    /// Replaces the smallest item with `item`, returning the former even if it
    /// sorts after `item`.
    ///
    /// ```
    /// let mut heap: heapq::Heap<_> = heapq::Heap::from(vec![4, 6]);
    /// assert_eq!(heap.replace(9), Ok(4));
    /// assert_eq!(heap.replace(1), Ok(6));
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Errors
    ///
    /// [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn replace(&mut self, item: T) -> Result<T, HeapError> {
        heapq::replace_by(&mut self.data, item, &self.order)
    }

    /// Pushes `item` and pops the smallest item in one step.
    ///
    /// If the heap is empty, or `item` sorts before or equal to the smallest item,
    /// `item` is returned and the heap is not touched.
    ///
    /// ```
    /// let mut heap: heapq::Heap<_> = heapq::Heap::from(vec![4, 6]);
    /// assert_eq!(heap.pushpop(2), 2);
    /// assert_eq!(heap.pushpop(5), 4);
    /// assert_eq!(heap.into_sorted_vec(), [5, 6]);
    /// ```
    pub fn pushpop(&mut self, item: T) -> T {
        heapq::pushpop_by(&mut self.data, item, &self.order)
    }

    /// Re-establishes the heap invariant over the whole heap.
    ///
    /// The heap's storage is private, so this is only needed if an element's
    /// ordering was changed from under the heap; see the type-level docs.
    pub fn heapify(&mut self) {
        heapq::heapify_by(&mut self.data, &self.order)
    }

    /// Consumes the `Heap` and returns a vector in ascending order.
    ///
    /// ```
    /// use heapq::Heap;
    ///
    /// let mut heap: Heap<_> = Heap::from(vec![1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included),
            //  so `0 < end` and the sifted prefix is not empty.
            unsafe { sift_toward_leaves(&mut self.data[..end], 0, &self.order) };
        }
        // Repeatedly moving the smallest to the back leaves them descending.
        self.data.reverse();
        self.into_vec()
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// Both heaps are expected to share an order; the result is ordered by the
    /// order of whichever held more elements.
    pub fn append(&mut self, other: &mut Self) {
        if self.len() < other.len() {
            swap(self, other);
        }
        let start = self.data.len();
        self.data.append(&mut other.data);
        if start == 0 {
            self.heapify();
        } else {
            for i in start..self.data.len() {
                // SAFETY: i < self.data.len()
                unsafe { heapq::sift_toward_root(&mut self.data, 0, i, &self.order) };
            }
        }
    }

    /// The order this heap was created with.
    pub fn order(&self) -> &O {
        &self.order
    }
}

impl<T, O> Heap<T, O> {
    /// Returns an iterator visiting all values in the underlying vector, in
    /// heap layout order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the smallest item in the heap, or `None` if it is empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns a slice of all values in the underlying vector, in heap layout
    /// order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns a copy of the underlying vector, in heap layout order.
    ///
    /// The layout satisfies the heap invariant but is otherwise unspecified;
    /// only the first element is guaranteed to be the smallest.
    ///
    /// ```
    /// let heap: heapq::Heap<_> = heapq::Heap::from(vec![3, 1, 2]);
    /// let snapshot = heap.to_vec();
    /// assert_eq!(snapshot.len(), 3);
    /// assert_eq!(snapshot[0], 1);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the `Heap` and returns the underlying vector in heap layout
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// An iterator over the elements of a `Heap`, in heap layout order.
///
/// This `struct` is created by [`Heap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T, O: TotalOrder<T> + Default> From<Vec<T>> for Heap<T, O> {
    /// Converts a `Vec<T>` into a `Heap<T, O>` under the default order.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Heap<T, O> {
        Heap::from_vec(vec, O::default())
    }
}

impl<T, O: TotalOrder<T> + Default, const N: usize> From<[T; N]> for Heap<T, O> {
    /// ```
    /// use heapq::Heap;
    ///
    /// let mut h1: Heap<_> = Heap::from([1, 4, 2, 3]);
    /// let mut h2: Heap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().ok().zip(h2.pop().ok()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<Heap<T, O>> for Vec<T> {
    /// Converts a `Heap<T, O>` into a `Vec<T>`, in heap layout order.
    fn from(heap: Heap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O: TotalOrder<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T, O> {
        Heap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for Heap<T, O> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the heap in heap layout order.
    fn into_iter(self) -> vec::IntoIter<T> {
        self.data.into_iter()
    }
}

impl<'a, T, O> IntoIterator for &'a Heap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(move |elem| self.push(elem));
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<T>> Extend<&'a T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
