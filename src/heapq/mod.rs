//! Heap algorithms over caller-owned sequences.
//!
//! These functions keep a *min*-heap: for every index `i`, the element at `i`
//! sorts before or equal to the elements at `2 * i + 1` and `2 * i + 2` (where
//! they exist). Sibling order is unconstrained. The caller owns the sequence and
//! lends it mutably for the duration of each call; only the extracted element,
//! if any, is handed back.
//!
//! Each function comes in two forms: one using the [`Ord`] implementation of
//! the element type, and a `_by` form taking any [`TotalOrder`]. The same order
//! must be used for every call on a given sequence.
//!
//! ```
//! use heapq::heapq::{heapify_by, pop_by, push_by};
//!
//! // A max-heap is a min-heap under the reversed order.
//! let max_first = |a: &i32, b: &i32| b.cmp(a);
//!
//! let mut heap = vec![3, 1, 4];
//! heapify_by(&mut heap, &max_first);
//! push_by(&mut heap, 5, &max_first);
//!
//! assert_eq!(pop_by(&mut heap, &max_first), Ok(5));
//! assert_eq!(pop_by(&mut heap, &max_first), Ok(4));
//! ```
//!
//! # Time complexity
//!
//! | [push]        | [pop]         | [replace]     | [pushpop]     | [heapify] |
//! |---------------|---------------|---------------|---------------|-----------|
//! | *O*(log(*n*)) | *O*(log(*n*)) | *O*(log(*n*)) | *O*(log(*n*)) | *O*(*n*)  |
//!
//! [push]: push_by
//! [pop]: pop_by
//! [replace]: replace_by
//! [pushpop]: pushpop_by
//! [heapify]: heapify_by

use core::mem::{self, swap, ManuallyDrop};
use core::ptr;

use alloc::vec::Vec;

use crate::{HeapError, OrdTotalOrder, TotalOrder};

#[cfg(test)]
mod tests;

/// Pushes `item` onto `heap`, maintaining the heap invariant.
///
/// # Examples
///
/// ```
/// let mut heap = vec![];
/// heapq::push(&mut heap, 3);
/// heapq::push(&mut heap, 1);
/// assert_eq!(heap[0], 1);
/// ```
pub fn push<T: Ord>(heap: &mut Vec<T>, item: T) {
    push_by(heap, item, &OrdTotalOrder::<T>::new())
}

/// Pushes `item` onto `heap` under `order`, maintaining the heap invariant.
pub fn push_by<T, O>(heap: &mut Vec<T>, item: T, order: &O)
where
    O: ?Sized + TotalOrder<T>,
{
    let old_len = heap.len();
    heap.push(item);
    // SAFETY: Since we pushed a new item it means that
    //  old_len = heap.len() - 1 < heap.len()
    unsafe { sift_toward_root(heap, 0, old_len, order) };
}

/// Removes and returns the smallest item of `heap`.
///
/// # Errors
///
/// [`HeapError::EmptyHeap`] if `heap` has no elements.
///
/// # Examples
///
/// ```
/// use heapq::HeapError;
///
/// let mut heap = vec![1, 3, 2];
/// assert_eq!(heapq::pop(&mut heap), Ok(1));
/// assert_eq!(heapq::pop(&mut heap), Ok(2));
/// assert_eq!(heapq::pop(&mut heap), Ok(3));
/// assert_eq!(heapq::pop(&mut heap), Err(HeapError::EmptyHeap));
/// ```
pub fn pop<T: Ord>(heap: &mut Vec<T>) -> Result<T, HeapError> {
    pop_by(heap, &OrdTotalOrder::<T>::new())
}

/// Removes and returns the smallest item of `heap` under `order`.
///
/// # Errors
///
/// [`HeapError::EmptyHeap`] if `heap` has no elements.
pub fn pop_by<T, O>(heap: &mut Vec<T>, order: &O) -> Result<T, HeapError>
where
    O: ?Sized + TotalOrder<T>,
{
    let mut item = heap.pop().ok_or(HeapError::EmptyHeap)?;
    if !heap.is_empty() {
        swap(&mut item, &mut heap[0]);
        // SAFETY: !heap.is_empty() means that heap.len() > 0
        unsafe { sift_toward_leaves(heap, 0, order) };
    }
    Ok(item)
}

/// Replaces the smallest item of `heap` with `item`, returning the former.
///
/// The returned value may sort *after* `item`; callers wanting a conditional
/// replacement should compare against `heap[0]` first, or use [`pushpop`].
///
/// # Errors
///
/// [`HeapError::EmptyHeap`] if `heap` has no elements, in which case `item` is
/// dropped and `heap` is left as it was.
///
/// # Examples
///
/// ```
/// let mut heap = vec![2, 5, 3];
/// assert_eq!(heapq::replace(&mut heap, 9), Ok(2));
/// assert_eq!(heap[0], 3);
/// ```
pub fn replace<T: Ord>(heap: &mut [T], item: T) -> Result<T, HeapError> {
    replace_by(heap, item, &OrdTotalOrder::<T>::new())
}

/// Replaces the smallest item of `heap` under `order` with `item`, returning
/// the former.
///
/// # Errors
///
/// [`HeapError::EmptyHeap`] if `heap` has no elements.
pub fn replace_by<T, O>(heap: &mut [T], item: T, order: &O) -> Result<T, HeapError>
where
    O: ?Sized + TotalOrder<T>,
{
    let root = heap.first_mut().ok_or(HeapError::EmptyHeap)?;
    let old = mem::replace(root, item);
    // SAFETY: the root exists, so 0 < heap.len()
    unsafe { sift_toward_leaves(heap, 0, order) };
    Ok(old)
}

/// Pushes `item` onto `heap` and then pops the smallest item, more efficiently
/// than the two calls in sequence.
///
/// If `heap` is empty or `item` sorts before or equal to its root, `item` is
/// returned straight back and `heap` is not touched.
///
/// # Examples
///
/// ```
/// let mut heap = vec![2, 5, 3];
/// assert_eq!(heapq::pushpop(&mut heap, 1), 1);
/// assert_eq!(heapq::pushpop(&mut heap, 4), 2);
/// assert_eq!(heap[0], 3);
///
/// let mut empty: Vec<i32> = vec![];
/// assert_eq!(heapq::pushpop(&mut empty, 7), 7);
/// assert!(empty.is_empty());
/// ```
pub fn pushpop<T: Ord>(heap: &mut [T], item: T) -> T {
    pushpop_by(heap, item, &OrdTotalOrder::<T>::new())
}

/// [`pushpop`] under `order`.
pub fn pushpop_by<T, O>(heap: &mut [T], mut item: T, order: &O) -> T
where
    O: ?Sized + TotalOrder<T>,
{
    if let Some(root) = heap.first_mut() {
        if order.lt(root, &item) {
            swap(root, &mut item);
            // SAFETY: the root exists, so 0 < heap.len()
            unsafe { sift_toward_leaves(heap, 0, order) };
        }
    }
    item
}

/// Rearranges `heap` in place so that it satisfies the heap invariant, in
/// *O*(*n*) time.
///
/// # Examples
///
/// ```
/// let mut data = vec![5, 1, 4, 2, 8];
/// heapq::heapify(&mut data);
/// assert!(heapq::is_heap(&data));
/// assert_eq!(data[0], 1);
/// ```
pub fn heapify<T: Ord>(heap: &mut [T]) {
    heapify_by(heap, &OrdTotalOrder::<T>::new())
}

/// Rearranges `heap` in place so that it satisfies the heap invariant under
/// `order`.
pub fn heapify_by<T, O>(heap: &mut [T], order: &O)
where
    O: ?Sized + TotalOrder<T>,
{
    let mut n = heap.len() / 2;
    while n > 0 {
        n -= 1;
        // SAFETY: n starts from heap.len() / 2 and goes down to 0.
        //  The only case when !(n < heap.len()) is if
        //  heap.len() == 0, but it's ruled out by the loop condition.
        unsafe { sift_toward_leaves(heap, n, order) };
    }
}

/// Whether `heap` satisfies the heap invariant.
pub fn is_heap<T: Ord>(heap: &[T]) -> bool {
    is_heap_by(heap, &OrdTotalOrder::<T>::new())
}

/// Whether `heap` satisfies the heap invariant under `order`.
///
/// ```
/// let max_first = |a: &i32, b: &i32| b.cmp(a);
/// assert!(heapq::is_heap_by(&[9, 4, 7, 1], &max_first));
/// assert!(!heapq::is_heap(&[9, 4, 7, 1]));
/// ```
pub fn is_heap_by<T, O>(heap: &[T], order: &O) -> bool
where
    O: ?Sized + TotalOrder<T>,
{
    (1..heap.len()).all(|child| order.le(&heap[(child - 1) / 2], &heap[child]))
}

// The sift primitives move an element out of the slice (leaving behind a
// hole), shift the others along and move the removed element back into the
// slice at the final location of the hole. The `Hole` type represents this and
// makes sure the hole is filled back at the end of its scope, even if the
// comparator panics. Using a hole halves the moves compared to using swaps.

/// Moves the element at `pos` toward the root while it sorts strictly before
/// its parent, never rising above `start`. Returns its final position.
///
/// # Safety
///
/// The caller must guarantee that `start <= pos < heap.len()`.
pub(crate) unsafe fn sift_toward_root<T, O>(
    heap: &mut [T],
    start: usize,
    pos: usize,
    order: &O,
) -> usize
where
    O: ?Sized + TotalOrder<T>,
{
    debug_assert!(start <= pos);
    // Take out the value at `pos` and create a hole.
    // SAFETY: The caller guarantees that pos < heap.len()
    let mut hole = unsafe { Hole::new(heap, pos) };

    while hole.pos() > start {
        let parent = (hole.pos() - 1) / 2;

        // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
        //  and so hole.pos() - 1 can't underflow.
        //  This guarantees that parent < hole.pos() so
        //  it's a valid index and also != hole.pos().
        if !order.lt(hole.element(), unsafe { hole.get(parent) }) {
            break;
        }

        // SAFETY: Same as above
        unsafe { hole.move_to(parent) };
    }

    hole.pos()
}

/// Takes the element at `pos` and moves the hole all the way down to a leaf,
/// each time promoting the smaller child, then sifts the element back toward
/// `pos` from that leaf.
///
/// When the children compare equal the right one is promoted. This only shapes
/// the internal layout, never the order in which elements are popped.
///
/// # Safety
///
/// The caller must guarantee that `pos < heap.len()`.
pub(crate) unsafe fn sift_toward_leaves<T, O>(heap: &mut [T], mut pos: usize, order: &O)
where
    O: ?Sized + TotalOrder<T>,
{
    let end = heap.len();
    let start = pos;

    // SAFETY: The caller guarantees that pos < heap.len().
    let mut hole = unsafe { Hole::new(heap, pos) };
    let mut child = 2 * hole.pos() + 1;

    // Loop invariant: child == 2 * hole.pos() + 1.
    while child <= end.saturating_sub(2) {
        // SAFETY: child < end - 1 < heap.len() and
        //  child + 1 < end <= heap.len(), so they're valid indexes.
        //  child == 2 * hole.pos() + 1 != hole.pos() and
        //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
        child += unsafe { !order.lt(hole.get(child), hole.get(child + 1)) } as usize;

        // SAFETY: Same as above
        unsafe { hole.move_to(child) };
        child = 2 * hole.pos() + 1;
    }

    if child == end - 1 {
        // SAFETY: child == end - 1 < heap.len(), so it's a valid index
        //  and child == 2 * hole.pos() + 1 != hole.pos().
        unsafe { hole.move_to(child) };
    }
    pos = hole.pos();
    drop(hole);

    // SAFETY: pos is the position in the hole and was already proven
    //  to be a valid index, and start <= pos since the hole only descended.
    unsafe { sift_toward_root(heap, start, pos, order) };
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}
