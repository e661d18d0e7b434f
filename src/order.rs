//! Comparators: the total orders that define "smaller" for every heap operation.
//!
//! A comparator is anything implementing [`TotalOrder`]. Two kinds are
//! provided out of the box:
//!
//! * [`OrdTotalOrder`], a zero-sized order delegating to the element type's
//!   [`Ord`] implementation, used by all of the natural-order functions; and
//! * any closure or function `Fn(&T, &T) -> Ordering`.
//!
//! ```
//! use core::cmp::Ordering;
//! use heapq::TotalOrder;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert!(by_len.lt(&"ab", &"abc"));
//! assert_eq!(by_len.cmp(&"ab", &"cd"), Ordering::Equal);
//! ```

use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A three-way ordering over `T`.
///
/// Implementations must be total and consistent: reflexive, antisymmetric and
/// transitive, and must return the same answer for the same pair of elements
/// for as long as those elements are held in a heap. Violating this is a logic
/// error; heap operations will then produce unspecified (but memory-safe)
/// results.
pub trait TotalOrder<T: ?Sized> {
    /// Compares `this` with `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Whether `this` sorts strictly before `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
    /// Whether `this` sorts before or equal to `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Whether `this` sorts strictly after `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Whether `this` sorts after or equal to `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Whether `this` and `that` are in the same equivalence class.
    fn eq(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_eq()
    }
}

impl<T: ?Sized, F: ?Sized + Fn(&T, &T) -> Ordering> TotalOrder<T> for F {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> OrdTotalOrder<T> {
    /// The natural order of `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder<T> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // Delegate to `T`'s `PartialOrd`/`PartialEq` rather than going through
    // `Ord::cmp`, so that types whose implementations disagree behave exactly
    // as they would under the standard library's collections.

    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord_total_order_follows_ord() {
        let order = OrdTotalOrder::<i32>::new();
        assert_eq!(order.cmp(&1, &2), Ordering::Less);
        assert_eq!(order.cmp(&2, &2), Ordering::Equal);
        assert!(order.lt(&1, &2));
        assert!(order.le(&2, &2));
        assert!(order.gt(&3, &2));
        assert!(order.ge(&2, &2));
        assert!(order.eq(&2, &2));
        assert!(!order.lt(&2, &2));
    }

    #[test]
    fn closures_are_orders() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert!(reversed.lt(&2, &1));
        assert!(!reversed.lt(&1, &2));
        assert!(reversed.eq(&7, &7));

        fn by_abs(a: &i64, b: &i64) -> Ordering {
            a.abs().cmp(&b.abs())
        }
        assert!(by_abs.lt(&-1, &2));
        assert!(by_abs.eq(&-3, &3));
    }

    #[test]
    fn unsized_elements() {
        let order = OrdTotalOrder::<str>::default();
        assert!(order.lt("apple", "banana"));
        let dyn_order: &dyn TotalOrder<str> = &order;
        assert_eq!(dyn_order.cmp("b", "a"), Ordering::Greater);
    }
}
