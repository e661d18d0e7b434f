use crate::TotalOrder;
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "is_sorted")] {
        /// Whether `slice` is sorted in non-descending order under `order`.
        pub(crate) fn is_sorted_by<T, O>(slice: &[T], order: &O) -> bool
        where
            O: ?Sized + TotalOrder<T>,
        {
            slice.is_sorted_by(|a, b| order.le(a, b))
        }
    } else {
        /// Whether `slice` is sorted in non-descending order under `order`.
        pub(crate) fn is_sorted_by<T, O>(slice: &[T], order: &O) -> bool
        where
            O: ?Sized + TotalOrder<T>,
        {
            slice.windows(2).all(|pair| order.le(&pair[0], &pair[1]))
        }
    }
}
