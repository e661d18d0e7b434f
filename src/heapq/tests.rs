use super::*;
use crate::test_helpers::{random_vec, test_rng};
use core::cell::Cell;
use core::cmp::Ordering;
use proptest::prelude::*;
use rand::Rng;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn check_heap<T: Ord + core::fmt::Debug>(data: &[T]) {
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert!(
            data[parent] <= data[i],
            "{:?} at {} above {:?} at {}",
            data[parent],
            parent,
            data[i],
            i
        );
    }
}

fn drain<T: Ord>(heap: &mut Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(x) = pop(heap) {
        out.push(x);
    }
    out
}

#[test]
fn test_heapify_then_pop() {
    let mut data = vec![5, 1, 4, 2, 8];
    heapify(&mut data);
    check_heap(&data);
    assert_eq!(drain(&mut data), [1, 2, 4, 5, 8]);
    assert!(data.is_empty());
}

#[test]
fn test_push_maintains_invariant() {
    let mut rng = test_rng();
    let mut heap = Vec::new();
    for x in random_vec(&mut rng, 200, 50) {
        push(&mut heap, x);
        check_heap(&heap);
    }
    assert_eq!(heap.len(), 200);
}

#[test]
fn test_push_pop_round_trip() {
    let mut rng = test_rng();
    for len in [0, 1, 2, 3, 7, 8, 64, 500] {
        let values = random_vec(&mut rng, len, 100);
        let mut heap = Vec::new();
        for &x in &values {
            push(&mut heap, x);
        }
        let mut expected = values;
        expected.sort();
        assert_eq!(drain(&mut heap), expected);
    }
}

#[test]
fn test_pop_interleaved() {
    let mut rng = test_rng();
    let mut heap = Vec::new();
    let mut model = Vec::new();
    for _ in 0..1000 {
        if rng.gen_bool(0.4) {
            let expected = model.iter().copied().min();
            match pop(&mut heap) {
                Ok(x) => {
                    assert_eq!(Some(x), expected);
                    let at = model.iter().position(|&y| y == x).unwrap();
                    model.swap_remove(at);
                }
                Err(e) => {
                    assert_eq!(e, HeapError::EmptyHeap);
                    assert!(model.is_empty());
                }
            }
        } else {
            let x = rng.gen_range(0..30);
            push(&mut heap, x);
            model.push(x);
        }
        check_heap(&heap);
    }
}

#[test]
fn test_pop_empty() {
    let mut heap: Vec<i32> = vec![];
    assert_eq!(pop(&mut heap), Err(HeapError::EmptyHeap));
    assert!(heap.is_empty());
}

#[test]
fn test_pop_single() {
    let mut heap = vec![42];
    assert_eq!(pop(&mut heap), Ok(42));
    assert!(heap.is_empty());
}

#[test]
fn test_replace() {
    let mut heap = vec![7];
    assert_eq!(replace(&mut heap, 3), Ok(7));
    assert_eq!(heap, [3]);

    // The displaced root may be smaller than the new item.
    let mut heap = vec![1, 4, 2, 6];
    assert_eq!(replace(&mut heap, 5), Ok(1));
    check_heap(&heap);
    assert_eq!(drain(&mut heap), [2, 4, 5, 6]);

    // ... or larger.
    let mut heap = vec![3, 4, 5];
    assert_eq!(replace(&mut heap, 0), Ok(3));
    assert_eq!(heap[0], 0);
    check_heap(&heap);
}

#[test]
fn test_replace_empty() {
    let mut heap: Vec<i32> = vec![];
    assert_eq!(replace(&mut heap, 1), Err(HeapError::EmptyHeap));
    assert!(heap.is_empty());
}

#[test]
fn test_pushpop() {
    let mut heap: Vec<i32> = vec![];
    assert_eq!(pushpop(&mut heap, 10), 10);
    assert!(heap.is_empty());

    let mut heap = vec![2, 4, 3];
    // Not larger than the root: handed straight back, heap untouched.
    assert_eq!(pushpop(&mut heap, 1), 1);
    assert_eq!(pushpop(&mut heap, 2), 2);
    assert_eq!(heap, [2, 4, 3]);

    assert_eq!(pushpop(&mut heap, 5), 2);
    check_heap(&heap);
    assert_eq!(drain(&mut heap), [3, 4, 5]);
}

#[test]
fn test_pushpop_matches_push_then_pop() {
    let mut rng = test_rng();
    let mut a = random_vec(&mut rng, 100, 1000);
    heapify(&mut a);
    let mut b = a.clone();
    for _ in 0..200 {
        let x = rng.gen_range(0..1000);
        let fast = pushpop(&mut a, x);
        push(&mut b, x);
        let slow = pop(&mut b).unwrap();
        assert_eq!(fast, slow);
        check_heap(&a);
    }
    assert_eq!(drain(&mut a), drain(&mut b));
}

#[test]
fn test_heapify_sizes() {
    let mut rng = test_rng();
    for len in 0..40 {
        let mut data = random_vec(&mut rng, len, 10);
        let mut expected = data.clone();
        expected.sort();
        heapify(&mut data);
        check_heap(&data);
        assert_eq!(drain(&mut data), expected);
    }
}

#[test]
fn test_heapify_already_sorted_is_untouched() {
    let mut data: Vec<i32> = (0..31).collect();
    heapify(&mut data);
    assert_eq!(data, (0..31).collect::<Vec<_>>());
}

#[test]
fn test_equal_children_promote_right() {
    // Ordered by the first field only; the second tells equal keys apart.
    let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
    let mut data = vec![(5, 'a'), (1, 'b'), (1, 'c')];
    heapify_by(&mut data, &by_key);
    assert_eq!(data, [(1, 'c'), (1, 'b'), (5, 'a')]);

    let mut data = vec![(0, 'r'), (1, 'b'), (1, 'c'), (9, 'z')];
    assert_eq!(pop_by(&mut data, &by_key), Ok((0, 'r')));
    assert_eq!(data, [(1, 'c'), (1, 'b'), (9, 'z')]);
}

#[test]
fn test_custom_order() {
    let max_first = |a: &i32, b: &i32| b.cmp(a);
    let mut rng = test_rng();
    let values = random_vec(&mut rng, 100, 50);

    let mut heap = Vec::new();
    for &x in &values {
        push_by(&mut heap, x, &max_first);
        assert!(is_heap_by(&heap, &max_first));
    }
    let mut out = Vec::new();
    while let Ok(x) = pop_by(&mut heap, &max_first) {
        out.push(x);
    }
    let mut expected = values;
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(out, expected);
}

#[test]
fn test_dyn_order() {
    let order: &dyn TotalOrder<i32> = &|a: &i32, b: &i32| a.abs().cmp(&b.abs());
    let mut heap = vec![-5, 3, -1, 4];
    heapify_by(&mut heap, order);
    assert_eq!(pop_by(&mut heap, order), Ok(-1));
    assert_eq!(pop_by(&mut heap, order), Ok(3));
    assert_eq!(pop_by(&mut heap, order), Ok(4));
    assert_eq!(pop_by(&mut heap, order), Ok(-5));
}

#[test]
fn test_is_heap() {
    assert!(is_heap::<i32>(&[]));
    assert!(is_heap(&[1]));
    assert!(is_heap(&[1, 1, 1]));
    assert!(is_heap(&[1, 3, 2, 4, 5]));
    assert!(!is_heap(&[2, 1]));
    assert!(!is_heap(&[1, 3, 2, 0]));
}

#[test]
fn test_panicking_order_keeps_every_element() {
    const PUSHED: [i32; 3] = [50, 0, 99];

    let mut rng = test_rng();
    for panic_at in 1..80 {
        let calls = Cell::new(0usize);
        let order = |a: &i32, b: &i32| -> Ordering {
            calls.set(calls.get() + 1);
            if calls.get() == panic_at {
                panic!("comparator panicked");
            }
            a.cmp(b)
        };

        let mut data = random_vec(&mut rng, 20, 100);
        let original = data.clone();

        let result = catch_unwind(AssertUnwindSafe(|| {
            heapify_by(&mut data, &order);
            for x in PUSHED {
                push_by(&mut data, x, &order);
            }
        }));

        // Whichever sift was interrupted, the sequence still holds exactly the
        // original elements plus those pushed so far.
        let entered = data.len() - original.len();
        let mut expected = original;
        expected.extend_from_slice(&PUSHED[..entered]);
        expected.sort();
        let mut after = data;
        after.sort();
        assert_eq!(after, expected);
        if result.is_ok() {
            assert_eq!(entered, PUSHED.len());
        }
    }
}

proptest! {
    #[test]
    fn heapify_is_valid(mut data in prop::collection::vec(any::<i16>(), 0..200)) {
        heapify(&mut data);
        prop_assert!(is_heap(&data));
    }

    #[test]
    fn pops_come_out_sorted(data in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut heap = data.clone();
        heapify(&mut heap);
        let mut expected = data;
        expected.sort();
        prop_assert_eq!(drain(&mut heap), expected);
    }

    #[test]
    fn pushes_keep_invariant(data in prop::collection::vec(0..20u8, 0..100)) {
        let mut heap = Vec::new();
        for x in data {
            push(&mut heap, x);
            prop_assert!(is_heap(&heap));
        }
    }
}
