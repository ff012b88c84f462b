//! Sorting of numeric values and strings
//!
//! [`sort_numbers`] and [`sort_strings`] are stable. [`quicksort_numbers`] gives the same
//! ascending order but is NOT stable: equal elements may change their relative order.
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Stable ascending sort
///
/// Values which are not comparable with themselves (NaN) go last, in input order.
pub fn sort_numbers<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut result = data.to_vec();
    result.sort_by(compare);
    result
}

/// Stable ascending sort, byte-wise (no locale rules)
pub fn sort_strings<S: AsRef<str>>(data: &[S]) -> Vec<String> {
    let mut result: Vec<String> = data.iter().map(|s| String::from(s.as_ref())).collect();
    result.sort();
    result
}

/// Quicksort (Lomuto partition, last element as pivot), not stable
///
/// NaN values go last, as with [`sort_numbers`].
pub fn quicksort_numbers<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    let mut result = data.to_vec();
    quicksort(&mut result);
    result
}

fn quicksort<T: PartialOrd>(data: &mut [T]) {
    // recurse into the smaller part, loop on the larger one
    let mut data = data;
    while data.len() > 1 {
        let p = partition(data);
        let (left, right) = core::mem::take(&mut data).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left);
            data = right;
        } else {
            quicksort(right);
            data = left;
        }
    }
}

fn partition<T: PartialOrd>(data: &mut [T]) -> usize {
    let pivot = data.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if compare(&data[i], &data[pivot]) == Ordering::Less {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, pivot);
    store
}

// total order: unordered values (NaN) are equal to each other and greater than anything else
fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match (is_unordered(a), is_unordered(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

#[inline]
fn is_unordered<T: PartialOrd>(v: &T) -> bool {
    v.partial_cmp(v).is_none()
}
