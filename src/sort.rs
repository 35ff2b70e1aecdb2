//! Top-down merge sort.
//!
//! Hands are ordered with a classic divide-and-conquer merge sort rather than
//! `slice::sort`: split at the midpoint, sort each half recursively, then merge
//! by repeatedly taking the lesser-or-equal front element. Ties take from the
//! left half, so the sort is stable and its output is fully determined by the
//! comparator.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Sorts `items` in non-decreasing order.
///
/// # Example
///
/// ```
/// use mergewar::sort::merge_sort;
///
/// let mut values = [5, 3, 9, 1, 3];
/// merge_sort(&mut values);
/// assert_eq!(values, [1, 3, 3, 5, 9]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    merge_sort_by(items, T::cmp);
}

/// Sorts `items` in non-decreasing order according to `compare`.
///
/// Runs in O(n log n) comparisons and allocates one scratch buffer of
/// `items.len()` elements for the whole sort.
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mut scratch = Vec::with_capacity(items.len());
    sort_range(items, &mut scratch, &mut compare);
}

fn sort_range<T, F>(items: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        sort_range(left, scratch, compare);
        sort_range(right, scratch, compare);
    }

    merge(items, mid, scratch, compare);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]` in place.
fn merge<T, F>(items: &mut [T], mid: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    scratch.clear();

    let (left, right) = items.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]).is_le() {
            scratch.push(left[i].clone());
            i += 1;
        } else {
            scratch.push(right[j].clone());
            j += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);

    items.clone_from_slice(scratch);
}
