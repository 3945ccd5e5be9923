//! Stable merge sort driven by a [`Comparator`].
//!
//! The sort only ever moves elements between runs, so it keeps every element
//! and never panics, whatever the comparator answers. A comparator that is
//! not a total order only leaves the affected elements in an unspecified
//! relative placement.

use std::cmp::Ordering;
use std::mem;

use crate::compare::Comparator;

/// Sorts `elements` stably by `comparator`.
///
/// Ascending runs already present in the input are kept intact and merged
/// pairwise, bottom-up, until a single run remains.
pub(super) fn merge_sort<T, C>(elements: &mut Vec<T>, comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    if elements.len() < 2 {
        return;
    }
    let mut runs = ascending_runs(mem::take(elements), comparator);
    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pending = runs.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(merge(left, right, comparator)),
                None => merged.push(left),
            }
        }
        runs = merged;
    }
    *elements = runs.pop().unwrap_or_default();
}

/// Splits `elements` into maximal runs in which no element is greater than
/// its successor.
fn ascending_runs<T, C>(elements: Vec<T>, comparator: &C) -> Vec<Vec<T>>
where
    C: Comparator<T> + ?Sized,
{
    let mut runs: Vec<Vec<T>> = Vec::new();
    for element in elements {
        match runs.last_mut() {
            Some(run) if continues(run, &element, comparator) => run.push(element),
            _ => runs.push(vec![element]),
        }
    }
    runs
}

fn continues<T, C>(run: &[T], element: &T, comparator: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    run.last()
        .is_some_and(|last| comparator.compare(last, element) != Ordering::Greater)
}

/// Merges two runs; on ties the element from `left` comes first.
fn merge<T, C>(left: Vec<T>, right: Vec<T>, comparator: &C) -> Vec<T>
where
    C: Comparator<T> + ?Sized,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(first), Some(second)) = (left.peek(), right.peek()) {
        let next = if comparator.compare(first, second) == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
