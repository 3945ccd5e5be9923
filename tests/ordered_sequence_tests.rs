//! Integration tests for OrderedSequence.
//!
//! These tests exercise ordering through the public API: construction,
//! refinement, deferred production and the error cases of each.

use rstest::rstest;
use seqops::prelude::*;
use seqops::source;
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Point {
    x: i32,
    y: &'static str,
}

const fn point(x: i32, y: &'static str) -> Point {
    Point { x, y }
}

fn collect<S: Source>(sequence: &OrderedSequence<'_, S>) -> Vec<S::Item> {
    sequence
        .iter()
        .collect::<Result<Vec<_>>>()
        .expect("ordering should succeed")
}

// =============================================================================
// Basic ordering
// =============================================================================

#[rstest]
fn test_identity_key_ascending() {
    let sequence = OrderedSequence::new(vec![3, 1, 2], |n: &i32| *n, NaturalOrder);
    assert_eq!(collect(&sequence), vec![1, 2, 3]);
}

#[rstest]
fn test_primary_then_secondary_key() {
    let pairs = vec![('A', 2), ('B', 1), ('A', 1)];
    let sequence = OrderedSequence::new(pairs, |pair: &(char, i32)| pair.0, NaturalOrder)
        .then_by(|pair: &(char, i32)| pair.1, NaturalOrder);
    assert_eq!(collect(&sequence), vec![('A', 1), ('A', 2), ('B', 1)]);
}

#[rstest]
fn test_ties_keep_source_order() {
    let points = vec![point(1, "b"), point(1, "a")];
    let sequence = OrderedSequence::new(points, |p: &Point| p.x, NaturalOrder);
    assert_eq!(collect(&sequence), vec![point(1, "b"), point(1, "a")]);
}

#[rstest]
fn test_empty_source_with_long_chain() {
    let sequence = OrderedSequence::new(Vec::<i32>::new(), |n: &i32| *n, NaturalOrder)
        .then_by_key(|n: &i32| -n)
        .then_by_key_descending(|n: &i32| n % 3)
        .then_with(|left: &i32, right: &i32| left.cmp(right));
    assert_eq!(sequence.criteria_len(), 4);
    assert!(collect(&sequence).is_empty());
    assert!(sequence.iter().next().is_none());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_singleton_is_unchanged_for_any_chain_length(#[case] criteria: usize) {
    let mut sequence = OrderedSequence::new(vec![42], |n: &i32| *n, NaturalOrder);
    for _ in 1..criteria {
        sequence = sequence.then_by_key_descending(|n: &i32| *n);
    }
    assert_eq!(sequence.criteria_len(), criteria);
    assert_eq!(collect(&sequence), vec![42]);
}

#[rstest]
fn test_nan_keys_sort_without_panicking() {
    let readings: Vec<f64> = (0..64_u8)
        .map(|index| {
            if index % 3 == 0 {
                f64::NAN
            } else {
                f64::from(64 - index)
            }
        })
        .collect();
    let sequence = OrderedSequence::new(
        readings,
        |reading: &f64| *reading,
        |left: &f64, right: &f64| left.partial_cmp(right).unwrap_or(Ordering::Equal),
    );
    let sorted = collect(&sequence);
    assert_eq!(sorted.len(), 64);
    assert_eq!(sorted.iter().filter(|reading| reading.is_nan()).count(), 22);
}

#[rstest]
fn test_inconsistent_refinement_keeps_primary_groups() {
    let flips = Cell::new(0_u32);
    let sequence = vec![3, 1, 2, 3, 1, 2, 3, 1, 2]
        .order_by_key(|n: &i32| *n)
        .then_with(move |_: &i32, _: &i32| {
            flips.set(flips.get() + 1);
            if flips.get() % 2 == 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
    assert_eq!(collect(&sequence), vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
}

// =============================================================================
// Refinement
// =============================================================================

#[rstest]
fn test_refining_after_production_uses_original_sequence() {
    let points = vec![point(2, "a"), point(1, "c"), point(1, "b"), point(2, "d")];
    let by_x = OrderedSequence::new(points, |p: &Point| p.x, NaturalOrder);

    let first = collect(&by_x);
    let by_x_then_y = by_x.then_by_key(|p: &Point| p.y);
    let second = collect(&by_x_then_y);

    assert_eq!(
        first,
        vec![point(1, "c"), point(1, "b"), point(2, "a"), point(2, "d")]
    );
    assert_eq!(
        second,
        vec![point(1, "b"), point(1, "c"), point(2, "a"), point(2, "d")]
    );
    assert_eq!(collect(&by_x), first);
}

#[rstest]
fn test_descending_criterion_reverses_only_its_own_axis() {
    let pairs = vec![(1, 1), (2, 1), (1, 2), (2, 2)];
    let sequence = OrderedSequence::new(pairs, |pair: &(i32, i32)| pair.0, NaturalOrder)
        .then_by_key_descending(|pair: &(i32, i32)| pair.1);
    assert_eq!(collect(&sequence), vec![(1, 2), (1, 1), (2, 2), (2, 1)]);
}

#[rstest]
fn test_descending_primary_with_custom_comparator() {
    let words = vec!["b", "A", "c", "B"];
    let case_insensitive = |left: &String, right: &String| left.cmp(right);
    let sequence = OrderedSequence::with_direction(
        words,
        |word: &&str| word.to_lowercase(),
        case_insensitive,
        Direction::Descending,
    );
    assert_eq!(collect(&sequence), vec!["c", "b", "B", "A"]);
}

#[rstest]
fn test_reversed_comparator_as_key_comparator() {
    let sequence = OrderedSequence::new(
        vec![1, 3, 2],
        |n: &i32| *n,
        Reversed::new(NaturalOrder),
    );
    assert_eq!(collect(&sequence), vec![3, 2, 1]);
}

#[rstest]
fn test_refinement_is_cheap_and_shares_source() {
    let pulls = Cell::new(0);
    let counted = source::from_fn(|| {
        pulls.set(pulls.get() + 1);
        vec![2, 1]
    });
    let base = OrderedSequence::new(counted, |n: &i32| *n, NaturalOrder);
    let refined = base.then_by_key(|n: &i32| -n).then_by_key(|n: &i32| n * 2);
    assert_eq!(pulls.get(), 0);
    assert_eq!(collect(&refined), vec![1, 2]);
    assert_eq!(collect(&base), vec![1, 2]);
    assert_eq!(pulls.get(), 2);
}

// =============================================================================
// Deferred production
// =============================================================================

#[rstest]
fn test_reiteration_is_idempotent() {
    let sequence = OrderedSequence::new(vec![5, 3, 9, 3], |n: &i32| *n, NaturalOrder);
    assert_eq!(collect(&sequence), collect(&sequence));
}

#[rstest]
fn test_source_changes_between_iterations_are_observed() {
    let backing = RefCell::new(vec![3, 1]);
    let sequence = OrderedSequence::new(
        source::from_fn(|| backing.borrow().clone()),
        |n: &i32| *n,
        NaturalOrder,
    );
    let before = sequence.iter();
    backing.borrow_mut().push(2);
    assert_eq!(before.collect::<Result<Vec<_>>>().unwrap(), vec![1, 2, 3]);
    backing.borrow_mut().push(0);
    assert_eq!(collect(&sequence), vec![0, 1, 2, 3]);
}

#[rstest]
fn test_early_drop_of_iteration() {
    let sequence = OrderedSequence::new(vec![4, 2, 3], |n: &i32| *n, NaturalOrder);
    let mut iteration = sequence.iter();
    assert_eq!(iteration.next().unwrap().unwrap(), 2);
    drop(iteration);
    assert_eq!(collect(&sequence), vec![2, 3, 4]);
}

#[rstest]
fn test_comparators_run_only_on_iteration() {
    let comparisons = Cell::new(0_usize);
    let counting = |left: &i32, right: &i32| {
        comparisons.set(comparisons.get() + 1);
        left.cmp(right)
    };
    let sequence = OrderedSequence::new(vec![3, 1, 2], |n: &i32| *n, counting);
    let _iteration = sequence.iter();
    assert_eq!(comparisons.get(), 0);
    assert_eq!(collect(&sequence), vec![1, 2, 3]);
    assert!(comparisons.get() >= 2);
}

#[rstest]
fn test_ordered_sequence_feeds_operators() {
    let sequence = OrderedSequence::new(vec![3, 1, 2, 4], |n: &i32| *n, NaturalOrder);
    let evens = (&sequence).filter(|n: &i32| n % 2 == 0).collect_vec().unwrap();
    assert_eq!(evens, vec![2, 4]);
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn test_absent_source_is_reported_on_iteration() {
    let sequence =
        OrderedSequence::from_optional(None::<Vec<i32>>, Some(|n: &i32| *n), Some(NaturalOrder));
    let items: Vec<_> = sequence.iter().collect();
    assert_eq!(items.len(), 1);
    match &items[0] {
        Err(SequenceError::NullSource { parameter }) => assert_eq!(*parameter, "source"),
        other => panic!("unexpected item: {other:?}"),
    }
}

#[rstest]
#[case(vec![], true)]
#[case(vec![1], true)]
#[case(vec![2, 1], false)]
fn test_absent_key_selector_fails_only_when_comparing(
    #[case] items: Vec<i32>,
    #[case] succeeds: bool,
) {
    let sequence =
        OrderedSequence::from_optional(Some(items), None::<fn(&i32) -> i32>, Some(NaturalOrder));
    let result = sequence.to_vec();
    assert_eq!(result.is_ok(), succeeds);
    if let Err(error) = result {
        assert!(matches!(error, SequenceError::NullArgument { .. }));
        assert_eq!(error.parameter(), Some("key_selector"));
    }
}

#[rstest]
fn test_absent_refinement_argument_is_reported_lazily() {
    let sequence = OrderedSequence::new(vec![2, 1], |n: &i32| *n, NaturalOrder)
        .then_by_optional(None::<fn(&i32) -> i32>, Some(NaturalOrder));
    assert_eq!(sequence.criteria_len(), 2);
    let error = sequence.to_vec().unwrap_err();
    assert_eq!(error.parameter(), Some("key_selector"));
}

#[rstest]
fn test_absent_comparator_is_reported_lazily() {
    let sequence = OrderedSequence::from_optional(
        Some(vec![2, 1]),
        Some(|n: &i32| *n),
        None::<fn(&i32, &i32) -> Ordering>,
    );
    assert_eq!(sequence.to_vec().unwrap_err().parameter(), Some("comparator"));
}

#[rstest]
fn test_source_fault_discards_partial_result() {
    let faulty = source::try_from_fn(|| {
        vec![
            Ok(3),
            Ok(1),
            Err(std::io::Error::other("connection reset")),
            Ok(2),
        ]
    });
    let sequence = OrderedSequence::new(faulty, |n: &i32| *n, NaturalOrder);
    let items: Vec<_> = sequence.iter().collect();
    assert_eq!(items.len(), 1);
    let error = items.into_iter().next().unwrap().unwrap_err();
    assert!(error.is_fault());
    assert!(error.to_string().contains("connection reset"));
    assert!(std::error::Error::source(&error).is_some());
}
