//! Deferred, stable, multi-key ordering.
//!
//! An [`OrderedSequence`] pairs a [`Source`](crate::source::Source) with a
//! persistent chain of sort criteria. The primary criterion is given when the
//! sequence is created; every `then_*` call returns a new sequence with one
//! more, subordinate criterion. Nothing is sorted until the sequence is
//! iterated, and each iteration sorts a fresh copy of the source.
//!
//! The sort is stable: elements that every criterion considers equal keep the
//! order in which the source produced them.
//!
//! # Errors
//!
//! Building and refining a sequence never fails. Failures are yielded by the
//! [`Sorted`] iteration, as its only item:
//!
//! - an absent source, when iteration starts
//! - a faulting source, while it is being read
//! - an absent key selector or comparator, when a comparison is first needed
//!
//! # Examples
//!
//! ```rust
//! use seqops::compare::NaturalOrder;
//! use seqops::ordered::OrderedSequence;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Task {
//!     priority: u8,
//!     name: &'static str,
//! }
//!
//! let tasks = vec![
//!     Task { priority: 2, name: "deploy" },
//!     Task { priority: 1, name: "review" },
//!     Task { priority: 2, name: "build" },
//! ];
//!
//! let plan = OrderedSequence::new(tasks, |task: &Task| task.priority, NaturalOrder)
//!     .then_by_key(|task: &Task| task.name);
//!
//! let names = plan
//!     .iter()
//!     .map(|task| task.map(|task| task.name))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(names, vec!["review", "build", "deploy"]);
//! ```

mod link;
mod merge;
mod sequence;
mod sorted;

pub use sequence::OrderedSequence;
pub use sorted::Sorted;

static_assertions::assert_not_impl_any!(OrderedSequence<'static, Vec<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Sorted<'static, Vec<i32>>: Send, Sync);
static_assertions::assert_impl_all!(OrderedSequence<'static, Vec<i32>>: Clone, std::fmt::Debug);
