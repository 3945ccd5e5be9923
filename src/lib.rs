//! # seqops
//!
//! Deferred sequence operators with incrementally refinable, stable,
//! multi-key ordering.
//!
//! ## Overview
//!
//! A [`Source`](source::Source) is a sequence that can be iterated any number
//! of times. On top of it this library provides:
//!
//! - **Comparison**: single-key comparators, key projections, composite
//!   multi-criteria comparators and equality comparers
//! - **Ordering**: [`OrderedSequence`](ordered::OrderedSequence), a deferred
//!   stable sort whose criteria can be refined one level at a time without
//!   disturbing earlier versions
//! - **Operators**: lazy filtering, projection, set and join operators, and
//!   eager terminals, all re-iterable
//! - **Persistent Data Structures**: the append-only chain holding sort
//!   criteria
//!
//! Errors never surface while a query is being built. They are yielded when
//! it is consumed, as a [`SequenceError`].
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid`
//! - `compare`: comparators and equality comparers
//! - `persistent`: persistent data structures
//! - `ordered`: ordered sequences
//! - `operators`: one-pass query operators
//! - `full`: enable all of the above (the default)
//! - `fxhash` / `ahash`: hash builder used by the hash-based operators
//!
//! ## Example
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Employee {
//!     department: &'static str,
//!     salary: u32,
//!     name: &'static str,
//! }
//!
//! let staff = vec![
//!     Employee { department: "ops", salary: 70, name: "Ryu" },
//!     Employee { department: "dev", salary: 90, name: "Ana" },
//!     Employee { department: "dev", salary: 90, name: "Bea" },
//!     Employee { department: "dev", salary: 95, name: "Cal" },
//! ];
//!
//! let roster = (&staff)
//!     .order_by_key(|employee: &Employee| employee.department)
//!     .then_by_key_descending(|employee: &Employee| employee.salary);
//!
//! let names = roster
//!     .iter()
//!     .map(|employee| employee.map(|employee| employee.name))
//!     .collect::<Result<Vec<_>>>()
//!     .unwrap();
//! assert_eq!(names, vec!["Cal", "Ana", "Bea", "Ryu"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SequenceError};
    pub use crate::source::Source;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compare")]
    pub use crate::compare::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "ordered")]
    pub use crate::ordered::*;

    #[cfg(feature = "operators")]
    pub use crate::operators::{Grouping, SourceExt};
}

pub mod error;
pub mod source;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compare")]
pub mod compare;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "operators")]
pub mod operators;

pub use error::{Result, SequenceError};
