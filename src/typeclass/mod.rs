//! Algebraic structures used to compose comparisons.
//!
//! - [`Semigroup`]: associative binary operations (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! `std::cmp::Ordering` is a monoid under lexicographic combination, and
//! [`CompositeComparator`](crate::compare::CompositeComparator) is a monoid
//! under criteria concatenation. Together they give "sort by A, then by B"
//! its algebra.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use seqops::typeclass::{Monoid, Semigroup};
//!
//! let by_last_name = Ordering::Equal;
//! let by_first_name = Ordering::Less;
//! assert_eq!(by_last_name.combine(by_first_name), Ordering::Less);
//! assert_eq!(Ordering::empty(), Ordering::Equal);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
