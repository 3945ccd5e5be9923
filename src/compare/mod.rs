//! The comparison abstraction.
//!
//! - [`Comparator`]: a total order over a type (`compare(a, b) -> Ordering`)
//! - [`NaturalOrder`], [`Reversed`]: the `Ord` order and its inverse
//! - [`Direction`]: ascending or descending application of an order
//! - [`Projection`]: an order over elements derived from a key selector and
//!   a key comparator; one sort criterion
//! - [`CompositeComparator`]: criteria evaluated in priority order
//! - [`EqualityComparer`]: equivalence and hashing for the set operators
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use seqops::compare::{Comparator, CompositeComparator, Direction, NaturalOrder, Projection};
//!
//! #[derive(Debug)]
//! struct Track {
//!     album: &'static str,
//!     number: u32,
//! }
//!
//! let album_then_track_descending = CompositeComparator::new(Projection::new(
//!     |track: &Track| track.album,
//!     NaturalOrder,
//! ))
//! .with(Projection::with_direction(
//!     |track: &Track| track.number,
//!     NaturalOrder,
//!     Direction::Descending,
//! ));
//!
//! let first = Track { album: "Blue", number: 1 };
//! let second = Track { album: "Blue", number: 2 };
//! assert_eq!(album_then_track_descending.compare(&first, &second), Ordering::Greater);
//! ```

mod comparator;
mod composite;
mod equality;
mod projection;

pub use comparator::{Comparator, Direction, NaturalOrder, Reversed};
pub use composite::{CompositeComparator, SharedComparator};
pub(crate) use equality::Keyed;
pub use equality::{DefaultEquality, EqualityComparer, KeyEquality};
pub use projection::Projection;
