//! Persistent (immutable) data structures.
//!
//! - [`PersistentChain`]: persistent append-only list, used to hold the
//!   criteria of an ordered sequence so that refining a sort is O(1) and
//!   never disturbs the chain it was refined from
//!
//! # Structural Sharing
//!
//! Appending creates a new version that shares every existing node with the
//! old one; neither version can observe the other.
//!
//! # Examples
//!
//! ```rust
//! use seqops::persistent::PersistentChain;
//!
//! let chain = PersistentChain::new().push_back(3).push_back(1);
//! let extended = chain.push_back(2);
//! assert_eq!(chain.len(), 2);     // Original unchanged
//! assert_eq!(extended.len(), 3); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// Sequences are single-threaded, so this is always `std::rc::Rc`.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod chain;

pub use chain::PersistentChain;
pub use chain::PersistentChainIterator;
pub use chain::PersistentChainRevIterator;

// =============================================================================
// Tests
// =============================================================================
