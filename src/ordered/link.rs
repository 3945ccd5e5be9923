//! One link of a sort chain.

use std::rc::Rc;

use crate::compare::{Comparator, CompositeComparator, Direction, Projection, SharedComparator};
use crate::error::{Result, SequenceError};
use crate::persistent::PersistentChain;
use crate::typeclass::Monoid;

/// A sort criterion, or the record of one that was never supplied.
///
/// An absent criterion is kept in the chain so that the failure surfaces
/// when the chain is first used to compare, not when it is configured.
pub(crate) enum Link<'a, T> {
    Present(SharedComparator<'a, T>),
    Absent { parameter: &'static str },
}

impl<'a, T> Link<'a, T> {
    pub(crate) fn comparator<C>(comparator: C) -> Self
    where
        C: Comparator<T> + 'a,
    {
        Self::Present(Rc::new(comparator))
    }

    pub(crate) fn projection<F, C, K>(
        key_selector: Option<F>,
        comparator: Option<C>,
        direction: Direction,
    ) -> Self
    where
        F: Fn(&T) -> K + 'a,
        C: Comparator<K> + 'a,
        K: 'a,
    {
        match (key_selector, comparator) {
            (Some(key_selector), Some(comparator)) => Self::comparator(
                Projection::with_direction(key_selector, comparator, direction),
            ),
            (None, _) => Self::Absent {
                parameter: "key_selector",
            },
            (Some(_), None) => Self::Absent {
                parameter: "comparator",
            },
        }
    }
}

impl<T> Clone for Link<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Present(comparator) => Self::Present(Rc::clone(comparator)),
            Self::Absent { parameter } => Self::Absent {
                parameter: *parameter,
            },
        }
    }
}

/// Turns a chain of links into the comparator it describes.
///
/// # Errors
///
/// Returns [`SequenceError::NullArgument`] for the first absent link, in
/// priority order.
pub(crate) fn resolve<'a, T>(
    chain: &PersistentChain<Link<'a, T>>,
) -> Result<CompositeComparator<'a, T>> {
    let mut criteria = Vec::with_capacity(chain.len());
    for link in chain {
        match link {
            Link::Present(comparator) => criteria.push(Rc::clone(comparator)),
            Link::Absent { parameter } => {
                tracing::debug!(parameter = *parameter, "sort chain contains an absent argument");
                return Err(SequenceError::NullArgument {
                    parameter: *parameter,
                });
            }
        }
    }
    Ok(CompositeComparator::from_comparators(criteria).unwrap_or_else(CompositeComparator::empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;
    use rstest::rstest;
    use std::cmp::Ordering;

    fn identity(value: &i32) -> i32 {
        *value
    }

    #[rstest]
    fn test_present_links_resolve_in_order() {
        let chain = PersistentChain::new()
            .push_back(Link::projection(
                Some(|value: &i32| value % 2),
                Some(NaturalOrder),
                Direction::Ascending,
            ))
            .push_back(Link::projection(
                Some(identity),
                Some(NaturalOrder),
                Direction::Descending,
            ));
        let comparator = resolve(&chain).unwrap();
        assert_eq!(comparator.len(), 2);
        assert_eq!(comparator.compare(&2, &1), Ordering::Less);
        assert_eq!(comparator.compare(&2, &4), Ordering::Greater);
    }

    #[rstest]
    fn test_absent_selector_is_reported() {
        let link: Link<'_, i32> =
            Link::projection(None::<fn(&i32) -> i32>, Some(NaturalOrder), Direction::Ascending);
        assert!(matches!(link, Link::Absent { parameter: "key_selector" }));
        let error = resolve(&PersistentChain::singleton(link)).unwrap_err();
        assert_eq!(error.parameter(), Some("key_selector"));
    }

    #[rstest]
    fn test_absent_comparator_is_reported() {
        let link: Link<'_, i32> =
            Link::projection(Some(identity), None::<NaturalOrder>, Direction::Ascending);
        let error = resolve(&PersistentChain::singleton(link)).unwrap_err();
        assert_eq!(error.parameter(), Some("comparator"));
    }

    #[rstest]
    fn test_first_absent_link_wins() {
        let chain: PersistentChain<Link<'_, i32>> = PersistentChain::new()
            .push_back(Link::comparator(NaturalOrder))
            .push_back(Link::Absent {
                parameter: "comparator",
            })
            .push_back(Link::Absent {
                parameter: "key_selector",
            });
        let error = resolve(&chain).unwrap_err();
        assert_eq!(error.parameter(), Some("comparator"));
    }
}
