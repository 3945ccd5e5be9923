//! Property-based tests for PersistentChain.
//!
//! These tests verify that the chain behaves like an append-only `Vec` and
//! that appending never disturbs an earlier version.

use proptest::prelude::*;
use seqops::persistent::PersistentChain;

// =============================================================================
// Strategy for generating PersistentChain
// =============================================================================

fn elements(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

proptest! {
    // =========================================================================
    // Model Properties
    // =========================================================================

    #[test]
    fn prop_iter_matches_insertion_order(values in elements(40)) {
        let chain: PersistentChain<i32> = values.iter().copied().collect();
        let collected: Vec<i32> = chain.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    #[test]
    fn prop_iter_rev_is_reverse_of_iter(values in elements(40)) {
        let chain: PersistentChain<i32> = values.into_iter().collect();
        let forward: Vec<&i32> = chain.iter().collect();
        let mut backward: Vec<&i32> = chain.iter_rev().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_len_matches_iter_count(values in elements(40)) {
        let chain: PersistentChain<i32> = values.into_iter().collect();
        prop_assert_eq!(chain.len(), chain.iter().count());
        prop_assert_eq!(chain.iter().len(), chain.iter_rev().len());
        prop_assert_eq!(chain.is_empty(), chain.len() == 0);
    }

    #[test]
    fn prop_first_and_last_match_model(values in elements(40)) {
        let chain: PersistentChain<i32> = values.iter().copied().collect();
        prop_assert_eq!(chain.first(), values.first());
        prop_assert_eq!(chain.last(), values.last());
    }

    // =========================================================================
    // Persistence Properties
    // =========================================================================

    #[test]
    fn prop_push_back_leaves_original_unchanged(values in elements(30), element: i32) {
        let chain: PersistentChain<i32> = values.iter().copied().collect();
        let extended = chain.push_back(element);
        let original: Vec<i32> = chain.iter().copied().collect();
        prop_assert_eq!(original, values);
        prop_assert_eq!(extended.len(), chain.len() + 1);
        prop_assert_eq!(extended.last(), Some(&element));
    }

    #[test]
    fn prop_init_undoes_push_back(values in elements(30), element: i32) {
        let chain: PersistentChain<i32> = values.into_iter().collect();
        let restored = chain.push_back(element).init();
        prop_assert_eq!(&restored, &chain);
        prop_assert!(restored.shares_storage_with(&chain));
    }

    #[test]
    fn prop_siblings_are_independent(values in elements(30), left: i32, right: i32) {
        let base: PersistentChain<i32> = values.into_iter().collect();
        let left_branch = base.push_back(left);
        let right_branch = base.push_back(right);
        prop_assert_eq!(left_branch.last(), Some(&left));
        prop_assert_eq!(right_branch.last(), Some(&right));
        prop_assert!(left_branch.init().shares_storage_with(&right_branch.init()));
    }
}
