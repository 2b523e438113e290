use std::ops::Add;

use crate::types::Comparison;

use super::avl_tree::AvlTree;
use super::types::OnConflict;

/// Top `n` info values of `tree`, each paired with the sum of the keys that
/// carry it.
///
/// Builds an inverted tree keyed by info (keys sharing an info are summed),
/// then takes its `n` largest entries. The result is in descending info
/// order, flipped back to `(key_sum, info)`.
///
/// ```
/// use avl_forest::avl::{max_info_selector, AvlTree};
///
/// let tree: AvlTree<i32, &str> = [(1, "a"), (2, "b"), (3, "a"), (4, "c")].into_iter().collect();
/// assert_eq!(max_info_selector(&tree, 2), vec![(4, "c"), (2, "b")]);
/// ```
pub fn max_info_selector<K, I, C>(tree: &AvlTree<K, I, C>, n: usize) -> Vec<(K, I)>
where
    K: Clone + Add<Output = K>,
    I: Clone + PartialOrd,
    C: Fn(&K, &K) -> Comparison,
{
    let mut inverted: AvlTree<I, K> =
        AvlTree::new().with_conflict(OnConflict::Combine(|old: &K, new: &K| old.clone() + new.clone()));

    for (key, info) in tree {
        inverted.insert(info.clone(), key.clone());
    }

    inverted
        .get_largest(n)
        .into_iter()
        .map(|(info, key)| (key, info))
        .collect()
}
