use std::collections::BTreeMap;

use avl_forest::avl::AvlTree;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Insert(i16, u8),
    Remove(i16),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (any::<i16>(), any::<u8>()).prop_map(|(k, v)| Step::Insert(k % 100, v)),
        1 => any::<i16>().prop_map(|k| Step::Remove(k % 100)),
    ]
}

proptest! {
    #[test]
    fn avl_matches_btreemap(steps in prop::collection::vec(step(), 0..200)) {
        let mut tree = AvlTree::<i16, u8>::new();
        let mut model = BTreeMap::new();

        for step in steps {
            match step {
                Step::Insert(k, v) => {
                    prop_assert_eq!(tree.insert(k, v), model.insert(k, v).is_none());
                }
                Step::Remove(k) => {
                    prop_assert_eq!(tree.remove_entry(&k), model.remove_entry(&k));
                }
            }
            prop_assert!(tree.balanced());
        }

        prop_assert_eq!(tree.size(), model.len());
        prop_assert!(tree.iter().eq(model.iter()));
        prop_assert!(tree.assert_valid().is_ok());
    }

    #[test]
    fn avl_keys_ascend_and_height_is_logarithmic(keys in prop::collection::vec(any::<u32>(), 1..300)) {
        let tree: AvlTree<u32, ()> = keys.iter().map(|&k| (k, ())).collect();

        let sorted: Vec<u32> = tree.keys().copied().collect();
        prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

        let n = tree.size() as f64;
        let bound = (1.45 * (n + 2.0).log2()).floor() as usize;
        prop_assert!(tree.height() <= bound, "height {} > {}", tree.height(), bound);
    }

    #[test]
    fn avl_get_largest_is_reverse_prefix(keys in prop::collection::vec(0i32..1000, 0..100), n in 0usize..120) {
        let tree: AvlTree<i32, i32> = keys.iter().map(|&k| (k, k * 2)).collect();
        let largest = tree.get_largest(n);

        let expected: Vec<(i32, i32)> = tree.iter().rev().take(n).map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(largest.len(), n.min(tree.size()));
        prop_assert_eq!(largest, expected);
    }
}
