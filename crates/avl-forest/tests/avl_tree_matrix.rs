use avl_forest::avl::{AvlTree, OnConflict};
use avl_forest::{Comparison, ForestError};

fn tree_of(keys: &[i32]) -> AvlTree<i32, String> {
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(k, format!("v{k}"));
    }
    tree
}

fn keys_of<I>(tree: &AvlTree<i32, I>) -> Vec<i32> {
    tree.keys().copied().collect()
}

#[test]
fn avl_rotation_scenarios_matrix() {
    let cases: [(&str, [i32; 3]); 4] = [
        ("left-left", [4, 3, 2]),
        ("right-right", [2, 3, 4]),
        ("left-right", [4, 2, 3]),
        ("right-left", [2, 4, 3]),
    ];

    for (name, keys) in cases {
        let tree = tree_of(&keys);
        assert!(tree.balanced(), "{name}");
        assert_eq!(tree.height(), 2, "{name}");
        assert_eq!(tree.root_key(), Some(&3), "{name}");
        assert_eq!(keys_of(&tree), vec![2, 3, 4], "{name}");
        tree.assert_valid().unwrap();
    }
}

#[test]
fn avl_two_children_removal_matrix() {
    let mut tree = tree_of(&[10, 5, 15, 2, 8, 12, 18]);
    assert_eq!(tree.size(), 7);

    assert!(tree.remove(&15));
    assert!(!tree.find(&15));
    assert_eq!(tree.size(), 6);
    assert!(tree.balanced());
    assert_eq!(keys_of(&tree), vec![2, 5, 8, 10, 12, 18]);
    assert_eq!(tree.get(&18), Ok(&"v18".to_string()));
    assert_eq!(tree.get(&12), Ok(&"v12".to_string()));
    tree.assert_valid().unwrap();

    assert!(tree.remove(&10));
    assert_eq!(tree.root_key(), Some(&12));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_get_largest_bounds_matrix() {
    let tree = tree_of(&[10, 5, 15, 2, 8, 12, 18]);

    let top: Vec<i32> = tree.get_largest(3).into_iter().map(|(k, _)| k).collect();
    assert_eq!(top, vec![18, 15, 12]);
    assert_eq!(tree.get_largest(3)[0], (18, "v18".to_string()));

    assert!(tree.get_largest(0).is_empty());

    let all: Vec<i32> = tree.get_largest(100).into_iter().map(|(k, _)| k).collect();
    assert_eq!(all, vec![18, 15, 12, 10, 8, 5, 2]);
}

#[test]
fn avl_get_smallest_bounds_matrix() {
    let tree = tree_of(&[10, 5, 15, 2, 8, 12, 18]);

    let low: Vec<i32> = tree.get_smallest(2).into_iter().map(|(k, _)| k).collect();
    assert_eq!(low, vec![2, 5]);
    assert!(tree.get_smallest(0).is_empty());
    assert_eq!(tree.get_smallest(7), tree.get_smallest(8));
    assert_eq!(tree.get_smallest(8).len(), 7);

    let empty = AvlTree::<i32, i32>::new();
    assert!(empty.get_largest(5).is_empty());
    assert!(empty.get_smallest(5).is_empty());
}

#[test]
fn avl_remove_absent_key_matrix() {
    let mut tree = tree_of(&[1, 2, 3, 4, 5]);
    let before = tree.dump();

    assert!(!tree.remove(&42));
    assert!(!tree.remove(&0));
    assert_eq!(tree.size(), 5);
    assert_eq!(tree.dump(), before);

    let mut empty = AvlTree::<i32, i32>::new();
    assert!(!empty.remove(&1));
    assert!(empty.is_empty());
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();

    for i in 0..300 {
        tree.insert(i, i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);
    assert!(tree.height() <= 10);

    for i in (0..300).step_by(3) {
        assert!(tree.remove(&i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 200);

    for i in 0..300 {
        if i % 3 == 0 {
            assert!(!tree.find(&i));
            assert_eq!(tree.get(&i), Err(ForestError::KeyNotFound));
        } else {
            assert_eq!(tree.get(&i), Ok(&i));
        }
    }

    for i in (0..300).rev() {
        tree.remove(&i);
        assert!(tree.balanced());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn avl_round_trip_last_write_matrix() {
    let mut tree = AvlTree::<&str, i32>::new();
    tree.insert("a", 1);
    tree.insert("b", 2);
    tree.insert("a", 3);
    *tree.get_mut(&"b").unwrap() = 20;
    tree.with_info(&"a", |v| *v += 1).unwrap();

    assert_eq!(tree.get(&"a"), Ok(&4));
    assert_eq!(tree.get(&"b"), Ok(&20));
    assert_eq!(tree.size(), 2);

    assert!(tree.remove(&"a"));
    assert!(!tree.find(&"a"));
    assert_eq!(tree.with_info(&"a", |v| *v), Err(ForestError::KeyNotFound));
    assert_eq!(tree.get_mut(&"zz"), Err(ForestError::KeyNotFound));
    assert_eq!(ForestError::KeyNotFound.to_string(), "KEY_NOT_FOUND");
}

#[test]
fn avl_conflict_policy_matrix() {
    let mut tree = AvlTree::<i32, i32>::new().with_conflict(OnConflict::Combine(|a, b| a + b));
    tree.insert(1, 10);
    tree.insert(1, 5);
    assert_eq!(tree[&1], 15);

    tree.insert_with(1, 100, OnConflict::Overwrite);
    assert_eq!(tree[&1], 100);

    let mut keep = AvlTree::<i32, &str>::new().with_conflict(OnConflict::KeepOld);
    assert!(keep.insert(7, "first"));
    assert!(!keep.insert(7, "second"));
    assert_eq!(keep[&7], "first");

    let extended: AvlTree<i32, i32> = [(1, 1), (1, 2), (2, 3)].into_iter().collect();
    assert_eq!(extended[&1], 2);
    assert_eq!(extended.len(), 2);
}

#[test]
fn avl_copy_independence_matrix() {
    let mut a = tree_of(&[10, 5, 15, 2, 8]);
    let mut b = a.clone();

    assert_eq!(a, b);
    assert_eq!(a.height(), b.height());
    assert_eq!(a.root_key(), b.root_key());
    b.assert_valid().unwrap();

    b.insert(100, "new".to_string());
    b.remove(&10);
    b[&5] = "changed".to_string();

    assert_eq!(a.size(), 5);
    assert!(a.find(&10));
    assert!(!a.find(&100));
    assert_eq!(a[&5], "v5");
    a.assert_valid().unwrap();
    b.assert_valid().unwrap();

    a.clear();
    assert!(a.is_empty());
    assert_eq!(b.size(), 5);

    // clone_from replaces the whole content
    a.clone_from(&b);
    assert_eq!(a, b);
}

#[test]
fn avl_for_each_matrix() {
    let mut tree = tree_of(&[3, 1, 2]);
    let mut seen = Vec::new();
    tree.for_each(|k, v| {
        seen.push(*k);
        v.push('!');
    });

    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(tree[&2], "v2!");
    tree.assert_valid().unwrap();
}

#[test]
fn avl_iteration_matrix() {
    let tree = tree_of(&[5, 1, 4, 2, 3]);

    let forward: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(forward, vec![1, 2, 3, 4, 5]);
    let backward: Vec<i32> = tree.iter().rev().map(|(k, _)| *k).collect();
    assert_eq!(backward, vec![5, 4, 3, 2, 1]);

    let mut it = tree.iter();
    assert_eq!(it.len(), 5);
    assert_eq!(it.next().map(|(k, _)| *k), Some(1));
    assert_eq!(it.next_back().map(|(k, _)| *k), Some(5));
    assert_eq!(it.next().map(|(k, _)| *k), Some(2));
    assert_eq!(it.next_back().map(|(k, _)| *k), Some(4));
    assert_eq!(it.next().map(|(k, _)| *k), Some(3));
    assert_eq!(it.next_back(), None);
    assert_eq!(it.next(), None);

    assert_eq!(tree.first().map(|(k, _)| *k), Some(1));
    assert_eq!(tree.last().map(|(k, v)| (*k, v.as_str())), Some((5, "v5")));

    let values: Vec<&String> = tree.values().collect();
    assert_eq!(values[0], "v1");

    let mut count = 0;
    for (k, v) in &tree {
        assert_eq!(v, &format!("v{k}"));
        count += 1;
    }
    assert_eq!(count, 5);
}

#[test]
fn avl_custom_comparator_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| Comparison::from(b.cmp(a)));
    for k in [1, 5, 3, 9, 7] {
        tree.insert(k, ());
    }
    let keys: Vec<i32> = tree.keys().copied().collect();
    assert_eq!(keys, vec![9, 7, 5, 3, 1]);
    assert!(tree.remove(&5));
    tree.assert_valid().unwrap();
    assert_eq!(tree.get_smallest(1), vec![(9, ())]);
}

#[test]
fn avl_print_matrix() {
    let tree = tree_of(&[2, 1, 3, 4]);
    let mut out = String::new();
    tree.print(&mut out).unwrap();
    assert_eq!(
        out,
        [
            "            4:v4",
            "      3:v3",
            " 2:v2",
            "      1:v1",
            "",
        ]
        .join("\n")
    );

    let mut empty = String::new();
    AvlTree::<i32, i32>::new().print(&mut empty).unwrap();
    assert!(empty.is_empty());
}
