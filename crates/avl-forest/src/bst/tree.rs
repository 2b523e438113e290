use std::fmt;
use std::ops::Rem;

use crate::types::{compare, Comparator, Comparison};
use crate::util::{self, keep, Inserted};

use super::tree_node::TreeNode;

/// Unbalanced binary search tree with unique keys.
///
/// Shares the arena layout and removal scheme of [`AvlTree`](crate::avl::AvlTree)
/// but never rotates, so its shape depends on insertion order.
pub struct BinarySearchTree<K, I, C = Comparator<K>>
where
    C: Fn(&K, &K) -> Comparison,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<TreeNode<K, I>>,
}

impl<K, I> BinarySearchTree<K, I, Comparator<K>>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(compare::<K>)
    }
}

impl<K, I> Default for BinarySearchTree<K, I, Comparator<K>>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I, C> BinarySearchTree<K, I, C>
where
    C: Fn(&K, &K) -> Comparison,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds a leaf for `key`. An existing key is left as it is and `false`
    /// is returned.
    pub fn insert(&mut self, key: K, info: I) -> bool {
        self.arena.push(TreeNode::new(key, info));
        let node = (self.arena.len() - 1) as u32;
        let inserted = util::insert(
            &mut self.arena,
            self.root,
            node,
            &self.comparator,
            &keep::<TreeNode<K, I>>,
        );
        match inserted {
            Inserted::Root(root) => {
                self.root = Some(root);
                true
            }
            Inserted::Existing(_) => {
                self.arena.pop();
                false
            }
        }
    }

    /// Removes `key`; a node with two children takes its inorder
    /// successor's entry. Returns `false` if the key was not stored.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = util::remove(
            &mut self.arena,
            self.root,
            key,
            &self.comparator,
            &keep::<TreeNode<K, I>>,
        );
        let Some((root, detached)) = removed else {
            return false;
        };
        self.root = root;
        util::release(&mut self.arena, &mut self.root, detached, &self.comparator);
        true
    }

    pub fn find(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&I> {
        util::find(&self.arena, self.root, key, &self.comparator).map(|i| &self.arena[i as usize].v)
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        util::leaves(&self.arena, self.root)
    }

    /// Longest root-to-leaf path in nodes; 0 when empty.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Number of keys satisfying `pred`.
    pub fn count_by<P: FnMut(&K) -> bool>(&self, mut pred: P) -> usize {
        util::count_by(&self.arena, self.root, &mut pred)
    }

    pub fn count_odd(&self) -> usize
    where
        K: Copy + PartialEq + Rem<Output = K> + From<u8>,
    {
        self.count_by(|&k| k % K::from(2) != K::from(0))
    }

    pub fn count_even(&self) -> usize
    where
        K: Copy + PartialEq + Rem<Output = K> + From<u8>,
    {
        self.count_by(|&k| k % K::from(2) == K::from(0))
    }

    /// Ascending iterator over `(key, info)`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &I)> + ExactSizeIterator + '_ {
        util::Iter::new(&self.arena, self.root, self.arena.len()).map(|n| (&n.k, &n.v))
    }
}

impl<K, I, C> fmt::Display for BinarySearchTree<K, I, C>
where
    K: fmt::Display,
    I: fmt::Display,
    C: Fn(&K, &K) -> Comparison,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.iter() {
            writeln!(f, "Key: {k}, Info: {v}")?;
        }
        Ok(())
    }
}
