use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::ForestError;
use crate::print::print_sideways;
use crate::types::{compare, Comparator, Comparison, KvNode};
use crate::util::{self as tree_util, Inserted};

use super::types::{AvlNode, OnConflict};
use super::util;

/// Height-balanced binary search tree mapping unique keys to info values.
///
/// Nodes are stored in a dense arena owned by the tree; see the crate docs
/// for the layout. Insert, lookup and removal are `O(log n)`.
///
/// # Example
///
/// ```
/// use avl_forest::avl::{AvlTree, OnConflict};
///
/// let mut tree = AvlTree::new();
/// tree.insert(4, "four");
/// tree.insert(3, "three");
/// tree.insert(2, "two");
/// assert_eq!(tree.root_key(), Some(&3));
/// assert_eq!(tree.height(), 2);
///
/// let mut counts: AvlTree<&str, u32> = AvlTree::new().with_conflict(OnConflict::Combine(|a, b| a + b));
/// counts.insert("x", 1);
/// counts.insert("x", 2);
/// assert_eq!(counts.get(&"x"), Ok(&3));
/// ```
pub struct AvlTree<K, I, C = Comparator<K>>
where
    C: Fn(&K, &K) -> Comparison,
{
    arena: Vec<AvlNode<K, I>>,
    root: Option<u32>,
    comparator: C,
    on_conflict: OnConflict<I>,
}

impl<K, I> AvlTree<K, I, Comparator<K>>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(compare::<K>)
    }
}

impl<K, I> Default for AvlTree<K, I, Comparator<K>>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I, C> AvlTree<K, I, C>
where
    C: Fn(&K, &K) -> Comparison,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            on_conflict: OnConflict::Overwrite,
        }
    }

    /// Sets the policy [`insert`](Self::insert) applies to duplicate keys.
    pub fn with_conflict(mut self, on_conflict: OnConflict<I>) -> Self {
        self.on_conflict = on_conflict;
        self
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.root
            .map_or(0, |i| self.arena[i as usize].height as usize)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| &self.arena[i as usize].k)
    }

    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    fn push_node(&mut self, key: K, info: I) -> u32 {
        self.arena.push(AvlNode::new(key, info));
        (self.arena.len() - 1) as u32
    }

    /// Inserts `key` with the tree's conflict policy (overwrite by default).
    ///
    /// Returns `true` if a new key was added.
    pub fn insert(&mut self, key: K, info: I) -> bool {
        let on_conflict = self.on_conflict;
        self.insert_with(key, info, on_conflict)
    }

    /// Inserts `key`, resolving an existing entry with `on_conflict`.
    ///
    /// An existing key never changes the tree's structure. Returns `true` if
    /// a new key was added.
    pub fn insert_with(&mut self, key: K, info: I, on_conflict: OnConflict<I>) -> bool {
        let node = self.push_node(key, info);
        match util::insert(&mut self.arena, self.root, node, &self.comparator) {
            Inserted::Root(root) => {
                self.root = Some(root);
                true
            }
            Inserted::Existing(existing) => {
                // The new node is the last one in the arena and was never linked.
                if let Some(node) = self.arena.pop() {
                    on_conflict.resolve(self.arena[existing as usize].value_mut(), node.v);
                }
                false
            }
        }
    }

    /// Removes `key`; returns `false` if it was not stored.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` and returns the stored pair.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, I)> {
        let (root, detached) = util::remove(&mut self.arena, self.root, key, &self.comparator)?;
        self.root = root;
        let node = tree_util::release(&mut self.arena, &mut self.root, detached, &self.comparator);
        Some((node.k, node.v))
    }

    fn index_of(&self, key: &K) -> Option<u32> {
        tree_util::find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn find(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Info stored under `key`.
    ///
    /// # Errors
    ///
    /// [`ForestError::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &K) -> Result<&I, ForestError> {
        let i = self.index_of(key).ok_or(ForestError::KeyNotFound)?;
        Ok(self.arena[i as usize].value())
    }

    /// Mutable info stored under `key`.
    ///
    /// # Errors
    ///
    /// [`ForestError::KeyNotFound`] if the key is absent.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut I, ForestError> {
        let i = self.index_of(key).ok_or(ForestError::KeyNotFound)?;
        Ok(self.arena[i as usize].value_mut())
    }

    /// Runs `f` on the info stored under `key` and returns its result.
    ///
    /// # Errors
    ///
    /// [`ForestError::KeyNotFound`] if the key is absent; `f` is not called.
    pub fn with_info<R, F>(&mut self, key: &K, f: F) -> Result<R, ForestError>
    where
        F: FnOnce(&mut I) -> R,
    {
        self.get_mut(key).map(f)
    }

    /// Smallest entry.
    pub fn first(&self) -> Option<(&K, &I)> {
        tree_util::first(&self.arena, self.root).map(|i| self.entry(i))
    }

    /// Largest entry.
    pub fn last(&self) -> Option<(&K, &I)> {
        tree_util::last(&self.arena, self.root).map(|i| self.entry(i))
    }

    fn entry(&self, i: u32) -> (&K, &I) {
        let n = &self.arena[i as usize];
        (&n.k, &n.v)
    }

    /// Whether every node's balance factor is within `-1..=1`.
    pub fn balanced(&self) -> bool {
        util::balanced(&self.arena, self.root)
    }

    /// Full structural check: cached heights, balance, key order and size.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let count = tree_util::size(&self.arena, self.root);
        if count != self.arena.len() {
            return Err(format!(
                "Size mismatch: {count} reachable nodes, {} stored",
                self.arena.len()
            ));
        }
        Ok(())
    }

    /// Visits entries in ascending key order; the info may be modified.
    pub fn for_each<F: FnMut(&K, &mut I)>(&mut self, mut f: F) {
        tree_util::for_each_mut(&mut self.arena, self.root, &mut f);
    }

    /// Ascending iterator over `(key, info)`; reversible.
    pub fn iter(&self) -> Iter<'_, K, I> {
        Iter {
            inner: tree_util::Iter::new(&self.arena, self.root, self.arena.len()),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &I> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Up to `n` entries with the largest keys, in descending order.
    pub fn get_largest(&self, n: usize) -> Vec<(K, I)>
    where
        K: Clone,
        I: Clone,
    {
        self.iter()
            .rev()
            .take(n)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Up to `n` entries with the smallest keys, in ascending order.
    pub fn get_smallest(&self, n: usize) -> Vec<(K, I)>
    where
        K: Clone,
        I: Clone,
    {
        self.iter()
            .take(n)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Writes the tree sideways: right subtree above, left subtree below.
    pub fn print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        K: fmt::Display,
        I: fmt::Display,
    {
        print_sideways(&self.arena, self.root, 0, out)
    }

    /// Structural dump with arena indices, heights and balance factors.
    pub fn dump(&self) -> String
    where
        K: fmt::Debug,
        I: fmt::Debug,
    {
        format!("AvlTree\n{}", util::print(&self.arena, self.root, ""))
    }
}

fn copy_subtree<K: Clone, I: Clone>(
    src: &[AvlNode<K, I>],
    node: Option<u32>,
    dst: &mut Vec<AvlNode<K, I>>,
) -> Option<u32> {
    let n = &src[node? as usize];
    let idx = dst.len();
    dst.push(AvlNode {
        l: None,
        r: None,
        k: n.k.clone(),
        v: n.v.clone(),
        height: n.height,
        bf: n.bf,
    });
    let l = copy_subtree(src, n.l, dst);
    let r = copy_subtree(src, n.r, dst);
    dst[idx].l = l;
    dst[idx].r = r;
    Some(idx as u32)
}

impl<K, I, C> Clone for AvlTree<K, I, C>
where
    K: Clone,
    I: Clone,
    C: Fn(&K, &K) -> Comparison + Clone,
{
    /// Deep copy: every node is rebuilt, preorder, into a fresh arena.
    fn clone(&self) -> Self {
        let mut arena = Vec::with_capacity(self.arena.len());
        let root = copy_subtree(&self.arena, self.root, &mut arena);
        log::debug!("copied tree of {} nodes", arena.len());
        Self {
            arena,
            root,
            comparator: self.comparator.clone(),
            on_conflict: self.on_conflict,
        }
    }
}

impl<K, I, C> Index<&K> for AvlTree<K, I, C>
where
    C: Fn(&K, &K) -> Comparison,
{
    type Output = I;

    /// # Panics
    ///
    /// Panics with `KEY_NOT_FOUND` if the key is absent.
    fn index(&self, key: &K) -> &I {
        match self.get(key) {
            Ok(info) => info,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, I, C> IndexMut<&K> for AvlTree<K, I, C>
where
    C: Fn(&K, &K) -> Comparison,
{
    fn index_mut(&mut self, key: &K) -> &mut I {
        match self.get_mut(key) {
            Ok(info) => info,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, I, C> fmt::Display for AvlTree<K, I, C>
where
    K: fmt::Display,
    I: fmt::Display,
    C: Fn(&K, &K) -> Comparison,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl<K, I, C> fmt::Debug for AvlTree<K, I, C>
where
    K: fmt::Debug,
    I: fmt::Debug,
    C: Fn(&K, &K) -> Comparison,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, I, C> PartialEq for AvlTree<K, I, C>
where
    K: PartialEq,
    I: PartialEq,
    C: Fn(&K, &K) -> Comparison,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, I, C> Extend<(K, I)> for AvlTree<K, I, C>
where
    C: Fn(&K, &K) -> Comparison,
{
    fn extend<T: IntoIterator<Item = (K, I)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, I> FromIterator<(K, I)> for AvlTree<K, I, Comparator<K>>
where
    K: PartialOrd,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, I, C> IntoIterator for &'a AvlTree<K, I, C>
where
    C: Fn(&K, &K) -> Comparison,
{
    type Item = (&'a K, &'a I);
    type IntoIter = Iter<'a, K, I>;

    fn into_iter(self) -> Iter<'a, K, I> {
        self.iter()
    }
}

/// Inorder iterator returned by [`AvlTree::iter`].
pub struct Iter<'a, K, I> {
    inner: tree_util::Iter<'a, AvlNode<K, I>>,
}

impl<'a, K, I> Iterator for Iter<'a, K, I> {
    type Item = (&'a K, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|n| (&n.k, &n.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, I> DoubleEndedIterator for Iter<'_, K, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|n| (&n.k, &n.v))
    }
}

impl<K, I> ExactSizeIterator for Iter<'_, K, I> {}
