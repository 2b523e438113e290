//! Arena tree utilities shared by the AVL tree and the plain BST.
//!
//! Everything here works on a `&[N]` / `&mut [N]` arena and `u32` indices.
//! Structural operations take a `retrace` callback which is invoked on every
//! node on the way back up from a change and returns the (possibly new)
//! root of that node's subtree. The plain BST passes [`keep`]; the AVL tree
//! passes its height update + rebalance step.

pub mod iter;
pub mod swap;

use crate::types::{Comparison, KvNode, Node};

pub use iter::Iter;
pub use swap::swap_entries;

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Retrace step that leaves the subtree as it is.
pub fn keep<N>(_arena: &mut [N], idx: u32) -> u32 {
    idx
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + size(arena, get_l(arena, i)) + size(arena, get_r(arena, i))
    })
}

/// Height of the tree under `root`; empty is 0, a leaf is 1.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)))
    })
}

/// Number of nodes without children.
pub fn leaves<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(i) = root else {
        return 0;
    };
    match (get_l(arena, i), get_r(arena, i)) {
        (None, None) => 1,
        (l, r) => leaves(arena, l) + leaves(arena, r),
    }
}

/// Number of nodes whose key satisfies `pred`.
pub fn count_by<N, P>(arena: &[N], root: Option<u32>, pred: &mut P) -> usize
where
    N: KvNode,
    P: FnMut(&N::Key) -> bool,
{
    let Some(i) = root else {
        return 0;
    };
    let hit = usize::from(pred(arena[i as usize].key()));
    hit + count_by(arena, get_l(arena, i), pred) + count_by(arena, get_r(arena, i), pred)
}

/// Finds a node by key.
pub fn find<N, C>(arena: &[N], root: Option<u32>, key: &N::Key, comparator: &C) -> Option<u32>
where
    N: KvNode,
    C: Fn(&N::Key, &N::Key) -> Comparison,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, arena[i as usize].key()) {
            Comparison::Equal => return Some(i),
            Comparison::Less => get_l(arena, i),
            Comparison::Greater => get_r(arena, i),
        };
    }
    None
}

/// Inorder visit handing out the value mutably.
pub fn for_each_mut<N, F>(arena: &mut [N], root: Option<u32>, f: &mut F)
where
    N: KvNode,
    F: FnMut(&N::Key, &mut N::Value),
{
    let Some(i) = root else {
        return;
    };
    let l = get_l(arena, i);
    let r = get_r(arena, i);
    for_each_mut(arena, l, f);
    let (k, v) = arena[i as usize].entry_mut();
    f(k, v);
    for_each_mut(arena, r, f);
}

/// Outcome of [`insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inserted {
    /// The node was linked in; carries the new root.
    Root(u32),
    /// A node with an equal key already exists; nothing was changed.
    Existing(u32),
}

/// Links the detached node `node` into the tree by its key.
///
/// Every ancestor of the new leaf is passed through `retrace`, bottom-up.
pub fn insert<N, C, F>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    comparator: &C,
    retrace: &F,
) -> Inserted
where
    N: KvNode,
    C: Fn(&N::Key, &N::Key) -> Comparison,
    F: Fn(&mut [N], u32) -> u32,
{
    let Some(curr) = root else {
        return Inserted::Root(node);
    };

    match comparator(arena[node as usize].key(), arena[curr as usize].key()) {
        Comparison::Equal => return Inserted::Existing(curr),
        Comparison::Less => {
            let l = get_l(arena, curr);
            match insert(arena, l, node, comparator, retrace) {
                Inserted::Root(l) => set_l(arena, curr, Some(l)),
                existing => return existing,
            }
        }
        Comparison::Greater => {
            let r = get_r(arena, curr);
            match insert(arena, r, node, comparator, retrace) {
                Inserted::Root(r) => set_r(arena, curr, Some(r)),
                existing => return existing,
            }
        }
    }

    Inserted::Root(retrace(arena, curr))
}

/// Unlinks the minimum node of the subtree at `node`.
///
/// Returns the new subtree root and the index of the detached node.
pub fn remove_min<N, F>(arena: &mut [N], node: u32, retrace: &F) -> (Option<u32>, u32)
where
    N: Node,
    F: Fn(&mut [N], u32) -> u32,
{
    match get_l(arena, node) {
        None => {
            let r = get_r(arena, node);
            set_r(arena, node, None);
            (r, node)
        }
        Some(l) => {
            let (l, min) = remove_min(arena, l, retrace);
            set_l(arena, node, l);
            (Some(retrace(arena, node)), min)
        }
    }
}

/// Unlinks the entry with `key`.
///
/// A node with two children takes over the entry of its inorder successor,
/// and the successor's node is unlinked instead. Returns `None` when the key
/// is absent, otherwise the new root and the index of the detached node,
/// which now holds the removed entry.
pub fn remove<N, C, F>(
    arena: &mut [N],
    root: Option<u32>,
    key: &N::Key,
    comparator: &C,
    retrace: &F,
) -> Option<(Option<u32>, u32)>
where
    N: KvNode,
    C: Fn(&N::Key, &N::Key) -> Comparison,
    F: Fn(&mut [N], u32) -> u32,
{
    let curr = root?;
    let l = get_l(arena, curr);
    let r = get_r(arena, curr);

    let detached = match comparator(key, arena[curr as usize].key()) {
        Comparison::Less => {
            let (l, detached) = remove(arena, l, key, comparator, retrace)?;
            set_l(arena, curr, l);
            detached
        }
        Comparison::Greater => {
            let (r, detached) = remove(arena, r, key, comparator, retrace)?;
            set_r(arena, curr, r);
            detached
        }
        Comparison::Equal => match (l, r) {
            (Some(_), Some(r)) => {
                let (r, successor) = remove_min(arena, r, retrace);
                set_r(arena, curr, r);
                swap_entries(arena, curr, successor);
                successor
            }
            (child, None) | (None, child) => {
                set_l(arena, curr, None);
                set_r(arena, curr, None);
                return Some((child, curr));
            }
        },
    };

    Some((Some(retrace(arena, curr)), detached))
}

/// Points the link that refers to `from` at `to` instead.
///
/// `from` must be linked into the tree; it is located by its key.
pub fn relink<N, C>(arena: &mut [N], root: &mut Option<u32>, from: u32, to: u32, comparator: &C)
where
    N: KvNode,
    C: Fn(&N::Key, &N::Key) -> Comparison,
{
    if *root == Some(from) {
        *root = Some(to);
        return;
    }

    let mut curr = *root;
    while let Some(i) = curr {
        let cmp = comparator(arena[from as usize].key(), arena[i as usize].key());
        let next = match cmp {
            Comparison::Less => get_l(arena, i),
            Comparison::Greater => get_r(arena, i),
            Comparison::Equal => return,
        };
        if next == Some(from) {
            if cmp == Comparison::Less {
                set_l(arena, i, Some(to));
            } else {
                set_r(arena, i, Some(to));
            }
            return;
        }
        curr = next;
    }
}

/// Drops the detached node `idx` from a dense arena.
///
/// The last arena node is moved into the freed slot and the link that
/// referred to it is repointed, so indices stay in `0..arena.len()`.
pub fn release<N, C>(arena: &mut Vec<N>, root: &mut Option<u32>, idx: u32, comparator: &C) -> N
where
    N: KvNode,
    C: Fn(&N::Key, &N::Key) -> Comparison,
{
    let last = (arena.len() - 1) as u32;
    if idx != last {
        relink(arena, root, last, idx, comparator);
    }
    arena.swap_remove(idx as usize)
}
