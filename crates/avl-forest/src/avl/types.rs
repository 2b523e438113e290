use std::fmt;

use crate::types::{KvNode, Node};

/// AVL tree node: key, info, child links and cached shape data.
#[derive(Clone, Debug)]
pub struct AvlNode<K, I> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: I,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub height: u32,
    /// Balance factor, `height(left) - height(right)`.
    pub bf: i32,
}

impl<K, I> AvlNode<K, I> {
    pub fn new(k: K, v: I) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v,
            height: 1,
            bf: 0,
        }
    }
}

impl<K, I> Node for AvlNode<K, I> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, I> KvNode for AvlNode<K, I> {
    type Key = K;
    type Value = I;

    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &I {
        &self.v
    }

    fn value_mut(&mut self) -> &mut I {
        &mut self.v
    }

    fn entry_mut(&mut self) -> (&K, &mut I) {
        (&self.k, &mut self.v)
    }

    fn swap_entry(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.k, &mut other.k);
        std::mem::swap(&mut self.v, &mut other.v);
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: KvNode {
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);
    fn bf(&self) -> i32;
    fn set_bf(&mut self, bf: i32);
}

impl<K, I> AvlNodeLike for AvlNode<K, I> {
    fn height(&self) -> u32 {
        self.height
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    fn bf(&self) -> i32 {
        self.bf
    }

    fn set_bf(&mut self, bf: i32) {
        self.bf = bf;
    }
}

/// What to do with the info when inserting a key that is already stored.
pub enum OnConflict<I> {
    /// Replace the stored info with the new one.
    Overwrite,
    /// Keep the stored info and drop the new one.
    KeepOld,
    /// Store `combine(old, new)`.
    Combine(fn(&I, &I) -> I),
}

impl<I> OnConflict<I> {
    /// Writes the resolved info into `old`.
    pub fn resolve(&self, old: &mut I, new: I) {
        match self {
            OnConflict::Overwrite => *old = new,
            OnConflict::KeepOld => {}
            OnConflict::Combine(combine) => *old = combine(old, &new),
        }
    }
}

impl<I> Default for OnConflict<I> {
    fn default() -> Self {
        OnConflict::Overwrite
    }
}

impl<I> Clone for OnConflict<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for OnConflict<I> {}

impl<I> fmt::Debug for OnConflict<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnConflict::Overwrite => f.write_str("Overwrite"),
            OnConflict::KeepOld => f.write_str("KeepOld"),
            OnConflict::Combine(_) => f.write_str("Combine(..)"),
        }
    }
}
