use crate::types::{KvNode, Node};

/// Node of the plain binary search tree.
#[derive(Clone, Debug)]
pub struct TreeNode<K, I> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: I,
}

impl<K, I> TreeNode<K, I> {
    pub fn new(k: K, v: I) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v,
        }
    }
}

impl<K, I> Node for TreeNode<K, I> {
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

impl<K, I> KvNode for TreeNode<K, I> {
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
