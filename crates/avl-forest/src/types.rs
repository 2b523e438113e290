//! Node trait definitions and comparison helpers.
//!
//! Nodes live in a tree-owned `Vec<N>` arena. Each child "pointer" is an
//! `Option<u32>` index into that arena. There are no parent links: every
//! node is referred to by exactly one child slot (or by the tree's root).

use std::cmp::Ordering;

/// Child links (`l`, `r`) of an arena node.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/info node interface used by the map-like trees.
pub trait KvNode: Node {
    type Key;
    type Value;

    fn key(&self) -> &Self::Key;
    fn value(&self) -> &Self::Value;
    fn value_mut(&mut self) -> &mut Self::Value;

    /// Borrows the key immutably and the value mutably at the same time.
    fn entry_mut(&mut self) -> (&Self::Key, &mut Self::Value);

    /// Exchanges key and value with `other`, leaving links untouched.
    fn swap_entry(&mut self, other: &mut Self);
}

/// Result of a three-way key comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less = -1,
    Equal = 0,
    Greater = 1,
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

/// Direction of a single rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotate {
    Left,
    Right,
}

/// Default comparator type used by the trees.
pub type Comparator<K> = fn(&K, &K) -> Comparison;

/// Three-way comparison built from `<` and `>`.
///
/// Values that are neither less nor greater (including incomparable ones
/// such as `NaN`) compare `Equal`.
pub fn compare<K: PartialOrd>(a: &K, b: &K) -> Comparison {
    if a < b {
        Comparison::Less
    } else if a > b {
        Comparison::Greater
    } else {
        Comparison::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert_eq!(compare(&1, &2), Comparison::Less);
        assert_eq!(compare(&2, &1), Comparison::Greater);
        assert_eq!(compare(&"b", &"b"), Comparison::Equal);
        assert_eq!(compare(&f64::NAN, &1.0), Comparison::Equal);
    }

    #[test]
    fn test_comparison_from_ordering() {
        assert_eq!(Comparison::from(3.cmp(&4)), Comparison::Less);
        assert_eq!(Comparison::from(4.cmp(&4)), Comparison::Equal);
        assert_eq!(Comparison::from(5.cmp(&4)), Comparison::Greater);
        assert_eq!(Comparison::Less as i32, -1);
    }
}
