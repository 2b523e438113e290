//! Height-balanced tree: node layout, rebalancing primitives, the
//! [`AvlTree`] container and the [`max_info_selector`] composition.

pub mod avl_tree;
pub mod selector;
pub mod types;
pub mod util;

pub use avl_tree::{AvlTree, Iter};
pub use selector::max_info_selector;
pub use types::{AvlNode, AvlNodeLike, OnConflict};
pub use util::{assert_avl_tree, balanced, insert, print, rebalance, remove, rotate, update};
