//! Arena-based ordered key/info containers.
//!
//! The centerpiece is [`AvlTree`], a self-balancing binary search tree that
//! stores one info value per unique key. A plain, unbalanced
//! [`BinarySearchTree`] shares the same node primitives.
//!
//! Instead of owning pointers, nodes live in a `Vec<N>` arena owned by the
//! tree, and child links are `Option<u32>` indices into it. The arena is
//! kept dense: removing a node moves the last node into the freed slot.
//! Dropping a tree drops all of its nodes.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`KvNode`] traits, [`Comparison`], [`compare`] |
//! | [`util`] | arena helpers shared by both trees: `find`, `insert`, `remove`, `Iter` |
//! | [`avl`] | [`AvlTree`], rotations, [`max_info_selector`] |
//! | [`bst`] | [`BinarySearchTree`] |
//! | [`print`] | sideways tree rendering |
//! | [`error`] | [`ForestError`] |

pub mod avl;
pub mod bst;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{max_info_selector, AvlTree, OnConflict};
pub use bst::BinarySearchTree;
pub use error::ForestError;
pub use types::{compare, Comparator, Comparison, KvNode, Node, Rotate};
