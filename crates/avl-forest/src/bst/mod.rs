//! Plain (unbalanced) binary search tree.

pub mod tree;
pub mod tree_node;

pub use tree::BinarySearchTree;
pub use tree_node::TreeNode;
