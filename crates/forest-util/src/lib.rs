//! forest-util - test-support utilities for avl-forest
//!
//! Seeded random workload generation used by the tree test matrices.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Op};
