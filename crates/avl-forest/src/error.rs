use thiserror::Error;

/// Errors reported by keyed access on the trees.
///
/// Only indexed access fails on a missing key; `find` and `remove` report
/// absence through their boolean result instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("KEY_NOT_FOUND")]
    KeyNotFound,
}
