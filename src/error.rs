//! Error types for tree operations.
//!
//! Absent values are ordinary outcomes for this data structure, so the
//! operations that can fail report it through these types instead of
//! panicking. Lookups return `Option` directly; removal distinguishes
//! "the tree has nothing in it" from "the value is not in the tree".

use thiserror::Error;

/// Errors returned by operations that require a non-empty tree or a
/// present value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree has no nodes, so there is nothing to remove.
    #[error("cannot remove from an empty tree")]
    EmptyTree,
    /// No node in the tree holds the requested value.
    #[error("value not found in the tree")]
    NotFound,
}

/// A `Result` alias using this crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
