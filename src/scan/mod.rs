//! Tree traversal with directory pruning

pub mod walker;

pub use walker::TreeWalker;
