//! Canonical normalization of component trees.

pub mod worklist;

pub use worklist::normalize;
