//! Content API wire types

pub mod types;

pub use types::*;
