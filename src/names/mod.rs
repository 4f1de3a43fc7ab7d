//! Suggested player names.

pub mod pool;

pub use pool::{suggest, NAME_POOL};
