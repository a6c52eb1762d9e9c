//! Platform abstraction layer
//!
//! Turns raw browser/native events into simulation inputs.

pub mod input;

pub use input::{InputTracker, Key};
