//! Expose transmark's internal API so integration tests can drive the
//! commands directly. This is not a stable interface; use the
//! `transmark-markdown` crate for programmatic access to the engine.
pub mod cli;
pub mod render;
pub mod stamp;
pub mod sync;
pub mod utils;
