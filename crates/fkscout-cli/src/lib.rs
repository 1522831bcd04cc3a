//! fkscout CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `fkscout` binary.

pub mod cli;
pub mod credentials;
pub mod introspect;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::Args;
