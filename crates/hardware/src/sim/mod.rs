//! Program loading.
//!
//! Provides utilities for turning program sources and images into memory contents.

/// Text program parsing and placement into memory.
pub mod loader;
