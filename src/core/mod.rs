//! Core data types and structures
//!
//! This module contains the fundamental data types shared by the index
//! parser, the resolver and the graph builder, separated from their
//! implementation logic.

pub mod types;

pub use types::*;
