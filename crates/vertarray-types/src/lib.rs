//! # vertarray-types
//!
//! Shared error type and constants for the vertarray crates.
//!
//! This crate has no domain logic. It defines the vocabulary that the
//! buffer, shape and batch crates share.

pub mod constants;
pub mod error;

pub use error::{VertexError, VertexResult};
