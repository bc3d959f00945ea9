//! `careernav-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no randomness).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::RunId;
pub use value_object::{AnnualEarnings, RiskLevel};
