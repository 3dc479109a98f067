//! `pizzeria-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product and
//! order crates (no IO, no logging setup).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::OrderId;
