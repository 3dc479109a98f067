//! Products domain module: pizzas and the regional catalogs that build them.
//!
//! This crate contains the product lifecycle and the family catalogs,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod pizza;
pub mod region;

pub use catalog::{BeijingCatalog, ClassicCatalog, FamilyCatalog, LondonCatalog};
pub use pizza::{Pizza, PizzaKind, Stage};
pub use region::{Region, TypeToken};
