//! Per-region stores for the factory-method strategy.
//!
//! Each store is its own single-region menu: it decides by itself which tokens
//! it sells and builds the pizzas directly, instead of delegating to a shared
//! [`FamilyCatalog`](pizzeria_products::FamilyCatalog).

use pizzeria_products::{Pizza, PizzaKind, Region, TypeToken};

/// Creation capability plugged into the fixed order pipeline.
pub trait RegionalStore: Send + Sync {
    /// Region every pizza from this store belongs to.
    fn region(&self) -> Region;

    /// Build a pizza for `token`, or `None` if the store does not sell it.
    fn create_pizza(&self, token: &TypeToken) -> Option<Pizza>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeijingStore;

impl RegionalStore for BeijingStore {
    fn region(&self) -> Region {
        Region::Beijing
    }

    fn create_pizza(&self, token: &TypeToken) -> Option<Pizza> {
        match PizzaKind::from_token(token)? {
            kind @ (PizzaKind::Cheese | PizzaKind::Pepper) => Some(Pizza::new(kind, Region::Beijing)),
            PizzaKind::Greek => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LondonStore;

impl RegionalStore for LondonStore {
    fn region(&self) -> Region {
        Region::London
    }

    fn create_pizza(&self, token: &TypeToken) -> Option<Pizza> {
        match PizzaKind::from_token(token)? {
            kind @ (PizzaKind::Cheese | PizzaKind::Pepper) => Some(Pizza::new(kind, Region::London)),
            PizzaKind::Greek => None,
        }
    }
}

/// The plain shop: the only store that also bakes greek pizza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicStore;

impl RegionalStore for ClassicStore {
    fn region(&self) -> Region {
        Region::Classic
    }

    fn create_pizza(&self, token: &TypeToken) -> Option<Pizza> {
        PizzaKind::from_token(token).map(|kind| Pizza::new(kind, Region::Classic))
    }
}
