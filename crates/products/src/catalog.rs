//! Regional family catalogs.
//!
//! Exactly one catalog exists per [`Region`]. A catalog only ever builds
//! pizzas of its own region, so every product handed out through it belongs to
//! the same family.

use crate::pizza::{Pizza, PizzaKind};
use crate::region::{Region, TypeToken};

/// Maps a type token to a freshly built pizza of one region.
///
/// Catalogs are stateless and shared read-only between orders.
pub trait FamilyCatalog: Send + Sync + core::fmt::Debug {
    /// The region whose family this catalog builds.
    fn region(&self) -> Region;

    /// Kinds this catalog sells, in menu order.
    fn kinds(&self) -> &'static [PizzaKind];

    /// Build a new pizza for `token`, or `None` when the token is not on this
    /// region's menu.
    fn create(&self, token: &TypeToken) -> Option<Pizza> {
        let kind = PizzaKind::from_token(token)?;
        if !self.kinds().contains(&kind) {
            return None;
        }
        Some(Pizza::new(kind, self.region()))
    }

    fn recognizes(&self, token: &TypeToken) -> bool {
        PizzaKind::from_token(token).is_some_and(|kind| self.kinds().contains(&kind))
    }
}

impl<T> FamilyCatalog for &T
where
    T: FamilyCatalog + ?Sized,
{
    fn region(&self) -> Region {
        (**self).region()
    }

    fn kinds(&self) -> &'static [PizzaKind] {
        (**self).kinds()
    }

    fn create(&self, token: &TypeToken) -> Option<Pizza> {
        (**self).create(token)
    }

    fn recognizes(&self, token: &TypeToken) -> bool {
        (**self).recognizes(token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeijingCatalog;

impl FamilyCatalog for BeijingCatalog {
    fn region(&self) -> Region {
        Region::Beijing
    }

    fn kinds(&self) -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Pepper]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LondonCatalog;

impl FamilyCatalog for LondonCatalog {
    fn region(&self) -> Region {
        Region::London
    }

    fn kinds(&self) -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Pepper]
    }
}

/// The plain shop's menu; the only catalog that sells greek pizza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicCatalog;

impl FamilyCatalog for ClassicCatalog {
    fn region(&self) -> Region {
        Region::Classic
    }

    fn kinds(&self) -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Greek, PizzaKind::Pepper]
    }
}
