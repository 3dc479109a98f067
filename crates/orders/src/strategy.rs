//! Creation strategies: the pluggable step turning a type token into a pizza.
//!
//! Three interchangeable designs sit behind [`CreationStrategy`]:
//!
//! - [`DirectStrategy`]: one catalog fixed at construction, calls forwarded.
//! - [`FactoryMethodStrategy`]: a per-region [`RegionalStore`] capability
//!   builds the pizzas itself.
//! - [`AbstractFactoryStrategy`]: the family catalog is injected and may be
//!   swapped between orders with [`set_family`](AbstractFactoryStrategy::set_family).
//!
//! For the same `(region, token)` pair all three produce the same pizza.

use core::str::FromStr;

use pizzeria_core::{DomainError, DomainResult};
use pizzeria_products::{FamilyCatalog, Pizza, Region, TypeToken};

use crate::store::{BeijingStore, ClassicStore, LondonStore, RegionalStore};

/// Turns a type token into a fresh pizza.
///
/// Errors are either [`DomainError::UnknownToken`] (the token is not on the
/// active menu) or [`DomainError::NoCatalogConfigured`].
pub trait CreationStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Region currently served, if any.
    fn region(&self) -> Option<Region>;

    fn create_product(&self, token: &TypeToken) -> DomainResult<Pizza>;
}

impl<T> CreationStrategy for Box<T>
where
    T: CreationStrategy + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn region(&self) -> Option<Region> {
        (**self).region()
    }

    fn create_product(&self, token: &TypeToken) -> DomainResult<Pizza> {
        (**self).create_product(token)
    }
}

fn unknown(token: &TypeToken, region: Region) -> DomainError {
    DomainError::unknown_token(token.as_str(), region.as_str())
}

/// Forwards every request to a single catalog chosen by the caller.
#[derive(Debug, Clone)]
pub struct DirectStrategy<C> {
    catalog: C,
}

impl<C> DirectStrategy<C>
where
    C: FamilyCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}

impl<C> CreationStrategy for DirectStrategy<C>
where
    C: FamilyCatalog,
{
    fn name(&self) -> &'static str {
        "direct"
    }

    fn region(&self) -> Option<Region> {
        Some(self.catalog.region())
    }

    fn create_product(&self, token: &TypeToken) -> DomainResult<Pizza> {
        self.catalog
            .create(token)
            .ok_or_else(|| unknown(token, self.catalog.region()))
    }
}

/// Fixed order pipeline paired with a per-region creation capability.
#[derive(Debug, Clone)]
pub struct FactoryMethodStrategy<S> {
    store: S,
}

impl<S> FactoryMethodStrategy<S>
where
    S: RegionalStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> CreationStrategy for FactoryMethodStrategy<S>
where
    S: RegionalStore,
{
    fn name(&self) -> &'static str {
        "factory-method"
    }

    fn region(&self) -> Option<Region> {
        Some(self.store.region())
    }

    fn create_product(&self, token: &TypeToken) -> DomainResult<Pizza> {
        self.store
            .create_pizza(token)
            .ok_or_else(|| unknown(token, self.store.region()))
    }
}

/// Creates through whichever family catalog is currently injected.
///
/// New regions are supported by adding a catalog, never by touching this type
/// or the pipeline. Used without a catalog every order fails with
/// [`DomainError::NoCatalogConfigured`].
#[derive(Debug, Clone, Default)]
pub struct AbstractFactoryStrategy {
    family: Option<&'static dyn FamilyCatalog>,
}

impl AbstractFactoryStrategy {
    pub fn new(family: &'static dyn FamilyCatalog) -> Self {
        Self {
            family: Some(family),
        }
    }

    /// A strategy with no catalog injected yet.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn for_region(region: Region) -> Self {
        Self::new(region.catalog())
    }

    pub fn set_family(&mut self, family: &'static dyn FamilyCatalog) {
        tracing::info!(region = %family.region(), "family catalog switched");
        self.family = Some(family);
    }

    pub fn clear_family(&mut self) {
        self.family = None;
    }

    pub fn family(&self) -> Option<&'static dyn FamilyCatalog> {
        self.family
    }
}

impl CreationStrategy for AbstractFactoryStrategy {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn region(&self) -> Option<Region> {
        self.family.map(|family| family.region())
    }

    fn create_product(&self, token: &TypeToken) -> DomainResult<Pizza> {
        let family = self.family.ok_or(DomainError::NoCatalogConfigured)?;
        family
            .create(token)
            .ok_or_else(|| unknown(token, family.region()))
    }
}

/// Strategy selector used by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Direct,
    FactoryMethod,
    AbstractFactory,
}

impl StrategyKind {
    /// Build the selected strategy for `region`.
    ///
    /// Only the abstract-factory strategy may start without a region.
    pub fn build(self, region: Option<Region>) -> DomainResult<Box<dyn CreationStrategy>> {
        match (self, region) {
            (StrategyKind::AbstractFactory, Some(region)) => {
                Ok(Box::new(AbstractFactoryStrategy::for_region(region)))
            }
            (StrategyKind::AbstractFactory, None) => Ok(Box::new(AbstractFactoryStrategy::unset())),
            (StrategyKind::Direct, Some(region)) => {
                Ok(Box::new(DirectStrategy::new(region.catalog())))
            }
            (StrategyKind::FactoryMethod, Some(Region::Beijing)) => {
                Ok(Box::new(FactoryMethodStrategy::new(BeijingStore)))
            }
            (StrategyKind::FactoryMethod, Some(Region::London)) => {
                Ok(Box::new(FactoryMethodStrategy::new(LondonStore)))
            }
            (StrategyKind::FactoryMethod, Some(Region::Classic)) => {
                Ok(Box::new(FactoryMethodStrategy::new(ClassicStore)))
            }
            (kind, None) => Err(DomainError::validation(format!(
                "{} strategy requires a region",
                kind.as_str()
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Direct => "direct",
            StrategyKind::FactoryMethod => "factory-method",
            StrategyKind::AbstractFactory => "abstract",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "simple" => Ok(StrategyKind::Direct),
            "factory-method" | "factory_method" => Ok(StrategyKind::FactoryMethod),
            "abstract" | "abstract-factory" | "abstract_factory" => {
                Ok(StrategyKind::AbstractFactory)
            }
            other => Err(DomainError::validation(format!(
                "unknown strategy {other:?} (expected one of: direct, factory-method, abstract)"
            ))),
        }
    }
}
