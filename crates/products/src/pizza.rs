use serde::{Deserialize, Serialize};

use pizzeria_core::{DomainError, DomainResult};

use crate::region::{Region, TypeToken};

/// The variants any catalog may know how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaKind {
    Cheese,
    Pepper,
    Greek,
}

impl PizzaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PizzaKind::Cheese => "cheese",
            PizzaKind::Pepper => "pepper",
            PizzaKind::Greek => "greek",
        }
    }

    /// Exact, case-sensitive match of a token against the known kinds.
    ///
    /// Whether a region actually sells the kind is up to its catalog.
    pub fn from_token(token: &TypeToken) -> Option<Self> {
        match token.as_str() {
            "cheese" => Some(PizzaKind::Cheese),
            "pepper" => Some(PizzaKind::Pepper),
            "greek" => Some(PizzaKind::Greek),
            _ => None,
        }
    }
}

impl core::fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pizza lifecycle. Stages only ever move forward, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Created,
    Prepared,
    Baked,
    Cut,
    Boxed,
}

impl Stage {
    /// The stage that must follow this one, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Created => Some(Stage::Prepared),
            Stage::Prepared => Some(Stage::Baked),
            Stage::Baked => Some(Stage::Cut),
            Stage::Cut => Some(Stage::Boxed),
            Stage::Boxed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Created => "Created",
            Stage::Prepared => "Prepared",
            Stage::Baked => "Baked",
            Stage::Cut => "Cut",
            Stage::Boxed => "Boxed",
        }
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single pizza being made for one order.
///
/// Built by a catalog in [`Stage::Created`]; the order pipeline then drives it
/// through [`prepare`](Pizza::prepare), [`bake`](Pizza::bake),
/// [`cut`](Pizza::cut) and [`box_up`](Pizza::box_up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    label: String,
    kind: PizzaKind,
    region: Region,
    stage: Stage,
}

impl Pizza {
    /// A fresh pizza of `kind` from `region`'s family, labelled `"kind/Region"`.
    pub fn new(kind: PizzaKind, region: Region) -> Self {
        Self {
            label: format!("{kind}/{region}"),
            kind,
            region,
            stage: Stage::Created,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_boxed(&self) -> bool {
        self.stage == Stage::Boxed
    }

    pub fn prepare(&mut self) -> DomainResult<()> {
        self.advance(Stage::Prepared)?;
        tracing::debug!(label = %self.label, "preparing ingredients");
        Ok(())
    }

    pub fn bake(&mut self) -> DomainResult<()> {
        self.advance(Stage::Baked)?;
        tracing::debug!(label = %self.label, "baking");
        Ok(())
    }

    pub fn cut(&mut self) -> DomainResult<()> {
        self.advance(Stage::Cut)?;
        tracing::debug!(label = %self.label, "cutting");
        Ok(())
    }

    pub fn box_up(&mut self) -> DomainResult<()> {
        self.advance(Stage::Boxed)?;
        tracing::debug!(label = %self.label, "boxing");
        Ok(())
    }

    fn advance(&mut self, target: Stage) -> DomainResult<()> {
        if self.stage.next() != Some(target) {
            return Err(DomainError::out_of_order(target.as_str(), self.stage.as_str()));
        }
        self.stage = target;
        Ok(())
    }
}
