//! The fixed order pipeline.
//!
//! Per order: `Requested -> Created | Failed`. A created pizza is always taken
//! through `prepare -> bake -> cut -> box_up`; success is reported only once it
//! is boxed. A failed order never touches a pizza and is never retried.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pizzeria_core::{DomainError, OrderId};
use pizzeria_products::{Pizza, Region, Stage, TypeToken};

use crate::strategy::CreationStrategy;

/// Why an order produced no pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The active menu does not know the token.
    UnknownToken,
    /// The strategy had no family catalog injected.
    NoCatalogConfigured,
    /// The pipeline ran a stage before its predecessor (a defect).
    OutOfOrderStage,
    /// A [`CreationStrategy`] outside this crate rejected the token with
    /// [`DomainError::Validation`]. The built-in strategies never do.
    Invalid,
}

impl From<&DomainError> for FailureReason {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::UnknownToken { .. } => FailureReason::UnknownToken,
            DomainError::NoCatalogConfigured => FailureReason::NoCatalogConfigured,
            DomainError::OutOfOrderStage { .. } => FailureReason::OutOfOrderStage,
            DomainError::Validation(_) => FailureReason::Invalid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderOutcome {
    Success { label: String, stage: Stage },
    Failure { reason: FailureReason, message: String },
}

impl OrderOutcome {
    fn failed(err: &DomainError) -> Self {
        OrderOutcome::Failure {
            reason: err.into(),
            message: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OrderOutcome::Success { .. })
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            OrderOutcome::Success { .. } => None,
            OrderOutcome::Failure { reason, .. } => Some(*reason),
        }
    }
}

/// Reported once per order; the pizza itself is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_id: OrderId,
    pub token: TypeToken,
    pub region: Option<Region>,
    pub outcome: OrderOutcome,
    pub occurred_at: DateTime<Utc>,
}

impl OrderResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OrderPipeline;

impl OrderPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Take one order from request to report.
    pub fn process<S>(&self, strategy: &S, token: TypeToken) -> OrderResult
    where
        S: CreationStrategy + ?Sized,
    {
        let order_id = OrderId::new();
        let span = tracing::info_span!(
            "order",
            %order_id,
            token = %token,
            strategy = strategy.name(),
        );
        let _guard = span.enter();

        let outcome = match strategy.create_product(&token) {
            Ok(pizza) => self.fulfil(pizza),
            Err(err) => {
                tracing::warn!(error = %err, "order failed");
                OrderOutcome::failed(&err)
            }
        };

        OrderResult {
            order_id,
            token,
            region: strategy.region(),
            outcome,
            occurred_at: Utc::now(),
        }
    }

    /// Run a created pizza through every stage, in order.
    ///
    /// A stage error aborts the order at that point; no further stage is
    /// attempted.
    pub fn fulfil(&self, mut pizza: Pizza) -> OrderOutcome {
        let stages: [fn(&mut Pizza) -> Result<(), DomainError>; 4] =
            [Pizza::prepare, Pizza::bake, Pizza::cut, Pizza::box_up];

        for stage in stages {
            if let Err(err) = stage(&mut pizza) {
                tracing::error!(label = pizza.label(), error = %err, "order aborted");
                return OrderOutcome::failed(&err);
            }
        }

        tracing::info!(label = pizza.label(), "order boxed");
        OrderOutcome::Success {
            label: pizza.label().to_owned(),
            stage: pizza.stage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_core::DomainResult;
    use pizzeria_products::{BeijingCatalog, PizzaKind};

    use crate::strategy::{AbstractFactoryStrategy, DirectStrategy};

    /// Hands out pizzas that were already prepared elsewhere.
    struct PrePrepared;

    impl CreationStrategy for PrePrepared {
        fn name(&self) -> &'static str {
            "pre-prepared"
        }

        fn region(&self) -> Option<Region> {
            Some(Region::London)
        }

        fn create_product(&self, _token: &TypeToken) -> DomainResult<Pizza> {
            let mut pizza = Pizza::new(PizzaKind::Cheese, Region::London);
            pizza.prepare()?;
            Ok(pizza)
        }
    }

    #[test]
    fn recognized_token_is_boxed() {
        let strategy = DirectStrategy::new(BeijingCatalog);
        let result = OrderPipeline::new().process(&strategy, "cheese".into());

        assert_eq!(
            result.outcome,
            OrderOutcome::Success {
                label: "cheese/Beijing".to_string(),
                stage: Stage::Boxed,
            }
        );
        assert_eq!(result.token, TypeToken::from("cheese"));
        assert_eq!(result.region, Some(Region::Beijing));
    }

    #[test]
    fn unknown_token_is_a_reported_failure() {
        let strategy = DirectStrategy::new(BeijingCatalog);
        let result = OrderPipeline::new().process(&strategy, "bogus".into());

        assert!(!result.is_success());
        assert_eq!(result.outcome.failure_reason(), Some(FailureReason::UnknownToken));
    }

    #[test]
    fn missing_catalog_is_a_reported_failure() {
        let result = OrderPipeline::new().process(&AbstractFactoryStrategy::unset(), "cheese".into());

        assert_eq!(result.region, None);
        assert_eq!(
            result.outcome.failure_reason(),
            Some(FailureReason::NoCatalogConfigured)
        );
    }

    #[test]
    fn stage_defect_is_distinct_from_unknown_token() {
        let result = OrderPipeline::new().process(&PrePrepared, "cheese".into());

        match result.outcome {
            OrderOutcome::Failure { reason, message } => {
                assert_eq!(reason, FailureReason::OutOfOrderStage);
                assert!(message.contains("Prepared"));
            }
            other => panic!("expected stage failure, got {other:?}"),
        }
    }

    /// Rejects every token before looking at any menu.
    struct Closed;

    impl CreationStrategy for Closed {
        fn name(&self) -> &'static str {
            "closed"
        }

        fn region(&self) -> Option<Region> {
            None
        }

        fn create_product(&self, token: &TypeToken) -> DomainResult<Pizza> {
            Err(DomainError::validation(format!("shop closed, cannot take {token}")))
        }
    }

    #[test]
    fn validation_error_from_a_custom_strategy_is_invalid() {
        let result = OrderPipeline::new().process(&Closed, "cheese".into());

        assert_eq!(result.outcome.failure_reason(), Some(FailureReason::Invalid));
    }

    #[test]
    fn outcome_serializes_with_a_status_tag() {
        let outcome = OrderOutcome::Success {
            label: "pepper/London".to_string(),
            stage: Stage::Boxed,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "label": "pepper/London", "stage": "Boxed"})
        );

        let failure = OrderOutcome::failed(&DomainError::NoCatalogConfigured);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["reason"], "no_catalog_configured");
    }
}
