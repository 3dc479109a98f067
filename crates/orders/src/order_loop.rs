//! The order loop: read a token, create, run the pipeline, report, repeat.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use pizzeria_products::TypeToken;

use crate::pipeline::{OrderPipeline, OrderResult};
use crate::strategy::CreationStrategy;

/// Loop settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    /// Tokens that end the loop without producing a result (exact match).
    pub stop_tokens: Vec<String>,
    /// Stop after this many failed orders in a row; `None` never stops.
    pub max_consecutive_failures: Option<u32>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            stop_tokens: vec![String::new(), "stop".to_string()],
            max_consecutive_failures: Some(3),
        }
    }
}

impl LoopConfig {
    pub fn with_stop_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !self.stop_tokens.contains(&token) {
            self.stop_tokens.push(token);
        }
        self
    }

    pub fn with_max_consecutive_failures(mut self, max: Option<u32>) -> Self {
        self.max_consecutive_failures = max;
        self
    }

    pub fn is_stop(&self, token: &TypeToken) -> bool {
        self.stop_tokens.iter().any(|stop| stop == token.as_str())
    }
}

/// Why the loop stopped taking orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The token source ran dry.
    Exhausted,
    /// A stop token was read.
    StopToken,
    /// `max_consecutive_failures` orders failed in a row.
    TooManyFailures,
    /// The reporter asked to stop (e.g. its output went away).
    ReporterStopped,
}

/// Counts kept by [`OrderLoop::run_with`]; results themselves are not
/// retained, so the token source may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub successes: usize,
    pub failures: usize,
    pub termination: Termination,
}

impl LoopSummary {
    pub fn orders(&self) -> usize {
        self.successes + self.failures
    }
}

/// Every result of a finite run, as collected by [`OrderLoop::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopReport {
    pub results: Vec<OrderResult>,
    pub termination: Termination,
}

impl LoopReport {
    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.results.len() - self.successes()
    }
}

/// Drives orders one at a time through a [`CreationStrategy`] and the fixed
/// [`OrderPipeline`].
pub struct OrderLoop<S> {
    strategy: S,
    pipeline: OrderPipeline,
    config: LoopConfig,
}

impl<S> OrderLoop<S>
where
    S: CreationStrategy,
{
    pub fn new(strategy: S) -> Self {
        Self::with_config(strategy, LoopConfig::default())
    }

    pub fn with_config(strategy: S, config: LoopConfig) -> Self {
        Self {
            strategy,
            pipeline: OrderPipeline::new(),
            config,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Reconfigure the strategy between runs (e.g. inject a family catalog).
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Run to completion and collect every result.
    ///
    /// Meant for finite sources; use [`run_with`](Self::run_with) to stream.
    pub fn run<I>(&self, tokens: I) -> LoopReport
    where
        I: IntoIterator,
        I::Item: Into<TypeToken>,
    {
        let mut results = Vec::new();
        let summary = self.run_with(tokens, |result| {
            results.push(result.clone());
            ControlFlow::Continue(())
        });
        LoopReport {
            results,
            termination: summary.termination,
        }
    }

    /// Hand each result to `report` as soon as its order completes, before
    /// the next token is read. Returning `ControlFlow::Break` stops the loop
    /// without reading another token.
    pub fn run_with<I, F>(&self, tokens: I, mut report: F) -> LoopSummary
    where
        I: IntoIterator,
        I::Item: Into<TypeToken>,
        F: FnMut(&OrderResult) -> ControlFlow<()>,
    {
        let mut summary = LoopSummary {
            successes: 0,
            failures: 0,
            termination: Termination::Exhausted,
        };
        let mut consecutive_failures = 0u32;

        for token in tokens {
            let token = token.into();
            if self.config.is_stop(&token) {
                tracing::info!(orders = summary.orders(), "stop token received");
                summary.termination = Termination::StopToken;
                return summary;
            }

            let result = self.pipeline.process(&self.strategy, token);
            if result.is_success() {
                summary.successes += 1;
                consecutive_failures = 0;
            } else {
                summary.failures += 1;
                consecutive_failures = consecutive_failures.saturating_add(1);
            }

            if report(&result).is_break() {
                tracing::info!(orders = summary.orders(), "reporter stopped the loop");
                summary.termination = Termination::ReporterStopped;
                return summary;
            }

            if let Some(max) = self.config.max_consecutive_failures {
                if consecutive_failures >= max {
                    tracing::warn!(consecutive_failures, "too many failed orders, stopping");
                    summary.termination = Termination::TooManyFailures;
                    return summary;
                }
            }
        }

        tracing::info!(orders = summary.orders(), "token source exhausted");
        summary
    }
}
