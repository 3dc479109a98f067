//! Order taking: creation strategies, the fixed order pipeline and the loop
//! that drives orders from a token source.
//!
//! Everything here is synchronous and in-memory; one order is completed
//! before the next token is read.

pub mod order_loop;
pub mod pipeline;
pub mod source;
pub mod store;
pub mod strategy;

pub use order_loop::{LoopConfig, LoopReport, LoopSummary, OrderLoop, Termination};
pub use pipeline::{FailureReason, OrderOutcome, OrderPipeline, OrderResult};
pub use source::LineTokens;
pub use store::{BeijingStore, ClassicStore, LondonStore, RegionalStore};
pub use strategy::{
    AbstractFactoryStrategy, CreationStrategy, DirectStrategy, FactoryMethodStrategy,
    StrategyKind,
};
