//! Running the loop over line input and writing results as JSON lines.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Context;

use pizzeria_orders::{LineTokens, LoopSummary, OrderLoop, OrderResult};

use crate::config::Config;

pub const PROMPT: &str = "input pizza type: ";

/// Write one result as a single JSON line.
pub fn write_result<W: Write>(out: &mut W, result: &OrderResult) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, result).context("failed to encode order result")?;
    out.write_all(b"\n").context("failed to write order result")?;
    out.flush().context("failed to flush order result")?;
    Ok(())
}

/// Take orders from `input` until the loop stops, prompting on `prompt` and
/// reporting each result on `output` as soon as it completes.
///
/// A failed write stops the loop at once; no further input is read.
pub fn run<R, P, O>(config: &Config, input: R, prompt: P, output: &mut O) -> anyhow::Result<LoopSummary>
where
    R: BufRead,
    P: Write,
    O: Write,
{
    let strategy = config.build_strategy()?;
    tracing::info!(
        strategy = strategy.name(),
        region = ?strategy.region(),
        "taking orders"
    );

    let order_loop = OrderLoop::with_config(strategy, config.loop_config.clone());
    let tokens = LineTokens::with_prompt(input, prompt, PROMPT);

    let mut write_error = None;
    let summary = order_loop.run_with(tokens, |result| {
        match write_result(&mut *output, result) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                write_error = Some(err);
                ControlFlow::Break(())
            }
        }
    });
    if let Some(err) = write_error {
        return Err(err);
    }

    tracing::info!(
        successes = summary.successes,
        failures = summary.failures,
        termination = ?summary.termination,
        "orders closed"
    );
    Ok(summary)
}
