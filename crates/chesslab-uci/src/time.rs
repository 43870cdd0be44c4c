//! Time management: turn `go` parameters into a deadline for one move.

use std::time::Duration;

use chesslab_core::Color;

use crate::command::GoParams;

/// Reserved for GUI and I/O latency.
const OVERHEAD: Duration = Duration::from_millis(10);

/// Moves assumed to remain when the GUI sends no `movestogo`.
const DEFAULT_MOVES_TO_GO: u32 = 30;

/// Compute the time to spend on one move from the clock.
///
/// `(remaining - overhead) / moves_to_go + 3/4 * increment`, never more than a
/// quarter of what is left and never less than 1 ms.
pub fn compute_budget(remaining: Duration, increment: Duration, moves_to_go: Option<u32>) -> Duration {
    let one_ms = Duration::from_millis(1);
    if remaining <= OVERHEAD {
        return one_ms;
    }

    let usable = remaining - OVERHEAD;
    let mtg = moves_to_go.unwrap_or(DEFAULT_MOVES_TO_GO).max(1);
    let budget = usable / mtg + increment * 3 / 4;

    budget.min(remaining / 4).max(one_ms)
}

/// Deadline for a search started by `go`, or `None` to run until `stop`.
///
/// Priority: `infinite`, then `movetime`, then the mover's clock, then
/// `fallback` (the configured move time) for a `go` without time parameters.
pub fn move_budget(params: &GoParams, side: Color, fallback: Duration) -> Option<Duration> {
    if params.infinite {
        return None;
    }
    if let Some(movetime) = params.movetime {
        return Some(movetime);
    }

    let (remaining, increment) = match side {
        Color::White => (params.wtime, params.winc),
        Color::Black => (params.btime, params.binc),
    };
    match remaining {
        Some(remaining) => Some(compute_budget(
            remaining,
            increment.unwrap_or(Duration::ZERO),
            params.movestogo,
        )),
        None => Some(fallback),
    }
}
