//! Event-driven UCI engine: a stdin reader, a search worker and a deadline timer
//! all feed one event loop on the main thread.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use chesslab_core::{Board, Color, Move};
use chesslab_engine::{IterativeDeepening, SearchResult, choose_move};

use crate::command::{Command, GoParams, MAX_DEPTH_LIMIT, MAX_MOVE_TIME_MS, UciOption, parse_command};
use crate::error::UciError;
use crate::time::move_budget;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest iteration any search may reach.
    pub max_depth: u8,
    /// Budget for a `go` that carries no clock parameters.
    pub move_time: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            move_time: Duration::from_millis(1000),
        }
    }
}

impl EngineConfig {
    fn apply(&mut self, option: UciOption) {
        match option {
            UciOption::MaxDepth(depth) => self.max_depth = depth,
            UciOption::MoveTime(time) => self.move_time = time,
        }
    }

    /// Depth limit for one `go`: the requested depth, never past the configured one.
    fn depth_for(&self, params: &GoParams) -> u8 {
        params.depth.map_or(self.max_depth, |d| d.min(self.max_depth))
    }
}

/// Events processed by the main engine loop.
enum EngineEvent {
    UciCommand(Result<Command, UciError>),
    /// The worker completed another depth.
    Progress {
        search_id: u64,
        best: Move,
        result: Option<SearchResult>,
    },
    /// The worker's iterator ran dry (depth limit reached or no legal move).
    Exhausted { search_id: u64 },
    Deadline { search_id: u64 },
    InputClosed,
}

/// Bookkeeping for the search currently owned by a worker thread.
struct ActiveSearch {
    id: u64,
    abandoned: Arc<AtomicBool>,
    side: Color,
    best: Option<Move>,
    /// `go infinite` answers only on `stop`, even after the iterator is done.
    infinite: bool,
}

/// The UCI engine, holding the current position and configuration.
///
/// Runs an event-driven loop on the main thread. Each `go` hands the position to
/// a worker that pulls the anytime iterator one depth at a time; the loop owns
/// the deadline and answers with the last move the worker delivered.
pub struct UciEngine {
    board: Board,
    config: EngineConfig,
    search: Option<ActiveSearch>,
    next_search_id: u64,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            config: EngineConfig::default(),
            search: None,
            next_search_id: 0,
        }
    }

    /// Run the UCI event loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), UciError> {
        let (tx, rx) = mpsc::channel::<EngineEvent>();

        let stdin_tx = tx.clone();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        break;
                    }
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                debug!(cmd = %trimmed, "received UCI command");
                if stdin_tx.send(EngineEvent::UciCommand(parse_command(trimmed))).is_err() {
                    return;
                }
            }
            let _ = stdin_tx.send(EngineEvent::InputClosed);
        });

        for event in &rx {
            match event {
                EngineEvent::UciCommand(Ok(cmd)) => match cmd {
                    Command::Uci => self.handle_uci(),
                    Command::IsReady => println!("readyok"),
                    Command::UciNewGame => self.board = Board::starting_position(),
                    Command::Position(board) => self.board = board,
                    Command::Go(params) => self.handle_go(&params, &tx),
                    Command::SetOption(option) => self.config.apply(option),
                    Command::Stop => self.finish_search(),
                    Command::Quit => break,
                    Command::Unknown(_) => {}
                },
                EngineEvent::UciCommand(Err(e)) => {
                    warn!(error = %e, "UCI parse error");
                }
                EngineEvent::Progress {
                    search_id,
                    best,
                    result,
                } => self.handle_progress(search_id, best, result),
                EngineEvent::Exhausted { search_id } => {
                    if self.search.as_ref().is_some_and(|s| s.id == search_id && !s.infinite) {
                        self.finish_search();
                    }
                }
                EngineEvent::Deadline { search_id } => {
                    if self.search.as_ref().is_some_and(|s| s.id == search_id) {
                        self.finish_search();
                    }
                }
                EngineEvent::InputClosed => break,
            }
        }

        self.abandon_search();
        info!("chesslab shutting down");
        Ok(())
    }

    fn handle_uci(&self) {
        println!("id name chesslab {}", env!("CARGO_PKG_VERSION"));
        println!("id author the chesslab developers");
        println!(
            "option name MaxDepth type spin default {} min 1 max {MAX_DEPTH_LIMIT}",
            EngineConfig::default().max_depth
        );
        println!(
            "option name MoveTime type spin default {} min 1 max {MAX_MOVE_TIME_MS}",
            EngineConfig::default().move_time.as_millis()
        );
        println!("uciok");
    }

    fn handle_go(&mut self, params: &GoParams, tx: &mpsc::Sender<EngineEvent>) {
        if self.search.is_some() {
            warn!("go received while searching, ignoring");
            return;
        }

        let search_id = self.next_search_id;
        self.next_search_id += 1;

        let side = self.board.side_to_move();
        let max_depth = self.config.depth_for(params);
        let budget = move_budget(params, side, self.config.move_time);
        let abandoned = Arc::new(AtomicBool::new(false));
        debug!(search_id, max_depth, budget = ?budget, "search started");

        // The instant move is taken here so a deadline can never find the search empty.
        let mut driver = choose_move(&self.board).with_max_depth(max_depth);
        let instant = driver.next();

        spawn_worker(driver, search_id, Arc::clone(&abandoned), tx.clone());
        if let Some(budget) = budget {
            let tx = tx.clone();
            thread::spawn(move || {
                thread::sleep(budget);
                let _ = tx.send(EngineEvent::Deadline { search_id });
            });
        }

        self.search = Some(ActiveSearch {
            id: search_id,
            abandoned,
            side,
            best: instant,
            infinite: params.infinite,
        });
    }

    fn handle_progress(&mut self, search_id: u64, best: Move, result: Option<SearchResult>) {
        let Some(search) = self.search.as_mut().filter(|s| s.id == search_id) else {
            return;
        };
        search.best = Some(best);
        if let Some(result) = result {
            println!("{}", info_line(&result, search.side));
        }
    }

    /// Answer the active search with its last delivered move and release the worker.
    fn finish_search(&mut self) {
        if let Some(line) = self.conclude_search() {
            println!("{line}");
        }
    }

    fn conclude_search(&mut self) -> Option<String> {
        let search = self.search.take()?;
        search.abandoned.store(true, Ordering::Release);
        Some(bestmove_line(search.best))
    }

    fn abandon_search(&mut self) {
        if let Some(search) = self.search.take() {
            search.abandoned.store(true, Ordering::Release);
        }
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull moves from the anytime iterator until it is exhausted or the search is abandoned.
///
/// A depth in progress always runs to completion; the flag is read between depths.
fn spawn_worker(
    mut driver: IterativeDeepening<Board>,
    search_id: u64,
    abandoned: Arc<AtomicBool>,
    tx: mpsc::Sender<EngineEvent>,
) {
    thread::spawn(move || {
        loop {
            if abandoned.load(Ordering::Acquire) {
                debug!(
                    search_id,
                    best = ?driver.best_move().map(|mv| mv.to_string()),
                    "abandoned search worker exiting"
                );
                break;
            }
            let Some(best) = driver.next() else {
                break;
            };
            let result = driver.last_result().cloned();
            if tx
                .send(EngineEvent::Progress {
                    search_id,
                    best,
                    result,
                })
                .is_err()
            {
                debug!(search_id, "engine loop gone, search worker exiting");
                return;
            }
        }
        let _ = tx.send(EngineEvent::Exhausted { search_id });
    });
}

/// `info` line for a completed depth. Scores are reported for the side to move.
fn info_line(result: &SearchResult, side: Color) -> String {
    let score = match side {
        Color::White => result.score,
        Color::Black => -result.score,
    };
    let mut line = format!(
        "info depth {} score cp {} nodes {}",
        result.depth, score, result.nodes
    );
    if let Some(mv) = result.best_move {
        line.push_str(&format!(" pv {mv}"));
    }
    line
}

fn bestmove_line(best: Option<Move>) -> String {
    match best {
        Some(mv) => format!("bestmove {mv}"),
        None => "bestmove 0000".to_string(),
    }
}
