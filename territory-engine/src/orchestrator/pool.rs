use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use territory_core::{apply_move_unchecked, Board, Color, Move, ZobristTables, COLORS};
use tracing::{debug, warn};

use crate::config::SearchRequest;
use crate::error::EngineError;
use crate::evaluation::Evaluation;
use crate::movegen::ordered_moves;
use crate::search::Search;

use super::protocol::RootJob;

/// `{ bestMove, score?, depth? }` of spec.md §6. `best_move` is `None`
/// only when the root position has no legal move at all (the caller
/// receives `EngineError::NoLegalMove` before ever constructing one of
/// these — see `SearchOrchestrator::search`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReply {
    pub best_move: Move,
    pub score: i32,
    pub depth: u8,
}

/// Root-parallelized iterative-deepening orchestrator (C6). Holds a pool
/// of `Search` workers, one per logical core, each privately owning a
/// transposition table and history table that persist across every
/// deepening iteration of a single request (spec.md §5).
///
/// The pool is rebuilt fresh per `search()` call sized to the request's
/// `board_size`: a real long-lived server would instead keep one
/// `SearchOrchestrator` alive across requests and call `reset_for` on
/// every worker, but since board size can change between requests and a
/// `Search`'s history table is board-size-dependent, the clean boundary
/// is to reconstruct the worker set in `search()` and document the
/// per-request cost as the price of that flexibility (spec.md §5
/// "Resource discipline" allows either reset-per-search or an explicit
/// replacement policy — we pick full per-search rebuild since `spec.md`
/// "Per-worker state... cleared on init" already requires a TT clear, and
/// rebuilding the small `Vec<Search>` is cheap next to the search itself).
pub struct SearchOrchestrator {
    pool_size: usize,
}

impl SearchOrchestrator {
    pub fn new() -> Self {
        let pool_size = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1).max(1);
        Self { pool_size }
    }

    pub fn with_pool_size(pool_size: usize) -> Self {
        Self { pool_size: pool_size.max(1) }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Runs one full search request to completion (or timeout), per
    /// spec.md §4.6.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchReply, EngineError> {
        request.config.validate()?;

        let SearchRequest { board, current_player_index, turn_count, config } = request;
        let color = COLORS[*current_player_index];

        let mut seed_rng = rand::thread_rng();
        let mut tables_rng = StdRng::from_rng(&mut seed_rng).expect("system RNG available");
        let zobrist = Arc::new(ZobristTables::new(config.board_size, &mut tables_rng));

        let mut root_moves = ordered_moves(board, *turn_count, color, &config.constants);
        if root_moves.is_empty() {
            return Err(EngineError::NoLegalMove);
        }

        let abort = Arc::new(AtomicBool::new(false));
        let deadline = Instant::now() + Duration::from_millis(config.ai_search_time_ms);
        let workers: Vec<Mutex<Search>> = (0..self.pool_size)
            .map(|_| Mutex::new(Search::new(config.board_size, config.constants, zobrist.clone(), abort.clone(), deadline)))
            .collect();

        let job_counter = AtomicU64::new(0);

        let mut best_so_far = root_moves[0].mv.clone();
        let mut best_score = root_moves[0].score;
        let mut last_completed_depth: u8 = 0;

        for depth in 1..=config.ai_max_depth {
            if Instant::now() >= deadline {
                break;
            }

            let jobs: Vec<RootJob> = root_moves
                .iter()
                .map(|rm| RootJob { job_id: job_counter.fetch_add(1, Ordering::Relaxed), mv: rm.mv.clone() })
                .collect();

            let results = self.run_depth(board, color, *turn_count, depth, &jobs, &workers, &deadline, &abort);

            if abort.load(Ordering::Relaxed) {
                // A timeout fired mid-depth: every reply for this depth is
                // discarded per spec.md §5 "Cancellation / timeout".
                warn!(depth, "search depth abandoned at timeout");
                break;
            }

            let mut scored: Vec<(usize, i32)> = results.into_iter().enumerate().collect();
            scored.sort_unstable_by(|a, b| b.1.cmp(&a.1));
            let (best_idx, score) = scored[0];

            best_so_far = jobs[best_idx].mv.clone();
            best_score = score;
            last_completed_depth = depth;

            debug!(depth, best_move = ?best_so_far, score, "deepening iteration complete");

            // Principal-variation reordering: move the winner to the front
            // for the next iteration's move ordering (spec.md §4.6 point 4).
            if let Some(pos) = root_moves.iter().position(|rm| rm.mv == best_so_far) {
                let winner = root_moves.remove(pos);
                root_moves.insert(0, winner);
            }
        }

        Ok(SearchReply { best_move: best_so_far, score: best_score, depth: last_completed_depth })
    }

    /// Dispatches one job per root move for a single depth, round-robin
    /// across `workers`, and blocks until all have replied (the per-depth
    /// aggregation barrier of spec.md §5 "Ordering guarantees"). Returns
    /// the negamax-convention score (from the root mover's perspective:
    /// each child score is negated exactly as the worker's own move loop
    /// negates its children) for every job, indexed the same way as
    /// `jobs`. Each worker's own `negamax`/`quiescence` polls the same
    /// `deadline` directly on its node-count cadence (spec.md §9
    /// "Cancellation"), so an in-flight job is cut short by the real wall
    /// clock even when it started before the deadline — not only a job
    /// that was still queued when the deadline passed. The `abort` flag
    /// is the fast path for the latter case and is also set by whichever
    /// worker first observes the deadline, so sibling jobs notice sooner.
    #[allow(clippy::too_many_arguments)]
    fn run_depth(
        &self,
        board: &Board,
        color: Color,
        turn_count: u32,
        depth: u8,
        jobs: &[RootJob],
        workers: &[Mutex<Search>],
        deadline: &Instant,
        abort: &Arc<AtomicBool>,
    ) -> Vec<i32> {
        let pool_size = workers.len();
        let mut results = vec![0i32; jobs.len()];

        rayon::scope(|scope| {
            for (i, slot) in results.iter_mut().enumerate() {
                let job = &jobs[i];
                let worker = &workers[i % pool_size];
                let deadline = *deadline;
                let abort = abort.clone();
                let board = board.clone();
                let mv = job.mv.clone();

                scope.spawn(move |_| {
                    if Instant::now() >= deadline {
                        abort.store(true, Ordering::Relaxed);
                        return;
                    }

                    let next_board = apply_move_unchecked(&board, &mv, color);
                    let next_player = (color.to_index() + 1) % 4;

                    let mut worker = worker.lock().expect("worker mutex poisoned");
                    let child = worker.negamax(
                        &next_board,
                        depth.saturating_sub(1),
                        (Evaluation::min_val(), Evaluation::max_val()),
                        next_player,
                        turn_count + 1,
                    );
                    // Negate to convert the child's side-to-move-relative
                    // score back to the root mover's perspective, mirroring
                    // the `-self.negamax(...)` convention every internal
                    // move loop uses (spec.md §9 Open Question 1: stay
                    // within one sign convention end to end).
                    *slot = (-child).score();
                });
            }
        });

        results
    }
}

impl Default for SearchOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
