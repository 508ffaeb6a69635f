use serde::{Deserialize, Serialize};

use territory_core::{Board, Move, ZobristTables};

use crate::config::SearchConstants;

/// `{ type: "init", config, zobrist, zobristTurn }` of spec.md §6: sent
/// once per whole-engine search to every worker before any job. The
/// concrete `SearchOrchestrator` below calls this in-process rather than
/// over a literal channel (see `DESIGN.md`), but the shape is kept as a
/// real type so a future out-of-process transport can serialize it
/// unchanged.
#[derive(Debug, Clone)]
pub struct InitMessage {
    pub board_size: u8,
    pub constants: SearchConstants,
    pub zobrist: std::sync::Arc<ZobristTables>,
}

/// One negamax job dispatched to a worker: `{ jobId, board, depth, alpha,
/// beta, playerIndex, turnCount }` of spec.md §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub job_id: u64,
    pub board: Board,
    pub depth: u8,
    pub player_index: usize,
    pub turn_count: u32,
}

/// `{ jobId, score }` of spec.md §6.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JobReply {
    pub job_id: u64,
    pub score: i32,
}

/// A root move paired with the job id assigned to it for one deepening
/// iteration, so replies can be matched back to their originating move
/// without relying on vector position alone.
#[derive(Debug, Clone)]
pub struct RootJob {
    pub job_id: u64,
    pub mv: Move,
}
