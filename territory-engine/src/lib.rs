//! The AI engine for the territorial board game: evaluation, move
//! ordering, the negamax search worker, and the root-parallel iterative-
//! deepening orchestrator (C2, C3, C5, C6). Board representation, piece
//! rules, and Zobrist hashing live in `territory_core` (C1, C4).

mod config;
mod error;
mod evaluation;
mod movegen;
mod orchestrator;
mod search;
mod trasposition;

pub use config::{alliances, player_teams, SearchConfig, SearchConstants, SearchRequest};
pub use error::EngineError;
pub use evaluation::{evaluate_position, Evaluation};
pub use movegen::{conversion_moves, ordered_moves, MoveScore, RatedMove};
pub use orchestrator::{InitMessage, JobReply, JobRequest, RootJob, SearchOrchestrator, SearchReply};
pub use search::{Bounds, Search};
pub use trasposition::{NodeType, TTEntry, TTable};
