use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use territory_core::Color;

use crate::error::EngineError;

/// Tunable constants for evaluation, move ordering, and search, per
/// spec.md 4.5 and 6. Defaults match the values spec.md lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConstants {
    pub piece_value: i32,
    pub corner_placement_penalty: i32,
    pub static_corner_penalty: i32,
    pub extent_bonus_multiplier: i32,
    pub contact_bonus: i32,
    pub win_score: i32,
    pub candidate_singles_limit: usize,
    pub q_search_max_depth: u8,
}

impl Default for SearchConstants {
    fn default() -> Self {
        Self {
            piece_value: 100,
            corner_placement_penalty: 200,
            static_corner_penalty: 50,
            extent_bonus_multiplier: 5,
            contact_bonus: 5,
            win_score: 100_000,
            candidate_singles_limit: 30,
            q_search_max_depth: 2,
        }
    }
}

/// The configuration block of a search request, per spec.md 6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub board_size: u8,
    pub ai_search_time_ms: u64,
    pub ai_max_depth: u8,
    pub constants: SearchConstants,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: 11,
            ai_search_time_ms: 4000,
            ai_max_depth: 24,
            constants: SearchConstants::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.board_size < 3 {
            return Err(EngineError::InvalidConfig(format!(
                "boardSize must be >= 3, got {}",
                self.board_size
            )));
        }
        if self.ai_max_depth == 0 {
            return Err(EngineError::InvalidConfig("AI_MAX_DEPTH must be >= 1".into()));
        }
        if self.ai_search_time_ms == 0 {
            return Err(EngineError::InvalidConfig("AI_SEARCH_TIME_MS must be >= 1".into()));
        }
        Ok(())
    }
}

/// The full request accepted by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub board: territory_core::Board,
    pub current_player_index: usize,
    pub turn_count: u32,
    pub config: SearchConfig,
}

/// `ALLIANCES` / `PLAYER_TEAMS`, exposed as lookups for callers that want
/// to inspect the fixed team structure without hardcoding it. The
/// structure itself is fixed by spec.md 3 (A/C vs B/D); this map exists
/// for the external interface contract in spec.md 6, not because the
/// engine itself needs runtime-configurable alliances.
pub fn alliances() -> HashMap<Color, Color> {
    use Color::*;
    HashMap::from([(A, C), (C, A), (B, D), (D, B)])
}

pub fn player_teams() -> HashMap<Color, territory_core::Team> {
    use territory_core::Team::*;
    use Color::*;
    HashMap::from([(A, One), (C, One), (B, Two), (D, Two)])
}
