//! Manual smoke-testing harness for the engine: reads a board position
//! from a plain text format, runs one search request with a configurable
//! time budget, and prints the chosen move. Not a UI surface — this is
//! ambient test tooling, the way `gyk-michi-rust`'s binary exercises its
//! own engine from the command line.

use clap::Parser;

use territory_core::{Board, Color, Piece, Posture};
use territory_engine::{SearchConfig, SearchOrchestrator, SearchRequest};

/// Run one search on a board described on the command line.
#[derive(Parser)]
#[command(name = "territory-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length.
    #[arg(long, default_value_t = 11)]
    size: u8,

    /// Turn counter for the position (1 forces a single-placement move).
    #[arg(long, default_value_t = 1)]
    turn: u32,

    /// Color to move: A, B, C, or D.
    #[arg(long, default_value = "A")]
    color: String,

    /// Search time budget in milliseconds.
    #[arg(long, default_value_t = 4000)]
    time_ms: u64,

    /// Maximum iterative-deepening depth.
    #[arg(long, default_value_t = 24)]
    max_depth: u8,

    /// Pre-existing pieces, as `row,col,color,posture` tuples separated
    /// by `;`, e.g. `5,5,A,old;5,6,B,old`. Posture is `old` or `new`.
    #[arg(long)]
    placements: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let color = parse_color(&cli.color).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });

    let mut board = Board::new(cli.size).unwrap_or_else(|e| {
        eprintln!("invalid board: {e}");
        std::process::exit(2);
    });

    if let Some(spec) = &cli.placements {
        if let Err(e) = apply_placements(&mut board, spec) {
            eprintln!("invalid --placements: {e}");
            std::process::exit(2);
        }
    }

    let request = SearchRequest {
        board,
        current_player_index: color.to_index(),
        turn_count: cli.turn,
        config: SearchConfig { board_size: cli.size, ai_search_time_ms: cli.time_ms, ai_max_depth: cli.max_depth, ..SearchConfig::default() },
    };

    let orchestrator = SearchOrchestrator::new();
    println!("worker pool size: {}", orchestrator.pool_size());

    match orchestrator.search(&request) {
        Ok(reply) => {
            println!("depth {}  score {}  move {:?}", reply.depth, reply.score, reply.best_move.placements);
        }
        Err(e) => {
            eprintln!("search failed: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_uppercase().as_str() {
        "A" => Ok(Color::A),
        "B" => Ok(Color::B),
        "C" => Ok(Color::C),
        "D" => Ok(Color::D),
        other => Err(format!("unknown color '{other}', expected one of A, B, C, D")),
    }
}

fn apply_placements(board: &mut Board, spec: &str) -> Result<(), String> {
    for tuple in spec.split(';').filter(|s| !s.trim().is_empty()) {
        let fields: Vec<&str> = tuple.split(',').map(str::trim).collect();
        let [row, col, color, posture] = fields[..] else {
            return Err(format!("expected row,col,color,posture, got '{tuple}'"));
        };

        let row: u8 = row.parse().map_err(|_| format!("bad row in '{tuple}'"))?;
        let col: u8 = col.parse().map_err(|_| format!("bad col in '{tuple}'"))?;
        let color = parse_color(color)?;
        let posture = match posture.to_ascii_lowercase().as_str() {
            "old" => Posture::Old,
            "new" => Posture::New,
            other => return Err(format!("unknown posture '{other}', expected old or new")),
        };

        if !board.in_bounds(row, col) {
            return Err(format!("({row},{col}) is out of bounds"));
        }
        board.set(row, col, Some(Piece::new(color, posture)));
    }
    Ok(())
}
