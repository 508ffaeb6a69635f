mod zobrist_utils;

pub use zobrist_utils::ZobristTables;
