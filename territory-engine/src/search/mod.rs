mod history;
mod searching;

pub use history::HistoryTable;
pub use searching::{Bounds, Search};
