mod evaluate;

pub use evaluate::{evaluate_position, Evaluation};
