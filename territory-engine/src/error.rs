use thiserror::Error;

/// Error kinds surfaced by the core, per spec.md 7. `Timeout` and
/// `WorkerFault` are handled internally by the orchestrator and never
/// escape as `Err` — they are recorded here only so internal plumbing has
/// a uniform type to log through `tracing`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no legal move available")]
    NoLegalMove,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("search timed out")]
    Timeout,

    #[error("worker fault: {0}")]
    WorkerFault(String),
}
