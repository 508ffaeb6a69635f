mod pool;
mod protocol;

pub use pool::{SearchOrchestrator, SearchReply};
pub use protocol::{InitMessage, JobReply, JobRequest, RootJob};
