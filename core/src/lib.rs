pub mod probe;
pub mod retry;
pub mod scheduler;
