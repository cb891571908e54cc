//! Processor Lambda handler and reply construction

pub mod guard;
pub mod handler;
pub mod reply;
pub mod unwrap;

// Re-export the main handler for convenience
pub use handler::{Processor, handler};
