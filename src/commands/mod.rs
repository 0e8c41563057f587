//! Command implementations

pub mod batch;
pub mod explain;
pub mod suggest;

pub use batch::{BatchReply, run_batch};
pub use explain::{Explanation, explain_attempts};
pub use suggest::{reply_to, run_suggest};
