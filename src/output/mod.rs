//! Response text and terminal output
//!
//! `report` builds the plain response artifact; `display` pretty-prints for a terminal.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{print_explanation, print_reply};
pub use report::render_response;
