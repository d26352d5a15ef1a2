//! Interactive chat module
//!
//! Provides a line-editor based trip conversation.

mod repl;

pub use repl::TripRepl;
