//! Presentation layer for tastetrip
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive trip chat.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::TripRepl;
pub use cli::commands::{Cli, Command, FormatArg, TasteArgs};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
