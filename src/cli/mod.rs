//! CLI command handlers
//!
//! The interactive assistant (command parsing, dispatch and the session
//! loop) plus the export and import handlers behind the clap subcommands.

pub mod command;
pub mod dispatch;
pub mod export;
pub mod repl;

pub use command::Command;
pub use dispatch::{error_message, execute, Outcome};
pub use export::{handle_export, handle_import, ExportFormat};
pub use repl::Assistant;
