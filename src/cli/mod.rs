//! 交互式控制台

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute, Command, CommandResult, ConsoleState};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
