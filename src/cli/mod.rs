//! Terminal shell - numbered menu, prompts and rendering around the catalog.
//!
//! The shell is the only part of the crate that talks to the operator. It
//! owns the [`Catalog`](crate::core::Catalog) for the whole session.

/// Menu action implementations (add, list, sell, total)
pub mod commands;
/// Main menu options and parsing
pub mod menu;
/// The menu loop
pub mod shell;
/// ANSI colors
pub mod style;
/// Line-oriented input/output over any reader and writer
pub mod terminal;

pub use menu::MenuOption;
pub use shell::Shell;
pub use terminal::Terminal;
