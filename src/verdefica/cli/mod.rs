//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog—not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! ## Two Modes
//!
//! Every query command works one-shot (`verdefica listar -c nativa`) for
//! scripting, and `verdefica navegar` opens the interactive browser where
//! filters, sorting and the comparison selection persist between commands.
//!
//! Running `verdefica` with no arguments defaults to `listar`: reading the
//! list is most of the usage and should be the path of least resistance.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `browse`: The interactive browser loop
//! - `print`: Output formatting (lists, cards, tables, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod browse;
mod commands;
mod print;
mod setup;
mod styles;

pub use commands::run;
