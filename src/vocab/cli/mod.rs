//! # CLI Behavior
//!
//! This is **one possible UI client** for vocab, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `vocab` library.
//!
//! ### Naked Execution (`vocab`)
//!
//! Running `vocab` with no arguments lists the topics, same as `vocab topics`.
//!
//! ### Topics on the command line
//!
//! Wherever a command takes a `<TOPIC>`, either the number shown by
//! `vocab topics` or the topic's name (any case) works.
//!
//! ### Saving over an existing file
//!
//! `vocab save <PATH>` never silently replaces a file. With `--force` it
//! does; in an interactive terminal it asks first; otherwise it warns.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (topic lists, word grids, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
