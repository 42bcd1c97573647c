//! # Vocab Architecture
//!
//! Vocab is a **vocabulary registry library**: an ordered list of topics, each
//! owning a sorted, case-folded list of words, persisted as plain text. The
//! `vocab` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (topic numbers or names → selectors)   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Registry operations on TopicList / WordList              │
//! │  - Reports outcomes as CmdResult messages                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RegistryStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core collections, [`word_list::WordList`] and
//! [`topic_list::TopicList`], know nothing about storage or users. Topics are
//! addressed by 0-based positions there; users see 1-based numbers (see
//! [`index`]).
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through the `log` facade.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per registry operation
//! - [`store`]: Storage abstraction and implementations
//! - [`word_list`], [`topic_list`], [`model`]: Core collections and `Topic`
//! - [`format`]: The `#topic` / word-per-line text format
//! - [`index`]: Display numbers and topic selectors
//! - [`config`]: Configuration management
//! - [`init`]: Resolving the home directory and registry file
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod topic_list;
pub mod word_list;
