//! # Coursebox Architecture
//!
//! Coursebox keeps tasks, files, grades and notes per university module and
//! lets the user move between pages the way a browser moves between URLs.
//! The library holds all behaviour; the binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, prints results, owns exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line against the current page, runs it          │
//! │  - Commits navigation only after success                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (parser.rs, commands/*.rs)                   │
//! │  - One parsed value per action, validated before it runs    │
//! │  - Mutates the registry and persists the touched collection │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (registry.rs, store/)                        │
//! │  - ModuleRegistry: modules keyed by code                    │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pages
//!
//! The user is always somewhere: `/main`, `/calendar`, `/modules`,
//! `/modules/CG1111` or `/modules/CG1111/tasks`. Commands may name a page
//! between the action and the ` / ` separator; whatever is left out is taken
//! from the current page. See [`parser`] and [`trace`].
//!
//! ## Indexes
//!
//! Listings number items from 1. [`index::Position`] carries those numbers
//! until they reach a collection.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing calls
//! `std::process::exit`. Storage goes through [`store::DataStore`], so every
//! command is tested against [`store::memory::InMemoryStore`].
//!
//! ## Module Overview
//!
//! - [`api`]: Facade that runs input lines
//! - [`parser`]: Line grammar and page-data completion
//! - [`commands`]: One file per action, plus the batch engine
//! - [`trace`]: Pages, tabs and the current address
//! - [`model`]: Tasks, files, grades, notes and modules
//! - [`collection`]: Ordered per-module lists
//! - [`index`]: One-based positions
//! - [`registry`]: Loaded modules and their persistence
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `config.json` settings
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the line loop and printing (binary only)

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod registry;
pub mod store;
pub mod trace;
