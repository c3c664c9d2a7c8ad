//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee record library** with a thin interactive
//! menu on top. The CLI is just one client of the library; nothing from
//! `api.rs` inward knows about terminals.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Menu loop, prompting, output formatting                  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the resident employee collection                    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per operation                        │
//! │  - Reports outcomes as CmdMessage values, never printing    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Recoverable user-facing conditions (a duplicate record, a name that isn't
//! there, a rejected field value) are not errors: they travel back to the UI
//! as [`commands::CmdMessage`] values. `Err` is reserved for I/O and
//! serialization failures.
//!
//! ## Persistence Model
//!
//! The whole collection is loaded once at startup and lives in memory for the
//! process lifetime. Every mutation rewrites the full backing JSON file. See
//! [`store`] for the trade-offs this accepts.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Employee` record type and its validation
//! - [`error`]: Error types
//! - `main.rs`/`args.rs`: menu loop and argument parsing for the binary (not
//!   part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
