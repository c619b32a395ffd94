//! # VerdeFica Architecture
//!
//! VerdeFica is a **UI-agnostic species-selection library** for Recife's
//! municipal afforestation program. It is not a CLI application with some
//! library code bolted on; it is a library that happens to ship a CLI
//! client.
//!
//! That distinction drives the architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders lists/cards/tables, runs the   │
//! │    interactive browser                                      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw words → SpeciesSelector)          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure derivations over the catalog                        │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs + especies.json)                       │
//! │  - Fixed species list, embedded at compile time             │
//! │  - Replaceable via --catalog / VERDEFICA_CATALOG            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Everything Is Derived
//!
//! The user-visible list is always `filter → sort → index` over the
//! catalog, computed fresh from the current `FilterState`, `SortMode` and
//! `Selection`. Nothing caches a list, so filters, sorting, selection and
//! comparison can never disagree with each other. With a 19-entry catalog
//! recomputation costs nothing and removes a whole class of sync bugs.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, catalog), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could back a web service or a kiosk UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the
//!    filter/sort/selection semantics. The lion's share of testing.
//!
//! 2. **API** (`api.rs`): dispatch tests verifying selectors are parsed
//!    and handed to the right command.
//!
//! 3. **CLI** (`cli/` + thin `main.rs`): integration tests run the real
//!    binary and assert on rendered output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`catalog`]: Catalog loading and validation
//! - [`model`]: Core data types (`Species` and its facet enums)
//! - [`filter`]: `FilterState`, `SortMode`, and the apply pipeline
//! - [`index`]: Display positions and selector resolution
//! - [`selection`]: The comparison selection set
//! - [`session`]: Interactive browse state
//! - [`compare`]: Derivation of the side-by-side table
//! - [`recommend`]: Per-RPA planting suggestions
//! - [`export`]: JSON/CSV payloads
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering, and the interactive browser for
//!   the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod compare;
pub mod error;
pub mod export;
pub mod filter;
pub mod index;
pub mod model;
pub mod recommend;
pub mod selection;
pub mod session;
