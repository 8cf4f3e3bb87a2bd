//! # Kennel Architecture
//!
//! Kennel is a **UI-agnostic adoption catalog library**: a store of dogs and
//! breeds, a wish list, and a query planner that filters and orders the
//! dogs that are ready for adoption. The `kennel` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw filter text → FilterSpec)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business rules: unique ids, ready needs a price, ...     │
//! │  - Searches run through the query planner (query/)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Query Planner
//!
//! [`query`] is self-contained: it knows the six searchable fields through a
//! static accessor registry and turns a [`query::FilterSpec`] plus a
//! [`query::SortSpec`] into a filtered, stably sorted view over a slice of
//! dogs. It never touches storage.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they
//! end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: Field registry, filter/sort requests and the planner
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Dog`, `Breed`, `Sex`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
