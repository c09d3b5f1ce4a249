//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `schemes_core::storage`. The active backend is selected at
//! compile time:
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - without `sqlite`: the in-memory backend
//!
//! The in-memory backend is always compiled; the HTTP tests run against it.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p schemes
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p schemes --no-default-features
//! ```

pub mod inmemory;
mod seed;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use seed::seed_demo_data;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
