//! In-memory storage backend.
//!
//! Stores all data in ordered maps behind an `Arc<RwLock<_>>`. Used by the
//! HTTP tests and when the service is built without the `sqlite` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let scheme = repo.add(&NewScheme::new("Find the Holy Grail")).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
