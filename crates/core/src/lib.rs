//! Core of the schemes service.
//!
//! Pure domain types, projection and validation functions, and the storage
//! contract implemented by the backends in the `schemes` crate. Nothing in
//! this crate performs I/O.

pub mod scheme;
pub mod serde;
pub mod storage;
