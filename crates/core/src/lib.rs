//! Core library for Tick
//!
//! This crate contains the data layer of the tracker:
//! - Task and quicklink models
//! - Repository traits for both collections
//! - The SQLite-backed `Store`

pub mod clock;
pub mod error;
pub mod quicklink;
pub mod store;
pub mod task;

pub use error::Error;
pub use store::Store;
pub type Result<T> = std::result::Result<T, Error>;
