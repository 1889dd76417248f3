//! Quicklink module
//!
//! Named URL bookmarks, kept as one flat list.

mod model;
mod repository;

pub use model::Quicklink;
pub use repository::QuicklinkRepository;
