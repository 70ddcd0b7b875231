//! Concurrency boundary for the transport collaborator.
//!
//! - `Table`: one game behind a `parking_lot::RwLock`
//! - `Tables`: registry of independent games keyed by `GameId`

pub mod table;
pub mod tables;

pub use table::{GameId, Table};
pub use tables::Tables;
