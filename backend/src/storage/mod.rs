//! # Storage Module
//!
//! Persistence for pregnancy profiles and the development reference table.
//!
//! Services only see the traits in [`traits`]; the SQLite repositories here are
//! the one implementation today.
//!
//! - **connection**: pool setup and schema creation
//! - **repositories**: SQLite implementations of the storage traits

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{DevelopmentRepository, PregnancyRepository};
pub use traits::{DevelopmentStorage, PregnancyStorage};
