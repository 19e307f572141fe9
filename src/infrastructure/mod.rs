//! Infrastructure layer for external integrations.
//!
//! Implements the repository interfaces defined by the domain layer against
//! PostgreSQL.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
