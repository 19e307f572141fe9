//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, lookup, and click accounting
//! - [`PgBlobRepository`] - QR image blob storage

pub mod pg_blob_repository;
pub mod pg_link_repository;

pub use pg_blob_repository::PgBlobRepository;
pub use pg_link_repository::PgLinkRepository;
