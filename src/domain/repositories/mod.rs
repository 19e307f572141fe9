//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link lookup, insertion, and click accounting
//! - [`BlobRepository`] - QR image blob storage

pub mod blob_repository;
pub mod link_repository;

pub use blob_repository::{BlobRepository, QrBlob};
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use blob_repository::MockBlobRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
