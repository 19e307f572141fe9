//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Creation workflow and redirect resolution
//! - [`services::analytics_service::AnalyticsService`] - Read-only record access

pub mod services;
