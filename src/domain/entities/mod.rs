//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its visit accounting
//!
//! Creation uses a separate struct ([`NewLink`]) carrying only the fields
//! the caller decides; the store owns `id`, `click_count`, and `created_at`.

pub mod link;

pub use link::{Link, NewLink};
