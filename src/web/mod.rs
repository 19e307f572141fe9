//! Web layer for browser-facing pages.
//!
//! Server-side rendered with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers

pub mod handlers;
