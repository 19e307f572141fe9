//! HTML template rendering handlers.

pub mod analytics;
pub mod home;
pub mod not_found;

pub use analytics::analytics_page_handler;
pub use home::{home_page_handler, shorten_form_handler};
pub use not_found::not_found_handler;
