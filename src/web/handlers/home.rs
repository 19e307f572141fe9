//! Home page handler with the shortening form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with the form and, after a submission,
/// either the shortened result (link + QR image) or an error message.
#[derive(Template, WebTemplate, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub short_url: Option<String>,
    pub qr_url: Option<String>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

/// Form payload for a shortening request.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[validate(length(min = 1, message = "Please enter a URL"))]
    pub url: String,
}

/// Renders the empty home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_page_handler() -> IndexTemplate {
    IndexTemplate::default()
}

/// Processes a shortening form submission.
///
/// # Endpoint
///
/// `POST /`
///
/// Always re-renders the home page: with the short URL and QR image on
/// success, or with a user-facing error message otherwise. Submitting an
/// already-shortened URL reuses the existing record and says so.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> IndexTemplate {
    if let Err(e) = form.validate() {
        let message = e
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Please enter a URL".to_string());

        return IndexTemplate {
            error_message: Some(message),
            ..IndexTemplate::default()
        };
    }

    match state.link_service.shorten(&form.url).await {
        Ok(outcome) => {
            let success_message = if outcome.created {
                "URL shortened successfully!"
            } else {
                "URL already shortened! Here's your existing link:"
            };

            IndexTemplate {
                short_url: Some(outcome.short_url),
                qr_url: Some(outcome.link.qr_url),
                success_message: Some(success_message.to_string()),
                error_message: None,
            }
        }
        Err(err) => IndexTemplate {
            error_message: Some(err.to_error_info().message),
            ..IndexTemplate::default()
        },
    }
}
