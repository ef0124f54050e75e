//! The 404 page.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_page, render};

/// Fallback handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    not_found_response()
}

/// The 404 response, also used when the backend does not know a resource.
pub fn not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_page(
            "Page introuvable",
            "404",
            "Cette page n'existe pas.",
            "Vérifiez l'adresse ou repartez de l'accueil.",
        ),
    )
}
