//! Logout: clears the session cookie and redirects users home.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{endpoints, session};

/// Clear the session cookie and redirect the client to the login page.
///
/// Unconditional: there is no validation and no failure path.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let jar = session::sign_out(jar);

    (jar, Redirect::to(endpoints::ROOT)).into_response()
}
