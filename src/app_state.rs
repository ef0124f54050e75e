//! The state shared by every route handler.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::api::Backend;

/// The state of the web server: a handle on the REST backend and the key for
/// the session cookie. Cheap to clone; handlers extract the slice of it they
/// need via [FromRef].
#[derive(Debug, Clone)]
pub struct AppState {
    /// The external REST backend holding accounts and transactions.
    pub backend: Backend,

    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
}

impl AppState {
    /// Create the app state from a backend client and a cookie secret.
    pub fn new(backend: Backend, cookie_secret: &str) -> Self {
        Self {
            backend,
            cookie_key: create_cookie_key(cookie_secret),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret` string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
