//! The signed-in-user cookie.
//!
//! This is display state, not authentication: logging in never verifies the
//! credentials against anything, it only records the username so pages can
//! greet the user and the logout link has something to clear.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

/// The cookie holding the signed-in username.
pub const SESSION_COOKIE: &str = "banquier_user";

/// Record `username` as the signed-in user.
pub fn sign_in(jar: PrivateCookieJar, username: &str) -> PrivateCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, username.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    jar.add(cookie)
}

/// Clear the signed-in user.
pub fn sign_out(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
}

/// The signed-in username, if any.
pub fn signed_in_user(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}
