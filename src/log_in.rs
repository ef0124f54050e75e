//! The login page and the handler for login requests.
//!
//! Logging in is deliberately a stub: once both fields are present the
//! request succeeds and the client is redirected to the accounts page. No
//! backend call is made and nothing verifies the credentials.

use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, base, render, text_input},
    session,
};

/// The raw data entered by the user in the login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LogInData {
    /// Username entered during login.
    pub username: String,
    /// Password entered during login.
    pub password: String,
}

/// The outcome of validating a login attempt.
///
/// Both messages can be set at once; the attempt is valid exactly when
/// neither is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginValidation {
    /// Message for the username field, set when the username is missing.
    pub username_message: Option<String>,
    /// Message for the password field, set when the password is missing.
    pub password_message: Option<String>,
}

impl LoginValidation {
    /// Whether the attempt passed validation.
    pub fn is_valid(&self) -> bool {
        self.username_message.is_none() && self.password_message.is_none()
    }
}

const USERNAME_REQUIRED_MSG: &str = "Le nom d'utilisateur est obligatoire.";
const PASSWORD_REQUIRED_MSG: &str = "Le mot de passe est obligatoire.";

/// Check that both credential fields are present.
///
/// Pure; both rules are evaluated so both messages can be populated in one
/// result.
fn validate_login(credentials: &LogInData) -> LoginValidation {
    LoginValidation {
        username_message: credentials
            .username
            .is_empty()
            .then(|| USERNAME_REQUIRED_MSG.to_owned()),
        password_message: credentials
            .password
            .is_empty()
            .then(|| PASSWORD_REQUIRED_MSG.to_owned()),
    }
}

/// Display the login page.
pub async fn get_log_in_page() -> Response {
    let content = html! {
        div class="flex flex-col items-center justify-center px-6 py-8 mx-auto"
        {
            h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white" { "Banquier" }

            div class="w-full bg-white rounded-lg shadow dark:border md:mt-0 sm:max-w-md xl:p-0 dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h2 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                    {
                        "Connexion"
                    }

                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Entrez votre nom d'utilisateur et votre mot de passe"
                    }

                    (log_in_form_view("", &LoginValidation::default()))
                }
            }
        }
    };

    render(StatusCode::OK, base("Connexion", &content))
}

/// The login form fragment, re-rendered with inline messages on invalid
/// input.
fn log_in_form_view(username: &str, validation: &LoginValidation) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (text_input(
                "username",
                "Nom d'utilisateur",
                "text",
                username,
                validation.username_message.as_deref(),
            ))

            (text_input(
                "password",
                "Mot de passe",
                "password",
                "",
                validation.password_message.as_deref(),
            ))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Connexion" }
        }
    }
}

/// Handler for login requests via the POST method.
///
/// On invalid input the form is returned with a message under each missing
/// field and no other effect. On valid input the session cookie is set and
/// the client is redirected to the accounts page, unconditionally (see the
/// module docs).
pub async fn post_log_in(jar: PrivateCookieJar, Form(credentials): Form<LogInData>) -> Response {
    let validation = validate_login(&credentials);

    if !validation.is_valid() {
        return render(
            StatusCode::OK,
            log_in_form_view(&credentials.username, &validation),
        );
    }

    let jar = session::sign_in(jar, &credentials.username);

    (
        StatusCode::SEE_OTHER,
        HxRedirect(endpoints::ACCOUNTS_VIEW.to_owned()),
        jar,
    )
        .into_response()
}
