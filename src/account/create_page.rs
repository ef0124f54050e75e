//! The page for creating an account.

use axum::{http::StatusCode, response::Response};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    account::create_endpoint::NewAccountValidation,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, render, text_input},
    navigation::nav_bar,
    session,
};

/// Renders the page for creating an account.
pub async fn get_new_account_page(jar: PrivateCookieJar) -> Response {
    let username = session::signed_in_user(&jar);

    let content = html! {
        (nav_bar(username.as_deref()))

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Créer un nouveau compte" }

            (new_account_form_view("", "", &NewAccountValidation::default()))
        }
    };

    render(StatusCode::OK, base("Nouveau compte", &content))
}

/// The account-creation form fragment.
///
/// Re-rendered by the endpoint with the user's values and the per-field
/// messages when validation fails.
pub(crate) fn new_account_form_view(
    name: &str,
    balance: &str,
    validation: &NewAccountValidation,
) -> Markup {
    html! {
        form
            hx-post=(endpoints::CREATE_ACCOUNT_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (text_input(
                "name",
                "Nom du compte",
                "text",
                name,
                validation.name_message.as_deref(),
            ))

            (text_input(
                "balance",
                "Solde de départ",
                "text",
                balance,
                validation.balance_message.as_deref(),
            ))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Valider" }

            a href=(endpoints::ACCOUNTS_VIEW) class="block text-center text-sm text-gray-500 dark:text-gray-400 underline"
            {
                "Annuler"
            }
        }
    }
}
