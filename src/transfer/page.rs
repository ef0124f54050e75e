//! The page with the transfer form.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::{Account, AccountId},
    api::{Backend, accounts_request},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        field_error, render, text_input,
    },
    navigation::nav_bar,
    session,
    transfer::endpoint::TransferValidation,
};

/// The state needed for the [get_transfer_page] route handler.
#[derive(Debug, Clone)]
pub struct TransferPageState {
    /// The backend holding the accounts.
    pub backend: Backend,
}

impl FromRef<AppState> for TransferPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

/// Renders the page for transferring funds between two accounts.
///
/// The account selects are filled from a fresh backend snapshot.
pub async fn get_transfer_page(
    State(state): State<TransferPageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let accounts: Vec<Account> = state
        .backend
        .fetch(accounts_request())
        .await
        .inspect_err(|error| tracing::error!("could not fetch the accounts: {error}"))?;

    let username = session::signed_in_user(&jar);

    let content = html! {
        (nav_bar(username.as_deref()))

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Transférer des fonds" }

            (transfer_form_view(&accounts, "", "", "", &TransferValidation::default()))
        }
    };

    Ok(render(StatusCode::OK, base("Transfert", &content)))
}

/// The transfer form fragment.
///
/// `from_value` and `to_value` are the raw select values from the previous
/// submission so an invalid form keeps the user's choices.
pub(crate) fn transfer_form_view(
    accounts: &[Account],
    from_value: &str,
    to_value: &str,
    amount: &str,
    validation: &TransferValidation,
) -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSFER_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (account_select(
                "from_account",
                "Compte source",
                accounts,
                from_value,
                validation.from_message.as_deref(),
            ))

            (account_select(
                "to_account",
                "Compte destination",
                accounts,
                to_value,
                validation.to_message.as_deref(),
            ))

            (text_input(
                "amount",
                "Montant",
                "text",
                amount,
                validation.amount_message.as_deref(),
            ))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Transférer" }

            a href=(endpoints::ACCOUNTS_VIEW) class="block text-center text-sm text-gray-500 dark:text-gray-400 underline"
            {
                "Annuler"
            }
        }
    }
}

fn account_select(
    name: &str,
    label: &str,
    accounts: &[Account],
    selected_value: &str,
    error_message: Option<&str>,
) -> Markup {
    let selected_id: Option<AccountId> = selected_value.trim().parse().ok();

    html! {
        div
        {
            label
                for=(name)
                class=(FORM_LABEL_STYLE)
            {
                (label)
            }

            select
                id=(name)
                name=(name)
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Choisissez un compte" }

                @for account in accounts {
                    option
                        value=(account.id)
                        selected[selected_id == Some(account.id)]
                    {
                        (account.name)
                    }
                }
            }

            (field_error(error_message))
        }
    }
}
