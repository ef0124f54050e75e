//! Displays every account as a card with its balance.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::Account,
    api::{Backend, accounts_request},
    endpoints,
    html::{CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    money::format_money,
    navigation::nav_bar,
    session,
};

/// The state needed for the [get_accounts_page] route handler.
#[derive(Debug, Clone)]
pub struct AccountsPageState {
    /// The backend holding the accounts.
    pub backend: Backend,
}

impl FromRef<AppState> for AccountsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

/// Renders the accounts page showing all accounts.
pub async fn get_accounts_page(
    State(state): State<AccountsPageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let accounts: Vec<Account> = state
        .backend
        .fetch(accounts_request())
        .await
        .inspect_err(|error| tracing::error!("could not fetch the accounts: {error}"))?;

    let username = session::signed_in_user(&jar);

    Ok(accounts_view(&accounts, username.as_deref()).into_response())
}

fn accounts_view(accounts: &[Account], username: Option<&str>) -> Markup {
    let content = html!(
        (nav_bar(username))

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-2xl space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Comptes" }

                    div class="flex gap-4"
                    {
                        a href=(endpoints::NEW_ACCOUNT_VIEW) class=(LINK_STYLE)
                        {
                            "Créer un nouveau compte"
                        }

                        a href=(endpoints::NEW_TRANSFER_VIEW) class=(LINK_STYLE)
                        {
                            "Transférer des fonds"
                        }
                    }
                }

                ul class="space-y-4"
                {
                    @for account in accounts {
                        li class=(CARD_STYLE) data-account-card="true"
                        {
                            div class="flex items-start justify-between gap-3"
                            {
                                div class="text-sm font-semibold text-gray-900 dark:text-white"
                                { (account.name) }

                                div class="text-sm tabular-nums text-right text-gray-900 dark:text-white"
                                { "Solde " (format_money(account.balance)) }
                            }

                            div class="mt-2 text-sm"
                            {
                                a
                                    href=(endpoints::transactions_path(account.id))
                                    class=(LINK_STYLE)
                                {
                                    "Voir les transactions"
                                }
                            }
                        }
                    }

                    @if accounts.is_empty() {
                        li class="rounded border border-dashed border-gray-300 bg-white px-4 py-6 text-center text-sm text-gray-500 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-400"
                        {
                            "Aucun compte pour l'instant. Créez-en un "
                            a href=(endpoints::NEW_ACCOUNT_VIEW) class=(LINK_STYLE)
                            {
                                "ici"
                            }
                            "."
                        }
                    }
                }
            }
        }
    );

    base("Comptes", &content)
}
