//! Displays one account's transactions.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::{Account, AccountId},
    api::{Backend, accounts_request, transactions_request},
    endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base,
    },
    money::format_money,
    navigation::nav_bar,
    session,
    transaction::Transaction,
};

/// The state needed for the [get_transactions_page] route handler.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The backend holding the accounts and their ledgers.
    pub backend: Backend,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

/// Renders the transactions page for one account.
///
/// Answers 404 when the backend does not know the account.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    Path(account_id): Path<AccountId>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let accounts: Vec<Account> = state
        .backend
        .fetch(accounts_request())
        .await
        .inspect_err(|error| tracing::error!("could not fetch the accounts: {error}"))?;

    let account = accounts
        .iter()
        .find(|account| account.id == account_id)
        .ok_or(Error::NotFound)?;

    let transactions: Vec<Transaction> = state
        .backend
        .fetch(transactions_request(account_id))
        .await
        .inspect_err(|error| {
            tracing::error!("could not fetch the transactions of account {account_id}: {error}")
        })?;

    let username = session::signed_in_user(&jar);

    Ok(transactions_view(account, &transactions, username.as_deref()).into_response())
}

fn transactions_view(
    account: &Account,
    transactions: &[Transaction],
    username: Option<&str>,
) -> Markup {
    let table_row = |transaction: &Transaction| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    (transaction.date.date())
                }

                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                {
                    (transaction.description)
                }

                td class="px-6 py-4 text-right"
                {
                    @if let Some(debit) = transaction.debit { (format_money(debit)) }
                }

                td class="px-6 py-4 text-right"
                {
                    @if let Some(credit) = transaction.credit { (format_money(credit)) }
                }
            }
        )
    };

    let content = html!(
        (nav_bar(username))

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-3xl space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold"
                    {
                        "Transactions : " (account.name)
                    }

                    div class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Solde " (format_money(account.balance))
                    }
                }

                section class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class="px-6 py-3 text-right" { "Débit" }
                                th scope="col" class="px-6 py-3 text-right" { "Crédit" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (table_row(transaction))
                            }

                            @if transactions.is_empty() {
                                tr
                                {
                                    td
                                        colspan="4"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "Aucune transaction sur ce compte."
                                    }
                                }
                            }
                        }
                    }
                }

                a href=(endpoints::ACCOUNTS_VIEW) class=(LINK_STYLE)
                {
                    "Retour aux comptes"
                }
            }
        }
    );

    base("Transactions", &content)
}
