//! The routes served by this application.
//!
//! Pages are plain paths; operations that forms post to live under `/api`.
//! The endpoints of the external backend are defined next to the request
//! builders in [crate::api], not here.

use crate::account::AccountId;

/// The login page, and where logging out lands.
pub const ROOT: &str = "/";
/// The page listing all accounts, where logging in lands.
pub const ACCOUNTS_VIEW: &str = "/accounts";
/// The page with the account-creation form.
pub const NEW_ACCOUNT_VIEW: &str = "/accounts/new";
/// The page listing one account's transactions.
pub const TRANSACTIONS_VIEW: &str = "/accounts/{account_id}/transactions";
/// The page with the transfer form.
pub const NEW_TRANSFER_VIEW: &str = "/transfers/new";

/// The route the login form posts to.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route that clears the session and redirects home.
pub const LOG_OUT: &str = "/api/log_out";
/// The route the account-creation form posts to.
pub const CREATE_ACCOUNT_API: &str = "/api/accounts";
/// The route the transfer form posts to.
pub const TRANSFER_API: &str = "/api/transfers";

/// The transactions page for one account.
pub fn transactions_path(account_id: AccountId) -> String {
    TRANSACTIONS_VIEW.replace("{account_id}", &account_id.to_string())
}
