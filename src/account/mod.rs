//! Accounts: the model, the accounts page and the account-creation flow.

mod accounts_page;
mod core;
mod create_endpoint;
mod create_page;

pub use accounts_page::get_accounts_page;
pub use core::{Account, AccountId};
pub use create_endpoint::create_account_endpoint;
pub use create_page::get_new_account_page;
