//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    account::{create_account_endpoint, get_accounts_page, get_new_account_page},
    endpoints,
    log_in::{get_log_in_page, post_log_in},
    log_out::get_log_out,
    not_found::get_404_not_found,
    transaction::get_transactions_page,
    transfer::{get_transfer_page, transfer_funds_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_log_in_page))
        .route(endpoints::ACCOUNTS_VIEW, get(get_accounts_page))
        .route(endpoints::NEW_ACCOUNT_VIEW, get(get_new_account_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::NEW_TRANSFER_VIEW, get(get_transfer_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(endpoints::CREATE_ACCOUNT_API, post(create_account_endpoint))
        .route(endpoints::TRANSFER_API, post(transfer_funds_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}
