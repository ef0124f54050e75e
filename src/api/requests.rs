//! Builders for every call the client makes against the backend.
//!
//! These are pure: they map already-validated input onto an [ApiCall] and
//! never talk to the network themselves.

use reqwest::Method;
use serde_json::json;
use time::format_description::well_known::Rfc3339;

use crate::{
    account::AccountId,
    api::{ApiCall, Lifecycle},
    transaction::Transaction,
};

/// The backend collection holding accounts.
pub(crate) const ACCOUNTS_ENDPOINT: &str = "/accounts";
/// The backend collection holding transactions.
pub(crate) const TRANSACTIONS_ENDPOINT: &str = "/transactions";

/// Fetch all accounts.
pub(crate) fn accounts_request() -> ApiCall {
    ApiCall {
        method: Method::GET,
        endpoint: ACCOUNTS_ENDPOINT.to_owned(),
        payload: None,
        lifecycle: Lifecycle {
            requested: "accounts_requested",
            succeeded: "accounts_received",
            failed: "accounts_request_failed",
        },
    }
}

/// Fetch the transactions of one account.
pub(crate) fn transactions_request(account_id: AccountId) -> ApiCall {
    ApiCall {
        method: Method::GET,
        endpoint: format!("{TRANSACTIONS_ENDPOINT}?accountId={account_id}"),
        payload: None,
        lifecycle: Lifecycle {
            requested: "transactions_requested",
            succeeded: "transactions_received",
            failed: "transactions_request_failed",
        },
    }
}

/// Create an account with the given name and opening balance.
///
/// The name must already be trimmed and the balance already validated; this
/// function sends whatever it is given.
pub(crate) fn create_account_request(name: &str, balance: f64) -> ApiCall {
    ApiCall {
        method: Method::POST,
        endpoint: ACCOUNTS_ENDPOINT.to_owned(),
        payload: Some(json!({ "name": name, "balance": balance })),
        lifecycle: Lifecycle {
            requested: "create_account_requested",
            succeeded: "create_account_succeeded",
            failed: "create_account_failed",
        },
    }
}

/// Post a transaction to an account's ledger.
pub(crate) fn create_transaction_request(transaction: &Transaction) -> ApiCall {
    let date = transaction
        .date
        .format(&Rfc3339)
        .unwrap_or_else(|_| transaction.date.to_string());

    ApiCall {
        method: Method::POST,
        endpoint: TRANSACTIONS_ENDPOINT.to_owned(),
        payload: Some(json!({
            "date": date,
            "description": transaction.description,
            "debit": transaction.debit,
            "credit": transaction.credit,
            "accountId": transaction.account_id,
        })),
        lifecycle: Lifecycle {
            requested: "create_transaction_requested",
            succeeded: "create_transaction_succeeded",
            failed: "create_transaction_failed",
        },
    }
}

/// Replace an account's balance with `new_balance`.
pub(crate) fn update_balance_request(account_id: AccountId, new_balance: f64) -> ApiCall {
    ApiCall {
        method: Method::PATCH,
        endpoint: format!("{ACCOUNTS_ENDPOINT}/{account_id}"),
        payload: Some(json!({ "balance": new_balance })),
        lifecycle: Lifecycle {
            requested: "update_balance_requested",
            succeeded: "update_balance_succeeded",
            failed: "update_balance_failed",
        },
    }
}

#[cfg(test)]
mod request_builder_tests {
    use reqwest::Method;
    use serde_json::json;
    use time::macros::datetime;

    use crate::transaction::Transaction;

    use super::{
        accounts_request, create_account_request, create_transaction_request,
        transactions_request, update_balance_request,
    };

    #[test]
    fn accounts_request_shape() {
        let call = accounts_request();

        assert_eq!(call.method, Method::GET);
        assert_eq!(call.endpoint, "/accounts");
        assert_eq!(call.payload, None);
        assert_eq!(call.lifecycle.requested, "accounts_requested");
        assert_eq!(call.lifecycle.succeeded, "accounts_received");
        assert_eq!(call.lifecycle.failed, "accounts_request_failed");
    }

    #[test]
    fn transactions_request_filters_by_account() {
        let call = transactions_request(42);

        assert_eq!(call.method, Method::GET);
        assert_eq!(call.endpoint, "/transactions?accountId=42");
        assert_eq!(call.payload, None);
    }

    #[test]
    fn create_account_request_shape() {
        let call = create_account_request("Livret A", 500.0);

        assert_eq!(call.method, Method::POST);
        assert_eq!(call.endpoint, "/accounts");
        assert_eq!(
            call.payload,
            Some(json!({ "name": "Livret A", "balance": 500.0 }))
        );
    }

    #[test]
    fn create_transaction_request_shape() {
        let transaction = Transaction {
            date: datetime!(2026-03-01 09:30:00 UTC),
            description: "Transfer to Livret A".to_owned(),
            debit: Some(25.0),
            credit: None,
            account_id: 7,
        };

        let call = create_transaction_request(&transaction);

        assert_eq!(call.method, Method::POST);
        assert_eq!(call.endpoint, "/transactions");
        assert_eq!(
            call.payload,
            Some(json!({
                "date": "2026-03-01T09:30:00Z",
                "description": "Transfer to Livret A",
                "debit": 25.0,
                "credit": null,
                "accountId": 7,
            }))
        );
    }

    #[test]
    fn update_balance_request_shape() {
        let call = update_balance_request(7, 475.0);

        assert_eq!(call.method, Method::PATCH);
        assert_eq!(call.endpoint, "/accounts/7");
        assert_eq!(call.payload, Some(json!({ "balance": 475.0 })));
    }

    #[test]
    fn builders_are_pure() {
        assert_eq!(accounts_request(), accounts_request());
        assert_eq!(transactions_request(3), transactions_request(3));
        assert_eq!(
            create_account_request("Compte courant", 20.0),
            create_account_request("Compte courant", 20.0)
        );
    }
}
