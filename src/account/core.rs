use serde::Deserialize;

/// The backend identifier of an account.
pub type AccountId = i64;

/// A bank account as the backend reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The display name, unique case-insensitively among existing accounts.
    pub name: String,
    /// The current balance.
    ///
    /// Only ever changed by posting transactions and balance updates; the
    /// client never writes a balance it did not derive from a fetched one.
    pub balance: f64,
}
