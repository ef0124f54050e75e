use serde::Deserialize;
use time::OffsetDateTime;

use crate::account::AccountId;

/// A ledger entry on one account.
///
/// Transactions are immutable once created: the client only ever posts new
/// ones (a transfer posts one per side) and reads them back for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// When the transaction was submitted, as an RFC 3339 timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Free-text description, e.g. `Transfer to Livret A`.
    pub description: String,
    /// The debited amount, absent for credit entries.
    pub debit: Option<f64>,
    /// The credited amount, absent for debit entries.
    pub credit: Option<f64>,
    /// The account this entry belongs to.
    #[serde(rename = "accountId")]
    pub account_id: AccountId,
}
