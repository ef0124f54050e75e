//! Transferring funds between two accounts.
//!
//! A transfer is never stored as its own entity: it is realized as two
//! posted transactions (a debit on the source, a credit on the destination)
//! plus two balance updates.

mod endpoint;
mod page;

pub use endpoint::transfer_funds_endpoint;
pub use page::get_transfer_page;
