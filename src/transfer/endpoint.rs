//! Validation and orchestration of a transfer.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    account::{Account, AccountId},
    api::{
        ApiCall, Backend, accounts_request, create_transaction_request, update_balance_request,
    },
    endpoints,
    html::render,
    money::{AmountField, MINIMUM_AMOUNT, format_money},
    transaction::Transaction,
    transfer::page::transfer_form_view,
};

/// The state needed to run a transfer.
#[derive(Debug, Clone)]
pub struct TransferState {
    /// The backend holding the accounts and their ledgers.
    pub backend: Backend,
}

impl FromRef<AppState> for TransferState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

/// The form data for a transfer.
///
/// The selects post the chosen account id as a string, or an empty string
/// when the placeholder is still selected; the amount is the raw input.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferForm {
    /// The selected source account id, as posted.
    pub from_account: String,
    /// The selected destination account id, as posted.
    pub to_account: String,
    /// The amount to transfer, as typed.
    pub amount: String,
}

/// The outcome of validating a transfer request.
///
/// The three messages are independently settable; the request is valid
/// exactly when all are absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferValidation {
    /// Message for the source-account field.
    pub from_message: Option<String>,
    /// Message for the destination-account field.
    pub to_message: Option<String>,
    /// Message for the amount field.
    pub amount_message: Option<String>,
}

impl TransferValidation {
    /// Whether the request passed validation.
    pub fn is_valid(&self) -> bool {
        self.from_message.is_none() && self.to_message.is_none() && self.amount_message.is_none()
    }
}

const FROM_REQUIRED_MSG: &str = "Le compte source est obligatoire.";
const TO_REQUIRED_MSG: &str = "Le compte destination est obligatoire.";
const AMOUNT_REQUIRED_MSG: &str = "Le montant est obligatoire.";
const AMOUNT_NAN_MSG: &str = "Le montant doit être un nombre.";
const SAME_ACCOUNT_MSG: &str = "Vous ne pouvez pas faire un transfert vers le même compte.";

/// Check a proposed transfer.
///
/// The same-account rule runs only once everything else passed, so a
/// same-account transfer that also lacks funds reports insufficient funds.
/// The amount checks still run when the source is missing; the
/// insufficient-funds rule alone needs the source balance and is skipped
/// without one.
fn validate_transfer(
    source: Option<&Account>,
    destination: Option<&Account>,
    amount: AmountField,
) -> TransferValidation {
    let from_message = source.is_none().then(|| FROM_REQUIRED_MSG.to_owned());
    let to_message = destination.is_none().then(|| TO_REQUIRED_MSG.to_owned());

    let amount_message = match amount {
        AmountField::Blank => Some(AMOUNT_REQUIRED_MSG.to_owned()),
        AmountField::NotANumber => Some(AMOUNT_NAN_MSG.to_owned()),
        AmountField::Amount(amount) if amount < MINIMUM_AMOUNT => Some(format!(
            "Le montant ne peut pas être inférieur à {}.",
            format_money(MINIMUM_AMOUNT)
        )),
        AmountField::Amount(amount) => match source {
            Some(source) if amount > source.balance => Some(format!(
                "Solde insuffisant dans le compte {}. Le montant maximum est {}.",
                source.name,
                format_money(source.balance)
            )),
            _ => None,
        },
    };

    let mut result = TransferValidation {
        from_message,
        to_message,
        amount_message,
    };

    if result.is_valid() {
        if let (Some(source), Some(destination)) = (source, destination) {
            if destination.id == source.id {
                result.to_message = Some(SAME_ACCOUNT_MSG.to_owned());
            }
        }
    }

    result
}

/// Resolve a posted select value against the accounts snapshot.
fn selected_account<'a>(accounts: &'a [Account], raw_id: &str) -> Option<&'a Account> {
    let id: AccountId = raw_id.trim().parse().ok()?;

    accounts.iter().find(|account| account.id == id)
}

/// One backend call of the transfer sequence, paired with the call that
/// undoes it.
struct TransferStep {
    call: ApiCall,
    compensation: ApiCall,
}

/// The four calls of a transfer, in the order they must be issued: debit
/// entry on the source, source balance update, credit entry on the
/// destination, destination balance update.
fn transfer_steps(
    source: &Account,
    destination: &Account,
    amount: f64,
    date: OffsetDateTime,
) -> Vec<TransferStep> {
    let debit_entry = Transaction {
        date,
        description: format!("Transfer to {}", destination.name),
        debit: Some(amount),
        credit: None,
        account_id: source.id,
    };
    let debit_reversal = Transaction {
        date,
        description: format!("Reversal: Transfer to {}", destination.name),
        debit: None,
        credit: Some(amount),
        account_id: source.id,
    };
    let credit_entry = Transaction {
        date,
        description: format!("Transfer from {}", source.name),
        debit: None,
        credit: Some(amount),
        account_id: destination.id,
    };
    let credit_reversal = Transaction {
        date,
        description: format!("Reversal: Transfer from {}", source.name),
        debit: Some(amount),
        credit: None,
        account_id: destination.id,
    };

    vec![
        TransferStep {
            call: create_transaction_request(&debit_entry),
            compensation: create_transaction_request(&debit_reversal),
        },
        TransferStep {
            call: update_balance_request(source.id, source.balance - amount),
            compensation: update_balance_request(source.id, source.balance),
        },
        TransferStep {
            call: create_transaction_request(&credit_entry),
            compensation: create_transaction_request(&credit_reversal),
        },
        TransferStep {
            call: update_balance_request(destination.id, destination.balance + amount),
            compensation: update_balance_request(destination.id, destination.balance),
        },
    ]
}

/// Issue the transfer calls in order, awaiting each one.
///
/// On the first failure the already-completed steps are undone in reverse
/// order and the original failure is returned. A compensation that fails
/// itself is logged; there is nothing further to fall back to.
async fn run_transfer(
    backend: &Backend,
    source: &Account,
    destination: &Account,
    amount: f64,
) -> Result<(), Error> {
    let steps = transfer_steps(source, destination, amount, OffsetDateTime::now_utc());
    let mut completed: Vec<ApiCall> = Vec::with_capacity(steps.len());

    for step in steps {
        match backend.send(step.call).await {
            Ok(_) => completed.push(step.compensation),
            Err(error) => {
                tracing::error!(
                    "transfer from {} to {} failed after {} completed step(s): {error}",
                    source.name,
                    destination.name,
                    completed.len()
                );
                compensate(backend, completed).await;
                return Err(error);
            }
        }
    }

    Ok(())
}

async fn compensate(backend: &Backend, completed: Vec<ApiCall>) {
    for call in completed.into_iter().rev() {
        let endpoint = call.endpoint.clone();

        if let Err(error) = backend.send(call).await {
            tracing::error!("could not undo completed transfer step {endpoint}: {error}");
        }
    }
}

/// A route handler for transferring funds, redirects to the accounts view on
/// success.
///
/// Reads a fresh accounts snapshot, validates the form against it, then runs
/// the four-call sequence. Redirecting away from the form page on success is
/// what dismisses it.
pub async fn transfer_funds_endpoint(
    State(state): State<TransferState>,
    Form(form): Form<TransferForm>,
) -> Response {
    let accounts: Vec<Account> = match state.backend.fetch(accounts_request()).await {
        Ok(accounts) => accounts,
        Err(error) => {
            tracing::error!("could not fetch the account list: {error}");
            return error.into_alert_response();
        }
    };

    let source = selected_account(&accounts, &form.from_account);
    let destination = selected_account(&accounts, &form.to_account);
    let amount = AmountField::parse(&form.amount);
    let validation = validate_transfer(source, destination, amount);

    let (Some(source), Some(destination), AmountField::Amount(amount)) =
        (source, destination, amount)
    else {
        return render(
            StatusCode::OK,
            transfer_form_view(
                &accounts,
                &form.from_account,
                &form.to_account,
                &form.amount,
                &validation,
            ),
        );
    };

    if !validation.is_valid() {
        return render(
            StatusCode::OK,
            transfer_form_view(
                &accounts,
                &form.from_account,
                &form.to_account,
                &form.amount,
                &validation,
            ),
        );
    }

    match run_transfer(&state.backend, source, destination, amount).await {
        Ok(()) => (
            HxRedirect(endpoints::ACCOUNTS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod validate_transfer_tests {
    use crate::{account::Account, money::AmountField};

    use super::{
        AMOUNT_NAN_MSG, AMOUNT_REQUIRED_MSG, FROM_REQUIRED_MSG, SAME_ACCOUNT_MSG,
        TO_REQUIRED_MSG, TransferValidation, validate_transfer,
    };

    fn source() -> Account {
        Account {
            id: 1,
            name: "Compte courant".to_owned(),
            balance: 100.0,
        }
    }

    fn destination() -> Account {
        Account {
            id: 2,
            name: "Livret A".to_owned(),
            balance: 50.0,
        }
    }

    fn validate(
        source: Option<&Account>,
        destination: Option<&Account>,
        amount: &str,
    ) -> TransferValidation {
        validate_transfer(source, destination, AmountField::parse(amount))
    }

    #[test]
    fn accepts_a_valid_transfer() {
        let validation = validate(Some(&source()), Some(&destination()), "25");

        assert!(validation.is_valid());
    }

    #[test]
    fn source_is_required() {
        let validation = validate(None, Some(&destination()), "25");

        assert!(!validation.is_valid());
        assert_eq!(validation.from_message.as_deref(), Some(FROM_REQUIRED_MSG));
        assert_eq!(validation.to_message, None);
    }

    #[test]
    fn destination_is_required() {
        let validation = validate(Some(&source()), None, "25");

        assert!(!validation.is_valid());
        assert_eq!(validation.to_message.as_deref(), Some(TO_REQUIRED_MSG));
    }

    #[test]
    fn both_accounts_can_be_missing_at_once() {
        let validation = validate(None, None, "25");

        assert!(validation.from_message.is_some());
        assert!(validation.to_message.is_some());
        assert_eq!(validation.amount_message, None);
    }

    #[test]
    fn blank_amount_is_required() {
        let validation = validate(Some(&source()), Some(&destination()), "  ");

        assert_eq!(
            validation.amount_message.as_deref(),
            Some(AMOUNT_REQUIRED_MSG)
        );
    }

    #[test]
    fn amount_must_be_a_number() {
        let validation = validate(Some(&source()), Some(&destination()), "abc");

        assert_eq!(validation.amount_message.as_deref(), Some(AMOUNT_NAN_MSG));
    }

    #[test]
    fn amount_below_minimum() {
        let validation = validate(Some(&source()), Some(&destination()), "0");

        assert_eq!(
            validation.amount_message.as_deref(),
            Some("Le montant ne peut pas être inférieur à €0.01.")
        );
    }

    #[test]
    fn amount_exceeding_the_source_balance() {
        let validation = validate(Some(&source()), Some(&destination()), "100.01");

        assert_eq!(
            validation.amount_message.as_deref(),
            Some(
                "Solde insuffisant dans le compte Compte courant. \
                Le montant maximum est €100.00."
            )
        );
    }

    #[test]
    fn amount_equal_to_the_source_balance_is_accepted() {
        let validation = validate(Some(&source()), Some(&destination()), "100");

        assert!(validation.is_valid());
    }

    #[test]
    fn same_account_is_rejected_on_the_destination_field() {
        let validation = validate(Some(&source()), Some(&source()), "25");

        assert!(!validation.is_valid());
        assert_eq!(validation.from_message, None);
        assert_eq!(validation.amount_message, None);
        assert_eq!(validation.to_message.as_deref(), Some(SAME_ACCOUNT_MSG));
    }

    // The same-account rule only runs once everything else passed, so an
    // insufficient amount wins over the same-account problem.
    #[test]
    fn insufficient_funds_masks_the_same_account_rule() {
        let validation = validate(Some(&source()), Some(&source()), "1000");

        assert!(!validation.is_valid());
        assert_eq!(validation.to_message, None);
        assert!(validation.amount_message.is_some());
    }

    #[test]
    fn validation_is_idempotent() {
        assert_eq!(
            validate(Some(&source()), Some(&source()), "1000"),
            validate(Some(&source()), Some(&source()), "1000")
        );
    }
}
