//! Defines the endpoint for creating a new account.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState,
    account::{Account, create_page::new_account_form_view},
    api::{Backend, accounts_request, create_account_request},
    endpoints,
    html::render,
    money::{AmountField, MINIMUM_AMOUNT, format_money},
};

/// The largest opening balance the form accepts.
pub const MAXIMUM_OPENING_BALANCE: f64 = 1000.00;

/// The state needed to create an account.
#[derive(Debug, Clone)]
pub struct CreateAccountState {
    /// The backend holding the accounts.
    pub backend: Backend,
}

impl FromRef<AppState> for CreateAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

/// The form data for creating an account.
///
/// The balance is kept as the raw string the user typed; it is classified at
/// the validation boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccountForm {
    /// The proposed account name.
    pub name: String,
    /// The proposed opening balance, as typed.
    pub balance: String,
}

/// The outcome of validating an account-creation request.
///
/// The two messages are independent: a bad name and a bad balance are both
/// reported in one round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAccountValidation {
    /// Message for the name field.
    pub name_message: Option<String>,
    /// Message for the opening-balance field.
    pub balance_message: Option<String>,
}

impl NewAccountValidation {
    /// Whether the request passed validation.
    pub fn is_valid(&self) -> bool {
        self.name_message.is_none() && self.balance_message.is_none()
    }
}

const NAME_REQUIRED_MSG: &str = "Le nom du compte est obligatoire.";
const BALANCE_REQUIRED_MSG: &str = "Le solde de départ est obligatoire.";
const BALANCE_NAN_MSG: &str = "Le solde doit être un nombre.";

/// Check a proposed account against the current account list.
///
/// `existing_accounts` is a snapshot read at call time and passed in, so the
/// rules stay pure. Names are compared trimmed and case-insensitively.
fn validate_new_account(
    name: &str,
    balance: AmountField,
    existing_accounts: &[Account],
) -> NewAccountValidation {
    let name = name.trim();

    let mut name_message = None;

    if name.is_empty() {
        name_message = Some(NAME_REQUIRED_MSG.to_owned());
    }

    if existing_accounts
        .iter()
        .any(|account| account.name.to_lowercase() == name.to_lowercase())
    {
        name_message = Some(format!("Le compte {name} existe déjà."));
    }

    let balance_message = match balance {
        AmountField::Blank => Some(BALANCE_REQUIRED_MSG.to_owned()),
        AmountField::NotANumber => Some(BALANCE_NAN_MSG.to_owned()),
        AmountField::Amount(amount) if amount < MINIMUM_AMOUNT => Some(format!(
            "Le solde ne peut pas être plus petit que {}.",
            format_money(MINIMUM_AMOUNT)
        )),
        AmountField::Amount(amount) if amount > MAXIMUM_OPENING_BALANCE => Some(format!(
            "C'est une fausse application, mais quand même, pas plus de {}.",
            format_money(MAXIMUM_OPENING_BALANCE)
        )),
        AmountField::Amount(_) => None,
    };

    NewAccountValidation {
        name_message,
        balance_message,
    }
}

/// A route handler for creating a new account, redirects to the accounts view
/// on success.
///
/// Reads the current account list from the backend, validates the form
/// against it, and only then submits the creation call. The new account is
/// not added to any local state: the accounts page re-reads the backend.
pub async fn create_account_endpoint(
    State(state): State<CreateAccountState>,
    Form(form): Form<NewAccountForm>,
) -> Response {
    let accounts: Vec<Account> = match state.backend.fetch(accounts_request()).await {
        Ok(accounts) => accounts,
        Err(error) => {
            tracing::error!("could not fetch the account list: {error}");
            return error.into_alert_response();
        }
    };

    let balance = AmountField::parse(&form.balance);
    let validation = validate_new_account(&form.name, balance, &accounts);

    let AmountField::Amount(balance) = balance else {
        return render(
            StatusCode::OK,
            new_account_form_view(&form.name, &form.balance, &validation),
        );
    };

    if !validation.is_valid() {
        return render(
            StatusCode::OK,
            new_account_form_view(&form.name, &form.balance, &validation),
        );
    }

    let name = form.name.trim();

    match state.backend.send(create_account_request(name, balance)).await {
        Ok(_) => (
            HxRedirect(endpoints::ACCOUNTS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not create account {name:?}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod validate_new_account_tests {
    use crate::{account::Account, money::AmountField};

    use super::{
        BALANCE_NAN_MSG, BALANCE_REQUIRED_MSG, NAME_REQUIRED_MSG, validate_new_account,
    };

    fn existing_accounts() -> Vec<Account> {
        vec![Account {
            id: 1,
            name: "Compte courant".to_owned(),
            balance: 100.0,
        }]
    }

    fn validate(name: &str, balance: &str) -> super::NewAccountValidation {
        validate_new_account(name, AmountField::parse(balance), &existing_accounts())
    }

    #[test]
    fn accepts_a_new_account() {
        let validation = validate("Livret A", "500");

        assert!(validation.is_valid());
        assert_eq!(validation.name_message, None);
        assert_eq!(validation.balance_message, None);
    }

    #[test]
    fn name_is_required() {
        let validation = validate("", "500");

        assert!(!validation.is_valid());
        assert_eq!(validation.name_message.as_deref(), Some(NAME_REQUIRED_MSG));
    }

    #[test]
    fn whitespace_name_counts_as_missing() {
        let validation = validate("   ", "500");

        assert_eq!(validation.name_message.as_deref(), Some(NAME_REQUIRED_MSG));
    }

    #[test]
    fn name_collision_is_case_insensitive() {
        let validation = validate("COMPTE COURANT", "500");

        assert!(!validation.is_valid());
        assert_eq!(
            validation.name_message.as_deref(),
            Some("Le compte COMPTE COURANT existe déjà.")
        );
    }

    #[test]
    fn blank_balance_is_required() {
        let validation = validate("Livret A", "   ");

        assert!(!validation.is_valid());
        assert_eq!(
            validation.balance_message.as_deref(),
            Some(BALANCE_REQUIRED_MSG)
        );
    }

    #[test]
    fn balance_must_be_a_number() {
        let validation = validate("Livret A", "abc");

        assert_eq!(validation.balance_message.as_deref(), Some(BALANCE_NAN_MSG));
    }

    #[test]
    fn balance_below_minimum() {
        for balance in ["0", "0.009"] {
            let validation = validate("Livret A", balance);

            assert_eq!(
                validation.balance_message.as_deref(),
                Some("Le solde ne peut pas être plus petit que €0.01."),
                "balance {balance} should be below the minimum"
            );
        }
    }

    #[test]
    fn balance_above_maximum() {
        let validation = validate("Livret A", "1000.01");

        assert_eq!(
            validation.balance_message.as_deref(),
            Some("C'est une fausse application, mais quand même, pas plus de €1,000.00.")
        );
    }

    #[test]
    fn balance_at_the_bounds_is_accepted() {
        assert!(validate("Livret A", "0.01").is_valid());
        assert!(validate("Livret A", "1000").is_valid());
    }

    #[test]
    fn both_fields_can_be_invalid_at_once() {
        let validation = validate("", "abc");

        assert!(!validation.is_valid());
        assert!(validation.name_message.is_some());
        assert!(validation.balance_message.is_some());
    }

    #[test]
    fn validation_is_idempotent() {
        assert_eq!(validate("", "abc"), validate("", "abc"));
    }
}
