//! Money display formatting and amount-input parsing.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// The smallest amount accepted for an opening balance or a transfer.
pub const MINIMUM_AMOUNT: f64 = 0.01;

/// Format an amount as a euro string with exactly two decimal places, e.g.
/// `€1,234.56`.
///
/// Display only: nothing in the application parses these strings back.
pub fn format_money(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("€")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-€")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "€0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// An amount as it arrives from a form input, resolved into one of three
/// cases at the validation boundary.
///
/// Form values are strings; validators should never see the raw string and
/// re-parse it, they receive one of these instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountField {
    /// The input was empty or contained only whitespace.
    Blank,
    /// The input was not parseable as a finite number.
    NotANumber,
    /// The parsed amount.
    Amount(f64),
}

impl AmountField {
    /// Classify a raw form input.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return AmountField::Blank;
        }

        match trimmed.parse::<f64>() {
            Ok(amount) if amount.is_finite() => AmountField::Amount(amount),
            _ => AmountField::NotANumber,
        }
    }
}
