//! Amount parsing and formatting for free-text debit/credit cells.
//!
//! Amount cells hold whatever the user typed. Parsing takes the longest
//! leading numeric prefix (`"12.5 USD"` is `12.5`) and treats anything
//! without one as zero, so partially typed input never breaks the totals.
//! All arithmetic is `Decimal`; money never touches floating point.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses the leading numeric prefix of `input`; blank or non-numeric is zero.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Values outside `Decimal` range are also zero.
#[must_use]
pub fn parse_amount(input: &str) -> Decimal {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = &s[int_start..end];

    let mut frac_digits = "";
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
        end = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Decimal::ZERO;
    }

    let mut exponent = "";
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            exponent = &s[end + 1..exp_end];
        }
    }

    let mut normalized = String::with_capacity(int_digits.len() + frac_digits.len() + 4);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }

    let parsed = if exponent.is_empty() {
        Decimal::from_str(&normalized)
    } else {
        Decimal::from_scientific(&format!("{normalized}e{exponent}"))
    };
    parsed.map(|d| d.normalize()).unwrap_or(Decimal::ZERO)
}

/// Rounds to whole cents, half away from zero.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if both amounts are equal once rounded to cents.
#[must_use]
pub fn cents_equal(a: Decimal, b: Decimal) -> bool {
    round_to_cents(a) == round_to_cents(b)
}

/// Formats an amount with exactly two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_to_cents(amount))
}
