//! Money and number formatting module
//!
//! This module is responsible for rendering numeric values into grouped,
//! fixed-precision strings and sign-aware currency strings.
//! The main entry points are the `format_number` and `format_money` functions.

mod money;
mod number;

use crate::parser::check_currency_format;
use crate::types::{CurrencyOptions, MoneySpec};

/// Format a number into a grouped, fixed-precision plain string
///
/// The value is rounded half away from zero to `precision` fractional
/// digits, the integer part is grouped every three digits with
/// `thousand`, and the fractional part is joined with `decimal` when
/// `precision > 0`. Non-finite input renders as zero; this function
/// never fails.
///
/// # Arguments
/// * `value` - The numeric value to format
/// * `precision` - Number of fractional digits to keep
/// * `thousand` - Grouping separator for the integer part
/// * `decimal` - Separator between integer and fractional part
///
/// # Returns
/// * `String` - The formatted number string
///
/// # Examples
/// ```
/// use money_format::format_number;
///
/// assert_eq!(format_number(1234567.0, 2, ",", "."), "1,234,567.00");
/// assert_eq!(format_number(1234.5, 2, ".", ","), "1.234,50");
/// ```
pub fn format_number(value: f64, precision: usize, thousand: &str, decimal: &str) -> String {
    number::format_number_core(value, precision, thousand, decimal)
}

/// Format a single value as currency
///
/// The per-call spec is merged onto `base` (set fields win, unset fields
/// keep the base value), the format spec is normalized into a
/// sign-dependent template set, and the value is rendered through the
/// template matching its sign after rounding.
///
/// # Arguments
/// * `value` - The numeric value to format
/// * `spec` - A bare currency symbol or structured overrides
/// * `base` - The configuration the spec is merged onto
///
/// # Returns
/// * `String` - The value formatted as money
///
/// # Examples
/// ```
/// use money_format::types::CurrencyOptions;
/// use money_format::format_money;
///
/// let base = CurrencyOptions::default();
/// assert_eq!(format_money(-1234.5, &"$".into(), &base), "-$1,234.50");
/// ```
pub fn format_money(value: f64, spec: &MoneySpec, base: &CurrencyOptions) -> String {
    let opts = spec.resolve(base);
    let templates = check_currency_format(&opts.format);
    money::format_money_core(value, &opts, &templates)
}

/// Format a batch of values with one shared configuration
///
/// The options and templates are resolved exactly once, so every element
/// of the batch sees the same snapshot. The result preserves input order
/// and length.
///
/// # Examples
/// ```
/// use money_format::types::CurrencyOptions;
/// use money_format::format_money_all;
///
/// let base = CurrencyOptions::default();
/// let rows = format_money_all(&[123.5, 0.0, -41.25], &"$".into(), &base);
/// assert_eq!(rows, vec!["$123.50", "$0.00", "-$41.25"]);
/// ```
pub fn format_money_all(values: &[f64], spec: &MoneySpec, base: &CurrencyOptions) -> Vec<String> {
    let opts = spec.resolve(base);
    let templates = check_currency_format(&opts.format);
    values
        .iter()
        .map(|&value| money::format_money_core(value, &opts, &templates))
        .collect()
}
