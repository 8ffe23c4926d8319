use winnow::ascii::float;
use winnow::{ModalResult, Parser};

/// Extract a numeric value from loosely formatted text
///
/// Accounting-style parentheses around a digit span negate it, grouping
/// separators and any other non-numeric characters are stripped, and the
/// caller's decimal character is mapped to `.` before the leading float
/// prefix is parsed. Unparseable input yields `0.0`; this function never
/// fails.
///
/// # Arguments
/// * `value` - The text to extract a number from
/// * `decimal` - The decimal separator character used in the text
///
/// # Examples
/// ```
/// use money_format::parser::unformat;
///
/// assert_eq!(unformat("$12,345,678.90 USD", '.'), 12345678.9);
/// assert_eq!(unformat("(5,425.50)", '.'), -5425.5);
/// assert_eq!(unformat("1.234,56", ','), 1234.56);
/// assert_eq!(unformat("abc", '.'), 0.0);
/// ```
pub fn unformat(value: &str, decimal: char) -> f64 {
    let mut cleaned = String::with_capacity(value.len() + 1);
    let append = |segment: &str, out: &mut String| {
        for c in segment.chars() {
            if c.is_ascii_digit() || c == '-' {
                out.push(c);
            } else if c == decimal {
                out.push('.');
            }
        }
    };

    match accounting_paren_span(value) {
        Some((open, close)) => {
            append(&value[..open], &mut cleaned);
            cleaned.push('-');
            append(&value[open + 1..close], &mut cleaned);
            append(&value[close + 1..], &mut cleaned);
        }
        None => append(value, &mut cleaned),
    }

    let mut input = cleaned.as_str();
    match parse_float_prefix(&mut input) {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}

/// Parse the leading float prefix of the cleaned text
fn parse_float_prefix(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

/// Byte offsets of an accounting-style negative span: an opening paren
/// directly followed by a digit, closed by the last paren after it.
fn accounting_paren_span(value: &str) -> Option<(usize, usize)> {
    let open = value.find('(')?;
    let inner = &value[open + 1..];
    if !inner.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let close = inner.rfind(')')?;
    Some((open, open + 1 + close))
}
