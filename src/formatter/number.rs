/// Core number rendering: round to a fixed precision, group the integer
/// digits and join the fractional part.
pub(super) fn format_number_core(
    value: f64,
    precision: usize,
    thousand: &str,
    decimal: &str,
) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let digits = scaled_digits(value.abs(), precision);
    // A magnitude that rounds to zero drops the sign
    let negative = value < 0.0 && digits.bytes().any(|b| b != b'0');

    let (int_digits, frac_digits) = digits.split_at(digits.len() - precision);

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        result.push('-');
    }
    push_grouped(&mut result, int_digits, thousand);
    if precision > 0 {
        result.push_str(decimal);
        result.push_str(frac_digits);
    }
    result
}

/// Whether the magnitude of `value` rounds to zero at `precision`
/// fractional digits.
pub(super) fn rounds_to_zero(value: f64, precision: usize) -> bool {
    scaled_digits(value.abs(), precision).bytes().all(|b| b == b'0')
}

/// Digits of `magnitude` rounded half away from zero to `precision`
/// fractional places, returned scaled by 10^precision as a plain digit
/// string with at least one integer digit.
///
/// The exponent shift happens on the printed decimal value rather than
/// the binary one, so a tie like 1.005 at precision 2 carries to 1.01.
fn scaled_digits(magnitude: f64, precision: usize) -> String {
    let shifted: f64 = format!("{magnitude}e{precision}").parse().unwrap_or(0.0);
    // A shift past f64 range degrades to zero rather than "inf" digits
    let mut digits = if shifted.is_finite() {
        format!("{:.0}", shifted.round())
    } else {
        "0".to_string()
    };
    while digits.len() <= precision {
        digits.insert(0, '0');
    }
    digits
}

/// Insert `thousand` between groups of three digits, counting from the
/// right.
fn push_grouped(result: &mut String, digits: &str, thousand: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        result.push(c);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push_str(thousand);
        }
    }
}
