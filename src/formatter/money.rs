use crate::formatter::number::{format_number_core, rounds_to_zero};
use crate::types::{CurrencyOptions, Template, TemplateSet};

/// Render one value through the resolved options and templates.
pub(super) fn format_money_core(
    value: f64,
    opts: &CurrencyOptions,
    templates: &TemplateSet,
) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let template = select_template(value, opts.precision, templates);
    // The template carries the sign, so the value renders by magnitude
    let rendered = format_number_core(value.abs(), opts.precision, &opts.thousand, &opts.decimal);
    template.render(&opts.symbol, &rendered)
}

/// Select the template for a value's sign class
///
/// Selection happens after rounding: a value whose magnitude rounds to
/// zero at the resolved precision uses the zero template even when it
/// arrived as -0.0 or as a small negative artifact.
fn select_template(value: f64, precision: usize, templates: &TemplateSet) -> &Template {
    if rounds_to_zero(value, precision) {
        &templates.zero
    } else if value < 0.0 {
        &templates.neg
    } else {
        &templates.pos
    }
}
