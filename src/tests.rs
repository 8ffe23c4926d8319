use crate::parser::*;
use crate::types::*;

#[test]
fn test_simple_template() {
    let result = parse_template("%s%v").unwrap();
    assert_eq!(
        result.tokens,
        vec![TemplateToken::Symbol, TemplateToken::Value]
    );
}

#[test]
fn test_template_with_literals() {
    let result = parse_template("%s %v USD").unwrap();
    assert_eq!(
        result.tokens,
        vec![
            TemplateToken::Symbol,
            TemplateToken::LiteralChar(' '),
            TemplateToken::Value,
            TemplateToken::LiteralChar(' '),
            TemplateToken::LiteralChar('U'),
            TemplateToken::LiteralChar('S'),
            TemplateToken::LiteralChar('D'),
        ]
    );
}

#[test]
fn test_template_placeholder_validation() {
    assert!(parse_template("%s%v").is_ok());
    assert!(parse_template("%v %s").is_ok());

    assert!(
        parse_template("%s").is_err(),
        "Should fail: missing value placeholder"
    );
    assert!(
        parse_template("%v").is_err(),
        "Should fail: missing symbol placeholder"
    );
    assert!(
        parse_template("%s%v%v").is_err(),
        "Should fail: duplicate value placeholder"
    );
    assert!(
        parse_template("%s%s%v").is_err(),
        "Should fail: duplicate symbol placeholder"
    );
    assert!(parse_template("").is_err(), "Should fail: empty pattern");
}

#[test]
fn test_percent_without_placeholder_is_literal() {
    // A stray % that opens no placeholder passes through as a literal
    let result = parse_template("%s%v %x").unwrap();
    assert_eq!(
        result.tokens[3..],
        vec![TemplateToken::LiteralChar('%'), TemplateToken::LiteralChar('x')][..]
    );
}

#[test]
fn test_single_pattern_derives_negative() {
    let set = check_currency_format(&FormatSpec::Pattern("%s %v".to_string()));
    assert_eq!(set.pos.render("$", "1.00"), "$ 1.00");
    assert_eq!(set.zero.render("$", "0.00"), "$ 0.00");
    // 负数模板由共享模板派生
    assert_eq!(set.neg.render("$", "1.00"), "$ -1.00");
}

#[test]
fn test_negative_derivation_moves_existing_dash() {
    let set = check_currency_format(&FormatSpec::Pattern("- %s%v".to_string()));
    assert_eq!(set.pos.render("$", "1.00"), "- $1.00");
    assert_eq!(set.neg.render("$", "1.00"), " $-1.00");
}

#[test]
fn test_malformed_pattern_falls_back() {
    let set = check_currency_format(&FormatSpec::Pattern("no placeholders".to_string()));
    assert_eq!(set, TemplateSet::default());

    assert_eq!(set.pos.render("$", "1.00"), "$1.00");
    assert_eq!(set.neg.render("$", "1.00"), "-$1.00");
    assert_eq!(set.zero.render("$", "0.00"), "$0.00");
}

#[test]
fn test_signed_slots_fall_back_independently() {
    let set = check_currency_format(&FormatSpec::Signed {
        pos: Some("%s %v".to_string()),
        neg: None,
        zero: Some("%s --".to_string()), // malformed: no %v
    });
    assert_eq!(set.pos.render("$", "1.00"), "$ 1.00");
    assert_eq!(set.neg.render("$", "1.00"), "-$1.00");
    assert_eq!(set.zero.render("$", "0.00"), "$0.00");
}

#[test]
fn test_overrides_resolve() {
    let base = CurrencyOptions::default();
    let overrides = OptionOverrides {
        symbol: Some("£".to_string()),
        precision: Some(0),
        ..Default::default()
    };
    let resolved = overrides.resolve(&base);
    assert_eq!(resolved.symbol, "£");
    assert_eq!(resolved.precision, 0);
    assert_eq!(resolved.thousand, ",");
    assert_eq!(resolved.decimal, ".");
}

#[test]
fn test_empty_string_override_wins() {
    let base = CurrencyOptions::default();
    let overrides = OptionOverrides {
        symbol: Some(String::new()),
        thousand: Some(String::new()),
        ..Default::default()
    };
    let resolved = overrides.resolve(&base);
    assert_eq!(resolved.symbol, "");
    assert_eq!(resolved.thousand, "");
    // unset fields keep the base value
    assert_eq!(resolved.decimal, ".");
}

#[test]
fn test_negative_precision_override_coerces() {
    let base = CurrencyOptions::default();
    let overrides = OptionOverrides {
        precision: Some(-3),
        ..Default::default()
    };
    assert_eq!(overrides.resolve(&base).precision, 3);
}

#[test]
fn test_check_precision() {
    assert_eq!(check_precision(2.0, 2), 2);
    assert_eq!(check_precision(0.0, 2), 0);
    assert_eq!(check_precision(-2.0, 2), 2);
    assert_eq!(check_precision(2.6, 2), 3);
    assert_eq!(check_precision(f64::NAN, 2), 2);
    assert_eq!(check_precision(f64::INFINITY, 4), 4);
}

#[test]
fn test_money_spec_conversions() {
    let base = CurrencyOptions::default();

    let spec: MoneySpec = "€".into();
    assert_eq!(spec.resolve(&base).symbol, "€");

    let spec: MoneySpec = OptionOverrides {
        decimal: Some(",".to_string()),
        ..Default::default()
    }
    .into();
    let resolved = spec.resolve(&base);
    assert_eq!(resolved.decimal, ",");
    assert_eq!(resolved.symbol, "$");
}
