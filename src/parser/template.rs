use winnow::Parser;
use winnow::combinator::repeat;

use crate::parser::tokens::parse_single_token;
use crate::types::{FormatSpec, Template, TemplateSet, TemplateToken};

/// Parse a money template string
///
/// This is the template entry point of this module. It accepts a pattern
/// string and returns the parsed Template structure.
///
/// A usable template must contain exactly one `%v` (value placeholder)
/// and exactly one `%s` (symbol placeholder); every other character is
/// kept as a literal.
///
/// # Arguments
/// * `input_str` - The pattern string to parse
///
/// # Returns
/// * `Result<Template, String>` - The parsing result, or an error message
///
/// # Examples
/// ```
/// use money_format::parser::parse_template;
///
/// let result = parse_template("%s %v").unwrap();
/// assert_eq!(result.tokens.len(), 3);
/// ```
pub fn parse_template(input_str: &str) -> Result<Template, String> {
    let mut input = input_str;

    let tokens: Vec<TemplateToken> = repeat(0.., parse_single_token)
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} at remaining input '{input}'"))?;

    if !input.is_empty() {
        return Err(format!("Trailing characters: '{input}'"));
    }

    let template = Template { tokens };
    let (symbols, values) = template.placeholder_counts();
    if values != 1 {
        return Err(format!(
            "Pattern '{input_str}' must contain exactly one %v, found {values}"
        ));
    }
    if symbols != 1 {
        return Err(format!(
            "Pattern '{input_str}' must contain exactly one %s, found {symbols}"
        ));
    }

    Ok(template)
}

/// Normalize a format spec into sign-dependent templates
///
/// A single pattern is reused for the positive and zero slots, with the
/// negative slot derived from it. Explicit per-sign slots parse
/// independently. Malformed patterns never fail the call: each unusable
/// slot falls back to the built-in pattern for that slot.
pub fn check_currency_format(spec: &FormatSpec) -> TemplateSet {
    let fallback = TemplateSet::default();

    match spec {
        FormatSpec::Pattern(pattern) => match parse_template(pattern) {
            Ok(template) => TemplateSet {
                neg: negate_template(&template),
                zero: template.clone(),
                pos: template,
            },
            Err(_) => fallback,
        },
        FormatSpec::Signed { pos, neg, zero } => {
            let slot = |pattern: &Option<String>, default: Template| -> Template {
                pattern
                    .as_deref()
                    .and_then(|p| parse_template(p).ok())
                    .unwrap_or(default)
            };
            TemplateSet {
                pos: slot(pos, fallback.pos),
                neg: slot(neg, fallback.neg),
                zero: slot(zero, fallback.zero),
            }
        }
    }
}

/// Derive the negative template from a shared pattern: the first literal
/// `-` already in the pattern is dropped, then one is placed directly
/// before the value placeholder.
fn negate_template(template: &Template) -> Template {
    let mut tokens = template.tokens.clone();

    if let Some(idx) = tokens
        .iter()
        .position(|t| matches!(t, TemplateToken::LiteralChar('-')))
    {
        tokens.remove(idx);
    }

    if let Some(idx) = tokens.iter().position(|t| matches!(t, TemplateToken::Value)) {
        tokens.insert(idx, TemplateToken::LiteralChar('-'));
    }

    Template { tokens }
}
