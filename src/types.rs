//! Type definitions for money formatting
//!
//! This module defines the type system used to represent parsed money
//! templates and formatting configuration. Includes template tokens,
//! sign-dependent template sets, format specs and option overrides.

/// Represents a single token parsed from a money template string
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateToken {
    /// Currency symbol placeholder (%s)
    Symbol,
    /// Formatted value placeholder (%v)
    Value,
    /// Literal character to display directly
    LiteralChar(char),
}

/// A parsed money template for one sign class
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    /// Sequence of template tokens
    pub tokens: Vec<TemplateToken>,
}

impl Template {
    /// Counts the symbol and value placeholders in the template
    pub fn placeholder_counts(&self) -> (usize, usize) {
        let symbols = self
            .tokens
            .iter()
            .filter(|t| matches!(t, TemplateToken::Symbol))
            .count();
        let values = self
            .tokens
            .iter()
            .filter(|t| matches!(t, TemplateToken::Value))
            .count();
        (symbols, values)
    }

    /// Render the template, substituting the currency symbol and the
    /// already-formatted value string for their placeholders.
    pub fn render(&self, symbol: &str, value: &str) -> String {
        let mut result = String::with_capacity(self.tokens.len() + symbol.len() + value.len());
        for token in &self.tokens {
            match token {
                TemplateToken::Symbol => result.push_str(symbol),
                TemplateToken::Value => result.push_str(value),
                TemplateToken::LiteralChar(c) => result.push(*c),
            }
        }
        result
    }
}

/// Sign-dependent templates, derived once per formatting call
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    /// Template for values greater than zero
    pub pos: Template,
    /// Template for values less than zero
    pub neg: Template,
    /// Template for values equal to zero
    pub zero: Template,
}

impl Default for TemplateSet {
    /// The built-in triple: pos `%s%v`, neg `-%s%v`, zero `%s%v`
    fn default() -> Self {
        let plain = Template {
            tokens: vec![TemplateToken::Symbol, TemplateToken::Value],
        };
        let negative = Template {
            tokens: vec![
                TemplateToken::LiteralChar('-'),
                TemplateToken::Symbol,
                TemplateToken::Value,
            ],
        };
        Self {
            pos: plain.clone(),
            neg: negative,
            zero: plain,
        }
    }
}

/// How the `format` option was specified
#[derive(Debug, Clone, PartialEq)]
pub enum FormatSpec {
    /// A single pattern reused for every sign class; the negative
    /// pattern is derived by moving a leading `-` in front of `%v`
    Pattern(String),
    /// Explicit per-sign patterns; a missing slot uses the built-in
    /// pattern for that slot
    Signed {
        /// Pattern for values greater than zero
        pos: Option<String>,
        /// Pattern for values less than zero
        neg: Option<String>,
        /// Pattern for values equal to zero
        zero: Option<String>,
    },
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec::Signed {
            pos: Some("%s%v".to_string()),
            neg: Some("-%s%v".to_string()),
            zero: Some("%s%v".to_string()),
        }
    }
}

/// Resolved formatting configuration; every field holds a concrete value
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyOptions {
    /// Currency symbol substituted for `%s`
    pub symbol: String,
    /// Number of fractional digits to keep
    pub precision: usize,
    /// Separator inserted between groups of three integer digits
    pub thousand: String,
    /// Separator between the integer and fractional part
    pub decimal: String,
    /// Sign-dependent template specification
    pub format: FormatSpec,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            precision: 2,
            thousand: ",".to_string(),
            decimal: ".".to_string(),
            format: FormatSpec::default(),
        }
    }
}

impl CurrencyOptions {
    /// Replace the symbol, keeping every other field
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Replace the precision, keeping every other field
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Replace the separators, keeping every other field
    pub fn with_separators(
        mut self,
        thousand: impl Into<String>,
        decimal: impl Into<String>,
    ) -> Self {
        self.thousand = thousand.into();
        self.decimal = decimal.into();
        self
    }
}

/// Partial overrides applied on top of base options. A field wins only
/// when it is set; `None` keeps the base value. An empty string is a
/// set field, not an absent one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    /// Currency symbol override
    pub symbol: Option<String>,
    /// Precision override, sanitized through [`check_precision`]
    pub precision: Option<i32>,
    /// Grouping separator override
    pub thousand: Option<String>,
    /// Decimal separator override
    pub decimal: Option<String>,
    /// Template specification override
    pub format: Option<FormatSpec>,
}

impl OptionOverrides {
    /// Shallow-merge onto `base`: set fields win, unset fields keep the
    /// base value.
    pub fn resolve(&self, base: &CurrencyOptions) -> CurrencyOptions {
        CurrencyOptions {
            symbol: self.symbol.clone().unwrap_or_else(|| base.symbol.clone()),
            precision: self.precision.map_or(base.precision, |p| {
                check_precision(f64::from(p), base.precision)
            }),
            thousand: self
                .thousand
                .clone()
                .unwrap_or_else(|| base.thousand.clone()),
            decimal: self
                .decimal
                .clone()
                .unwrap_or_else(|| base.decimal.clone()),
            format: self.format.clone().unwrap_or_else(|| base.format.clone()),
        }
    }
}

/// Per-call customization for `format_money`: either a bare currency
/// symbol or a structured set of overrides
#[derive(Debug, Clone, PartialEq)]
pub enum MoneySpec {
    /// Only the symbol differs from the base options
    Symbol(String),
    /// Structured overrides for any subset of the options
    Options(OptionOverrides),
}

impl MoneySpec {
    /// Normalize into concrete options against `base`
    pub fn resolve(&self, base: &CurrencyOptions) -> CurrencyOptions {
        match self {
            MoneySpec::Symbol(symbol) => CurrencyOptions {
                symbol: symbol.clone(),
                ..base.clone()
            },
            MoneySpec::Options(overrides) => overrides.resolve(base),
        }
    }
}

impl From<&str> for MoneySpec {
    fn from(symbol: &str) -> Self {
        MoneySpec::Symbol(symbol.to_string())
    }
}

impl From<String> for MoneySpec {
    fn from(symbol: String) -> Self {
        MoneySpec::Symbol(symbol)
    }
}

impl From<OptionOverrides> for MoneySpec {
    fn from(overrides: OptionOverrides) -> Self {
        MoneySpec::Options(overrides)
    }
}

/// Coerce a requested precision to a usable digit count, falling back
/// to `fallback` on non-finite input. Negative and fractional values
/// coerce by rounded magnitude.
pub fn check_precision(value: f64, fallback: usize) -> usize {
    if value.is_finite() {
        value.abs().round() as usize
    } else {
        fallback
    }
}
