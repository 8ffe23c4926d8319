//! Locale support for currency formatting
//!
//! This module handles loading and managing locale-specific currency
//! defaults (symbol, precision, separators and templates) based on
//! locale identifiers.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::{CurrencyOptions, FormatSpec, check_precision};

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale was not found
    NotFound(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::NotFound(locale) => write!(f, "Locale not found: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Represents a locale manager that provides access to locale-specific
/// currency defaults
pub struct LocaleManager {
    locale_options: HashMap<String, CurrencyOptions>,
}

// Global singleton for locale data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            locale_options: HashMap::new(),
        };

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with an empty map
            eprintln!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let locales_toml = include_str!("locale/currency_locales.toml");
        self.parse_locale_options(locales_toml)
    }

    /// Parse the locale options TOML data
    fn parse_locale_options(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        // First load base options if available
        let base_options = if let Some(base) = table.get("base") {
            Self::parse_locale_option(base, &CurrencyOptions::default())?
        } else {
            CurrencyOptions::default()
        };

        // Now load each locale's options on top of the base
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue; // Already handled
            }

            let options = Self::parse_locale_option(value, &base_options)?;
            self.locale_options.insert(locale_id.to_string(), options);
        }

        Ok(())
    }

    /// Parse a single locale entry from TOML, inheriting from `base`
    fn parse_locale_option(value: &toml::Value, base: &CurrencyOptions) -> Result<CurrencyOptions> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Locale entry is not a table".to_string()))?;

        let mut options = base.clone();

        // Currency symbol
        if let Some(symbol) = table.get("symbol").and_then(|v| v.as_str()) {
            options.symbol = symbol.to_string();
        }

        // Fractional digits
        if let Some(precision) = table.get("precision").and_then(|v| v.as_integer()) {
            options.precision = check_precision(precision as f64, options.precision);
        }

        // Thousands separator
        if let Some(thousand) = table.get("thousand").and_then(|v| v.as_str()) {
            options.thousand = thousand.to_string();
        }

        // Decimal separator
        if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
            options.decimal = decimal.to_string();
        }

        // Template spec: either a single shared pattern or per-sign keys
        if let Some(format) = table.get("format").and_then(|v| v.as_str()) {
            options.format = FormatSpec::Pattern(format.to_string());
        } else {
            let slot = |key: &str| table.get(key).and_then(|v| v.as_str()).map(str::to_string);
            let (pos, neg, zero) = (slot("format_pos"), slot("format_neg"), slot("format_zero"));
            if pos.is_some() || neg.is_some() || zero.is_some() {
                options.format = FormatSpec::Signed { pos, neg, zero };
            }
        }

        Ok(options)
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Get currency defaults by locale identifier (e.g., "en_US", "de_DE")
    fn get_currency_options(&self, locale_id: &str) -> Option<&CurrencyOptions> {
        self.locale_options.get(locale_id)
    }
}

/// Get currency formatting defaults by locale identifier (e.g., "en_US", "de_DE")
pub fn get_currency_options(locale_id: &str) -> Option<CurrencyOptions> {
    LocaleManager::get().get_currency_options(locale_id).cloned()
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::get()
        .locale_options
        .keys()
        .cloned()
        .collect()
}
