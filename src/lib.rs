pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// 导出主要 API
pub use formatter::{format_money, format_money_all, format_number};
pub use parser::{check_currency_format, parse_template, unformat};
pub use types::*;

#[cfg(test)]
mod tests;
