use winnow::combinator::alt;
use winnow::error::ErrMode;
use winnow::token::{any, literal};
use winnow::{ModalResult, Parser};

use crate::types::TemplateToken;

/// Currency symbol placeholder (%s)
pub fn parse_symbol_placeholder(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("%s")
        .value(TemplateToken::Symbol)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Formatted value placeholder (%v)
pub fn parse_value_placeholder(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("%v")
        .value(TemplateToken::Value)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Any other character passes through as a literal
pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<TemplateToken> {
    any.map(TemplateToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a single token from a money template string
pub fn parse_single_token(input: &mut &str) -> ModalResult<TemplateToken> {
    alt((
        parse_symbol_placeholder,
        parse_value_placeholder,
        parse_literal_passthrough,
    ))
    .parse_next(input)
}
