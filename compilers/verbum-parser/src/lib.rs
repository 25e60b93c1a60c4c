//! Parsers for the command-line inputs of the conjugator: the principal-parts
//! list, the conjugation number and the gloss list.

pub mod parser;
pub mod token;

use thiserror::Error;
use verbum_protocol::{ConjugationId, PrincipalParts};
use crate::parser::{parse_number, split_fields};
use crate::token::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 principal parts, found {found}")]
    TooFewParts { found: usize },

    #[error("principal part {} is empty (bytes {}..{})", .index + 1, .span.start, .span.end)]
    EmptyPart { index: usize, span: Span },

    #[error("conjugation must be a positive whole number, got {0:?}")]
    InvalidConjugation(String),
}

/// Parses `"amo, amare, amavi, amatus"` into [`PrincipalParts`].
///
/// Anything after the fourth part is ignored.
pub fn parse_principal_parts(input: &str) -> Result<PrincipalParts, ParseError> {
    let fields = split_fields(input);
    if fields.len() < 4 {
        return Err(ParseError::TooFewParts { found: fields.len() });
    }
    if fields.len() > 4 {
        log::warn!("ignoring {} principal part(s) after the fourth", fields.len() - 4);
    }

    if let Some((index, field)) = fields.iter().take(4).enumerate().find(|(_, f)| f.text.is_empty()) {
        return Err(ParseError::EmptyPart { index, span: field.span });
    }

    let parts = [fields[0].text, fields[1].text, fields[2].text, fields[3].text].map(String::from);
    // Emptiness was checked above with the span at hand
    PrincipalParts::new(parts).ok_or(ParseError::EmptyPart { index: 0, span: fields[0].span })
}

pub fn parse_conjugation(input: &str) -> Result<ConjugationId, ParseError> {
    match parse_number(input) {
        Some(n) if n > 0 => Ok(ConjugationId::new(n)),
        _ => Err(ParseError::InvalidConjugation(input.to_string())),
    }
}

/// Splits a gloss list on commas. Entries are trimmed; order, duplicates and
/// empty entries are preserved.
pub fn parse_glosses(input: &str) -> Vec<String> {
    split_fields(input).into_iter().map(|f| f.text.to_string()).collect()
}
