use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::delimited,
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The tag string does not follow the `POS,gram gram,gram` layout.
    Malformed(String),
    /// A grammeme list named a symbol outside the grammeme table.
    UnknownGrammeme(String),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::Malformed(raw) => write!(f, "Malformed tag string: {:?}", raw),
            TagError::UnknownGrammeme(symbol) => write!(f, "Unknown grammeme: {}", symbol),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TagError {}

/// Tag symbols may carry digits (`1per`), hyphens (`ms-f`, `1-Л`) and Cyrillic letters
/// (the parsing service's native vocabulary).
fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ' '
}

fn symbols(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(take_while1(is_separator), take_while1(is_symbol_char))(input)
}

fn wrapped_symbols(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(tag("OpencorporaTag('"), symbols, tag("')"))(input)
}

/// Splits a raw tag string into its symbols, unwrapping `OpencorporaTag('...')`.
pub fn tag_symbols(input: &str) -> Result<Vec<&str>, TagError> {
    let trimmed = input.trim();
    all_consuming(alt((wrapped_symbols, symbols)))(trimmed)
        .map(|(_, symbols)| symbols)
        .map_err(|_| TagError::Malformed(trimmed.to_string()))
}
