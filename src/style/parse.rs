//! logos-based lexer and parser for textual style values.
//!
//! Accepted forms:
//!
//! - `12`, `12.5`, `-4` and `12pt` are points
//! - `50%` is a percentage
//! - `auto` and `undefined` (any case) are the keyword units
//!
//! A value list is whitespace separated: `10 20% auto`.

use std::ops::Range;
use std::str::FromStr;

use logos::Logos;

use super::value::StyleValue;

/// Style value token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Percentage: `50%`, `-12.5%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?%")]
    Percent,

    /// Number with a point suffix: `12pt`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?pt")]
    Points,

    /// Bare number: `12`, `-0.5`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Keyword such as `auto` or `undefined`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// Failure to parse a textual style value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unexpected input at position {position}: '{text}'")]
    UnexpectedToken { position: usize, text: String },
    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("expected {expected}, got {found} values")]
    ValueCount { expected: &'static str, found: usize },
}

/// Lex `input` into tokens with their byte spans.
pub fn tokenize(input: &str) -> Result<Vec<(Token, Range<usize>)>, ParseError> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(ParseError::UnexpectedToken {
                position: span.start,
                text: input[span].to_string(),
            }),
        })
        .collect()
}

fn number(text: &str) -> Result<f32, ParseError> {
    text.parse::<f32>()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

fn token_value(token: Token, text: &str) -> Result<StyleValue, ParseError> {
    match token {
        Token::Percent => number(text.trim_end_matches('%')).map(StyleValue::percent),
        Token::Points => number(text.trim_end_matches("pt")).map(StyleValue::point),
        Token::Number => number(text).map(StyleValue::point),
        Token::Ident if text.eq_ignore_ascii_case("auto") => Ok(StyleValue::AUTO),
        Token::Ident if text.eq_ignore_ascii_case("undefined") => Ok(StyleValue::UNDEFINED),
        Token::Ident => Err(ParseError::UnknownKeyword(text.to_string())),
    }
}

/// Parse a whitespace-separated list of values.
pub fn parse_values(input: &str) -> Result<Vec<StyleValue>, ParseError> {
    let values = tokenize(input)?
        .into_iter()
        .map(|(token, span)| token_value(token, &input[span]))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(values)
}

/// Parse exactly one value.
pub fn parse_value(input: &str) -> Result<StyleValue, ParseError> {
    match parse_values(input)?.as_slice() {
        [value] => Ok(*value),
        values => Err(ParseError::ValueCount {
            expected: "exactly one value",
            found: values.len(),
        }),
    }
}

impl FromStr for StyleValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect()
    }

    #[test]
    fn lexes_each_form() {
        assert_eq!(
            tokens("12 12.5pt 50% auto"),
            vec![Token::Number, Token::Points, Token::Percent, Token::Ident]
        );
    }

    #[test]
    fn parses_units() {
        assert_eq!("12".parse::<StyleValue>(), Ok(StyleValue::point(12.0)));
        assert_eq!("12pt".parse::<StyleValue>(), Ok(StyleValue::point(12.0)));
        assert_eq!("-2.5".parse::<StyleValue>(), Ok(StyleValue::point(-2.5)));
        assert_eq!("50%".parse::<StyleValue>(), Ok(StyleValue::percent(50.0)));
        assert_eq!("auto".parse::<StyleValue>(), Ok(StyleValue::AUTO));
        assert_eq!(" Undefined ".parse::<StyleValue>(), Ok(StyleValue::UNDEFINED));
    }

    #[test]
    fn display_parses_back() {
        for value in [
            StyleValue::point(2.5),
            StyleValue::percent(50.0),
            StyleValue::AUTO,
            StyleValue::UNDEFINED,
        ] {
            assert_eq!(value.to_string().parse::<StyleValue>(), Ok(value));
        }
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<StyleValue>(), Err(ParseError::Empty));
        assert_eq!(
            "wide".parse::<StyleValue>(),
            Err(ParseError::UnknownKeyword("wide".into()))
        );
        assert!(matches!(
            "12 % ".parse::<StyleValue>(),
            Err(ParseError::UnexpectedToken { position: 3, .. })
        ));
        assert!(matches!(
            "1 2".parse::<StyleValue>(),
            Err(ParseError::ValueCount { found: 2, .. })
        ));
    }

    #[test]
    fn value_lists() {
        assert_eq!(
            parse_values("10 20% auto").unwrap(),
            vec![StyleValue::point(10.0), StyleValue::percent(20.0), StyleValue::AUTO]
        );
    }
}
