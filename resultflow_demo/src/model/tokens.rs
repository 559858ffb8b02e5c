//! Splitting and parsing of numeric input.
use resultflow::Result;

use crate::error::DemoError;
use crate::result::DemoResult;

/// Splits text on commas and whitespace, dropping empty pieces.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Parses one integer token.
pub fn parse_number(token: &str) -> DemoResult<i64> {
    match token.parse::<i64>() {
        Ok(number) => Result::val(number),
        Err(source) => Result::err(DemoError::InvalidNumber {
            token: token.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_spaces_and_lines() {
        assert_eq!(split_tokens("1, 2\n3\t4,,5\r\n"), vec!["1", "2", "3", "4", "5"]);
        assert!(split_tokens(" \n, ").is_empty());
    }

    #[test]
    fn parses_signed_integers() {
        assert_eq!(parse_number("-12").into_value(), Some(-12));
    }

    #[test]
    fn rejects_garbage_with_the_token() {
        let res = parse_number("1x");
        let message = res.into_error().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.starts_with("Invalid number \"1x\""), "{message}");
    }
}
