use protscan::core::similarity::CaseMode;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid {expected} value for {key}: '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Unknown case mode '{0}'. Expected 'sensitive' or 'insensitive'.")]
    UnknownCaseMode(String),
}

/// Splits `KEY=VALUE` at the first `=`. Both sides are trimmed; the value may be empty.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_value<T: FromStr>(
    key: &str,
    value: &str,
    expected: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

pub fn parse_case_mode(value: &str) -> Result<CaseMode, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "sensitive" => Ok(CaseMode::Sensitive),
        "insensitive" => Ok(CaseMode::Insensitive),
        _ => Err(ParseError::UnknownCaseMode(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_splits_on_first_separator() {
        assert_eq!(
            parse_key_value("charge.ph=7.0"),
            Ok(("charge.ph", "7.0"))
        );
        assert_eq!(parse_key_value(" a = b=c "), Ok(("a", "b=c")));
        assert_eq!(parse_key_value("a="), Ok(("a", "")));
    }

    #[test]
    fn key_value_rejects_malformed_pairs() {
        assert_eq!(
            parse_key_value("charge.ph"),
            Err(ParseError::MissingSeparator("charge.ph".into()))
        );
        assert_eq!(
            parse_key_value("=7.0"),
            Err(ParseError::EmptyKey("=7.0".into()))
        );
    }

    #[test]
    fn value_parsing_reports_key_and_type() {
        assert_eq!(parse_value::<usize>("k", "42", "integer"), Ok(42));
        let err = parse_value::<f64>("isoelectric.step", "fast", "float").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid float value for isoelectric.step: 'fast'"
        );
    }

    #[test]
    fn case_mode_is_parsed_case_insensitively() {
        assert_eq!(parse_case_mode("Sensitive"), Ok(CaseMode::Sensitive));
        assert_eq!(parse_case_mode("INSENSITIVE"), Ok(CaseMode::Insensitive));
        assert!(matches!(
            parse_case_mode("fuzzy"),
            Err(ParseError::UnknownCaseMode(_))
        ));
    }
}
