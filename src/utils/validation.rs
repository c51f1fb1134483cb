use crate::utils::error::{Result, VaccinationError};
use chrono::NaiveDate;

/// Number of digits in a CPF identifier.
pub const IDENTIFIER_LEN: usize = 11;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Structural CPF check: exactly 11 ASCII digits. No check-digit math.
pub fn validate_identifier(text: &str) -> bool {
    text.len() == IDENTIFIER_LEN && text.bytes().all(|b| b.is_ascii_digit())
}

/// Converts a digit string to its numeric value, left to right.
///
/// Any non-digit character or a value that does not fit in `u64` is reported
/// as an error instead of wrapping.
pub fn parse_identifier(text: &str) -> Result<u64> {
    let mut value: u64 = 0;

    for c in text.chars() {
        let digit = c.to_digit(10).ok_or_else(|| VaccinationError::InvalidIdentifier {
            value: text.to_string(),
            reason: format!("'{}' is not a decimal digit", c),
        })?;

        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| VaccinationError::InvalidIdentifier {
                value: text.to_string(),
                reason: "value does not fit in 64 bits".to_string(),
            })?;
    }

    Ok(value)
}

/// Validates then parses, the order the session uses before enqueueing.
pub fn checked_identifier(text: &str) -> Result<u64> {
    if !validate_identifier(text) {
        return Err(VaccinationError::InvalidIdentifier {
            value: text.to_string(),
            reason: format!("expected exactly {} digits", IDENTIFIER_LEN),
        });
    }
    parse_identifier(text)
}

pub fn parse_session_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        VaccinationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected dd/mm/yyyy: {}", e),
        }
    })
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(VaccinationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VaccinationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("12345678901"));
        assert!(validate_identifier("00000000000"));
        assert!(!validate_identifier(""));
        assert!(!validate_identifier("1234567890"));
        assert!(!validate_identifier("123456789012"));
        assert!(!validate_identifier("1234567890a"));
        assert!(!validate_identifier("123.456.789"));
        assert!(!validate_identifier(" 2345678901"));
    }

    #[test]
    fn test_validate_identifier_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not decimal ASCII
        assert!(!validate_identifier("١٢٣٤٥٦٧٨٩٠١"));
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_identifier("00000000000").unwrap(), 0);
        assert_eq!(parse_identifier("12345678901").unwrap(), 12_345_678_901);
        assert_eq!(parse_identifier("99999999999").unwrap(), 99_999_999_999);
    }

    #[test]
    fn test_parse_identifier_overflow_is_an_error() {
        assert!(parse_identifier("18446744073709551615").is_ok());
        assert!(matches!(
            parse_identifier("18446744073709551616"),
            Err(VaccinationError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_parse_identifier_rejects_non_digits() {
        assert!(parse_identifier("12a").is_err());
    }

    #[test]
    fn test_checked_identifier() {
        assert_eq!(checked_identifier("12345678901").unwrap(), 12_345_678_901);
        assert!(checked_identifier("123").is_err());
    }

    #[test]
    fn test_parse_session_date() {
        let date = parse_session_date("session.date", "05/03/2021").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 5).unwrap());
        assert!(parse_session_date("session.date", "2021-03-05").is_err());
        assert!(parse_session_date("session.date", "31/02/2021").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("session.daily_cap", 15, 1).is_ok());
        assert!(validate_positive_number("session.daily_cap", 0, 1).is_err());
    }
}
