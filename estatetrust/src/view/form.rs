use displaydoc::Display;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Minimum length of a password in the login and registration forms.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A client-side validation failure of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error)]
pub enum FieldError {
    /// {field} is required
    Required { field: &'static str },
    /// {field} must be a valid email address
    InvalidEmail { field: &'static str },
    /// {field} must be at least {min} characters long
    TooShort { field: &'static str, min: usize },
    /// {field}: {message}
    InvalidChoice { field: &'static str, message: String },
    /// {field} must be a date formatted as YYYY-MM-DD
    InvalidDate { field: &'static str },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::InvalidEmail { field }
            | Self::TooShort { field, .. }
            | Self::InvalidChoice { field, .. }
            | Self::InvalidDate { field } => field,
        }
    }
}

/// Every validation failure of a form, in field order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the first error of the given field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|v| v.field() == field)
    }

    /// Records the error of a check and passes its value on.
    pub(crate) fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Returns the trimmed value, or an error if it is blank.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required { field })
    } else {
        Ok(value.to_owned())
    }
}

pub(crate) fn email(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = required(field, value)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };
    if valid {
        Ok(value)
    } else {
        Err(FieldError::InvalidEmail { field })
    }
}

/// Passwords are not trimmed.
pub(crate) fn password(field: &'static str, value: &str) -> Result<String, FieldError> {
    if value.is_empty() {
        Err(FieldError::Required { field })
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Err(FieldError::TooShort {
            field,
            min: MIN_PASSWORD_LEN,
        })
    } else {
        Ok(value.to_owned())
    }
}

pub(crate) fn choice<T>(field: &'static str, value: &str) -> Result<T, FieldError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = required(field, value)?;
    value.parse().map_err(|e: T::Err| FieldError::InvalidChoice {
        field,
        message: e.to_string(),
    })
}

/// Parses an optional choice; a blank value is `None`.
pub(crate) fn optional_choice<T>(field: &'static str, value: &str) -> Result<Option<T>, FieldError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if value.trim().is_empty() {
        Ok(None)
    } else {
        choice(field, value).map(Some)
    }
}

pub(crate) fn optional_date(
    field: &'static str,
    value: &str,
) -> Result<Option<chrono::NaiveDate>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FieldError::InvalidDate { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountType;

    #[test]
    fn required_trims() {
        assert_eq!(required("name", "  Watch "), Ok("Watch".to_owned()));
        assert_eq!(required("name", "   "), Err(FieldError::Required { field: "name" }));
    }

    #[test]
    fn email_format() {
        assert!(email("email", "ada@example.com").is_ok());
        for value in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            assert_eq!(
                email("email", value),
                Err(FieldError::InvalidEmail { field: "email" }),
                "{}",
                value
            );
        }
    }

    #[test]
    fn password_length() {
        assert_eq!(
            password("password", "short").unwrap_err().to_string(),
            "password must be at least 8 characters long"
        );
        assert!(password("password", "long enough").is_ok());
    }

    #[test]
    fn choices_parse() {
        assert_eq!(choice::<AccountType>("account_type", "Grantor"), Ok(AccountType::Grantor));
        assert!(matches!(
            choice::<AccountType>("account_type", "admin"),
            Err(FieldError::InvalidChoice { .. })
        ));
        assert_eq!(optional_choice::<AccountType>("account_type", ""), Ok(None));
    }

    #[test]
    fn errors_display_joined() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::Required { field: "name" });
        errors.push(FieldError::Required { field: "will_to" });
        assert_eq!(errors.to_string(), "name is required; will_to is required");
        assert!(errors.get("will_to").is_some());
    }
}
