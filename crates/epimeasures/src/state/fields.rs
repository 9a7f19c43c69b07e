//! Raw inputs of the calculator widgets and the outcome derived from them.

use epimeasures_core::{ValidationError, parse_number};

/// A numeric input kept as the text the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    pub label: &'static str,
    pub unit: &'static str,
    pub text: String,
}

impl NumericField {
    pub fn new(label: &'static str, unit: &'static str, value: f64) -> Self {
        Self {
            label,
            unit,
            text: value.to_string(),
        }
    }

    /// `None` while the text is empty or not a finite number.
    pub fn value(&self) -> Option<f64> {
        parse_number(&self.text)
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_string();
    }
}

/// Parse every field, or `None` if any of them is not a number yet.
pub fn parse_all<const N: usize>(fields: &[NumericField; N]) -> Option<[f64; N]> {
    let mut values = [0.0; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = field.value()?;
    }
    Some(values)
}

/// State of a derived display.
///
/// `Pending` shows the neutral placeholder, `Invalid` the blocking message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Pending,
    Invalid(ValidationError),
    Ready(T),
}

impl<T> Outcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Outcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Outcome::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Pending => "pending",
            Outcome::Invalid(_) => "invalid",
            Outcome::Ready(_) => "ready",
        }
    }
}

impl<T> From<Option<Result<T, ValidationError>>> for Outcome<T> {
    fn from(parsed: Option<Result<T, ValidationError>>) -> Self {
        match parsed {
            None => Outcome::Pending,
            Some(Err(err)) => Outcome::Invalid(err),
            Some(Ok(value)) => Outcome::Ready(value),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for Outcome<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        Some(result).into()
    }
}
