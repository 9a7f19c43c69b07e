use std::fmt;

/// Blocking input problems. When one of these is returned the widget shows
/// the message and withholds the derived values.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NonPositivePopulation,
    NegativeEvents,
    /// Any count that must be non-negative was negative
    NegativeInput,
    /// A sub-population (e.g. women of childbearing age) is larger than the total
    SubpopulationExceedsTotal,
    DeathsExceedCases,
    NonPositiveBenchmark,
    InvalidAge,
    TooManyAges {
        max: usize,
    },
    NegativeRate,
    NegativeTime,
    NonPositiveTime,
    RiskOutOfRange,
    NonPositiveDuration,
    NonPositiveIncidence,
    NegativeIncidence,
    NonPositiveDenominator {
        what: &'static str,
    },
    EmptyLifeTable,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositivePopulation => {
                write!(f, "Population must be greater than 0.")
            }
            ValidationError::NegativeEvents => write!(f, "Events cannot be negative."),
            ValidationError::NegativeInput => write!(f, "Inputs cannot be negative."),
            ValidationError::SubpopulationExceedsTotal => {
                write!(
                    f,
                    "Women of childbearing age cannot exceed total population."
                )
            }
            ValidationError::DeathsExceedCases => {
                write!(f, "Deaths among cases cannot exceed the number of cases.")
            }
            ValidationError::NonPositiveBenchmark => {
                write!(f, "Benchmark age must be a positive number.")
            }
            ValidationError::InvalidAge => write!(f, "Please enter a valid, non-negative age."),
            ValidationError::TooManyAges { max } => {
                write!(f, "Maximum of {max} ages allowed for this demo.")
            }
            ValidationError::NegativeRate => write!(f, "Rate cannot be negative."),
            ValidationError::NegativeTime => write!(f, "Time cannot be negative."),
            ValidationError::NonPositiveTime => write!(f, "Time must be greater than 0."),
            ValidationError::RiskOutOfRange => write!(f, "Risk must be between 0 and 1."),
            ValidationError::NonPositiveDuration => {
                write!(f, "Duration must be greater than 0.")
            }
            ValidationError::NonPositiveIncidence => {
                write!(f, "Incidence must be greater than 0.")
            }
            ValidationError::NegativeIncidence => write!(f, "Incidence cannot be negative."),
            ValidationError::NonPositiveDenominator { what } => {
                write!(f, "{what} must be greater than 0.")
            }
            ValidationError::EmptyLifeTable => write!(f, "Life table has no age groups."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Non-blocking conditions. The computation is still shown alongside the warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    EventsExceedPopulation,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EventsExceedPopulation => {
                write!(f, "Warning: Events exceed population, so risk is > 100%.")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reject non-positive (or non-finite) denominators with a named error.
pub(crate) fn require_positive(value: f64, what: &'static str) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositiveDenominator { what })
    }
}

/// Reject negative (or non-finite) counts.
pub(crate) fn require_non_negative(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NegativeInput)
    }
}
