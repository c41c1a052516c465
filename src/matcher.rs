use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::validation::ValidationResult;

use std::fmt;

/// Maximum total digits when no limit is configured.
pub const DEFAULT_MAX_DIGITS: u32 = 11;

/// Validates an optional string value and reports errors as data.
///
/// Absent or empty values are not a matcher's concern and must
/// produce a valid result. Implementations keep no mutable state,
/// so one instance can be shared between threads.
pub trait Matcher: Send + Sync + fmt::Debug {
    fn match_value(&self, value: Option<&str>) -> ValidationResult;
}

impl Matcher for Box<dyn Matcher> {
    #[inline]
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        (**self).match_value(value)
    }
}

/// Digit count constraints of [`DecimalNumberMatcher`].
///
/// Limits are unsigned. A places limit of 0 still accepts integers,
/// so "reject every value" is not expressible as a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DigitLimits {
    /// At most [`DEFAULT_MAX_DIGITS`] total digits.
    #[default]
    Default,
    /// At most n total digits.
    MaxDigits(u32),
    /// At most n total digits and m decimal places.
    MaxDigitsAndPlaces(u32, u32),
}

impl DigitLimits {
    /// Builds limits from positional parameters:
    /// none, max digits, or max digits followed by max decimal places.
    pub fn from_params(params: &[u32]) -> Result<DigitLimits> {
        match params {
            [] => Ok(DigitLimits::Default),
            [digits] => Ok(DigitLimits::MaxDigits(*digits)),
            [digits, places] => Ok(DigitLimits::MaxDigitsAndPlaces(*digits, *places)),
            _ => Err(Error::TooManyParams(params.len())),
        }
    }

    #[inline]
    pub fn max_digits(&self) -> u32 {
        match *self {
            DigitLimits::Default => DEFAULT_MAX_DIGITS,
            DigitLimits::MaxDigits(digits) | DigitLimits::MaxDigitsAndPlaces(digits, _) => digits,
        }
    }

    #[inline]
    pub fn max_places(&self) -> Option<u32> {
        match *self {
            DigitLimits::MaxDigitsAndPlaces(_, places) => Some(places),
            _ => None,
        }
    }
}

/// Errors reported by [`DecimalNumberMatcher`].
/// Codes are stable and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalNumberError {
    InvalidDecimal,
    MaxDigits,
    MaxPlaces,
}

impl DecimalNumberError {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            DecimalNumberError::InvalidDecimal => "doubleNumber.e001",
            DecimalNumberError::MaxDigits => "doubleNumber.e002",
            DecimalNumberError::MaxPlaces => "doubleNumber.e003",
        }
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            DecimalNumberError::InvalidDecimal => "The value is not a valid decimal number.",
            DecimalNumberError::MaxDigits => "The value exceeded maximum number of digits.",
            DecimalNumberError::MaxPlaces => "The value exceeded maximum number of decimal places.",
        }
    }

    #[inline]
    fn record(self, result: &mut ValidationResult) {
        result.add_invalid_type_error(self.code(), self.message())
    }
}

/// Matcher validating that a string is a decimal number within
/// configured digit limits. Decimal separator is always '.'.
///
/// Limits are inclusive: a value with exactly the maximum number
/// of digits is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalNumberMatcher {
    #[cfg_attr(feature = "serde", serde(default))]
    limits: DigitLimits,
}

impl DecimalNumberMatcher {
    #[inline]
    pub fn new(limits: DigitLimits) -> Self {
        DecimalNumberMatcher { limits }
    }

    /// Creates matcher from 0 to 2 positional parameters,
    /// see [`DigitLimits::from_params`].
    #[inline]
    pub fn from_params(params: &[u32]) -> Result<Self> {
        DigitLimits::from_params(params).map(Self::new)
    }

    #[inline]
    pub fn limits(&self) -> DigitLimits {
        self.limits
    }

    fn check_limits(&self, number: &Decimal, result: &mut ValidationResult) {
        let digits = number.precision();
        if digits > self.limits.max_digits() as usize {
            DecimalNumberError::MaxDigits.record(result);
        }
        if let Some(places) = self.limits.max_places() {
            if number.decimal_places() > places as usize {
                DecimalNumberError::MaxPlaces.record(result);
            }
        }
    }
}

impl Matcher for DecimalNumberMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return result, // presence is checked elsewhere
        };
        let number = match value.parse::<Decimal>() {
            Ok(number) => number,
            Err(e) => {
                tracing::debug!(value, error = %e, "value is not a valid decimal number");
                DecimalNumberError::InvalidDecimal.record(&mut result);
                return result;
            }
        };
        self.check_limits(&number, &mut result);
        tracing::trace!(
            value,
            precision = number.precision(),
            decimal_places = number.decimal_places(),
            limits = ?self.limits,
            errors = result.len(),
            "matched decimal number"
        );
        result
    }
}
