mod decimal;
mod error;
mod matcher;
mod parse;
mod validation;

pub use decimal::Decimal;
pub use error::{Error, Result};
pub use matcher::{DecimalNumberError, DecimalNumberMatcher, DigitLimits, Matcher, DEFAULT_MAX_DIGITS};
pub use validation::{ValidationError, ValidationErrorKind, ValidationResult};
