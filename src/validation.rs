use std::fmt;

/// Category of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationErrorKind {
    /// A value is missing.
    Required,
    /// A value is present but does not have the expected type or format.
    InvalidType,
}

/// A single validation error with a stable code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub code: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Ordered list of errors produced by a single match.
/// Empty result means the value is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    #[cfg_attr(feature = "serde", serde(default))]
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(
        &mut self,
        kind: ValidationErrorKind,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.errors.push(ValidationError {
            kind,
            code: code.into(),
            message: message.into(),
        });
    }

    #[inline]
    pub fn add_invalid_type_error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.add_error(ValidationErrorKind::InvalidType, code, message)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error codes in the order they were recorded.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(|e| e.code.as_str())
    }

    #[inline]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
