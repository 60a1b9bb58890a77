//! Errors raised by unit lookup, conversion, parsing and configuration
//!
//! Every failure is immediate and atomic: an operation either produces its
//! full result or returns one of these before any value is observable.

use crate::Dimension;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_FORMAT: &str = "INVALID_FORMAT";
    pub const INVALID_ENVIRONMENT: &str = "INVALID_ENVIRONMENT";
    pub const INVALID_DEFINITION: &str = "INVALID_DEFINITION";
    pub const UNKNOWN_DIMENSION: &str = "UNKNOWN_DIMENSION";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Error type for unit operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unit '{unit}' is not registered for {dimension}")]
    UnitNotFound { unit: String, dimension: Dimension },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: Dimension, found: Dimension },

    #[error("unit '{unit}' is already registered for {dimension}")]
    DuplicateUnit { unit: String, dimension: Dimension },

    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("invalid format specifier: '{0}'")]
    InvalidFormat(String),

    #[error("{field} must be a positive finite number, got {value}")]
    InvalidEnvironment { field: &'static str, value: f64 },

    #[error("invalid definition for unit '{unit}': {reason}")]
    InvalidDefinition { unit: String, reason: String },

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl UnitError {
    pub fn unit_not_found(unit: impl Into<String>, dimension: Dimension) -> Self {
        UnitError::UnitNotFound { unit: unit.into(), dimension }
    }

    pub fn mismatch(expected: Dimension, found: Dimension) -> Self {
        UnitError::DimensionMismatch { expected, found }
    }

    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        UnitError::Parse { input: input.into(), reason: reason.into() }
    }

    pub fn invalid_definition(unit: impl Into<String>, reason: impl Into<String>) -> Self {
        UnitError::InvalidDefinition { unit: unit.into(), reason: reason.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::UnitNotFound { .. } => codes::UNIT_NOT_FOUND,
            UnitError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            UnitError::DuplicateUnit { .. } => codes::DUPLICATE_UNIT,
            UnitError::Parse { .. } => codes::PARSE_ERROR,
            UnitError::InvalidFormat(_) => codes::INVALID_FORMAT,
            UnitError::InvalidEnvironment { .. } => codes::INVALID_ENVIRONMENT,
            UnitError::InvalidDefinition { .. } => codes::INVALID_DEFINITION,
            UnitError::UnknownDimension(_) => codes::UNKNOWN_DIMENSION,
            UnitError::Config(_) => codes::CONFIG_ERROR,
        }
    }
}
