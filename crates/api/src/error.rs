// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use str_projection::ProjectionError;
use str_projection_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProjectionError> for ApiError {
    fn from(err: ProjectionError) -> Self {
        translate_projection_error(err)
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidPercentage { field, .. }
        | DomainError::NegativeAmount { field, .. }
        | DomainError::NonPositiveValue { field, .. }
        | DomainError::NonFiniteValue { field } => ApiError::InvalidInput {
            field: String::from(field),
            message,
        },
        DomainError::PercentageOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("percentage"),
            message,
        },
        DomainError::InvalidSeasonality(_) => ApiError::InvalidInput {
            field: String::from("seasonality"),
            message,
        },
        DomainError::OccupancyExceedsCapacity { .. } | DomainError::NoRentedNights => {
            ApiError::InvalidInput {
                field: String::from("occupancy"),
                message,
            }
        }
        DomainError::NumericOverflow { quantity } => ApiError::InvalidInput {
            field: String::from(quantity),
            message,
        },
        DomainError::InvalidSeasonalityProfile { .. } => ApiError::Internal { message },
        DomainError::DegenerateBreakEven { .. } => ApiError::DomainRuleViolation {
            rule: String::from("break_even_exists"),
            message,
        },
        DomainError::NoPayback { .. } => ApiError::DomainRuleViolation {
            rule: String::from("positive_cash_flow"),
            message,
        },
    }
}

/// Translates a projection error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_projection_error(err: ProjectionError) -> ApiError {
    match err {
        ProjectionError::InvalidInput(domain_err) | ProjectionError::Computation(domain_err) => {
            translate_domain_error(domain_err)
        }
    }
}
