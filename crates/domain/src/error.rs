// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seasonality::Season;

/// Broad classification of a [`DomainError`].
///
/// Callers that only need to decide whether a failure was caused by the
/// input or by a degenerate sub-result can match on this instead of the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input violates a domain constraint.
    InvalidInput,
    /// Net revenue per night is non-positive, so no break-even point exists.
    DegenerateBreakEven,
    /// Cash flow is non-positive, so the investment is never paid back.
    NoPayback,
}

/// Errors that can occur during projection input validation and computation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A percentage value was outside its permitted range.
    PercentageOutOfRange {
        /// The rejected value.
        value: f64,
        /// The upper bound, if the percentage is bounded.
        max: Option<f64>,
    },
    /// A named percentage field was outside its permitted range.
    InvalidPercentage {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The upper bound, if the percentage is bounded.
        max: Option<f64>,
    },
    /// A monetary amount or count was negative.
    NegativeAmount {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that is used as a divisor was zero or negative.
    NonPositiveValue {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value was NaN or infinite.
    NonFiniteValue {
        /// The name of the offending field.
        field: &'static str,
    },
    /// An unknown market seasonality selector.
    InvalidSeasonality(String),
    /// A seasonality profile does not describe a full year.
    InvalidSeasonalityProfile {
        /// Description of the problem.
        reason: String,
    },
    /// The seasonality multiplier pushed a season's occupancy above 100%.
    OccupancyExceedsCapacity {
        /// The season whose occupancy overflowed.
        season: Season,
        /// The effective occupancy after applying the multiplier.
        occupancy_pct: f64,
    },
    /// Every season has zero occupancy, so nothing is rented.
    NoRentedNights,
    /// A derived quantity overflowed to infinity or NaN.
    NumericOverflow {
        /// The name of the derived quantity.
        quantity: &'static str,
    },
    /// Net revenue per night does not cover variable costs.
    DegenerateBreakEven {
        /// Average daily rate minus variable cost per night.
        net_rate_per_night: f64,
    },
    /// Annual cash flow is zero or negative.
    NoPayback {
        /// The annual cash flow.
        cash_flow: f64,
    },
}

impl DomainError {
    /// Returns the taxonomy bucket this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateBreakEven { .. } => ErrorKind::DegenerateBreakEven,
            Self::NoPayback { .. } => ErrorKind::NoPayback,
            Self::PercentageOutOfRange { .. }
            | Self::InvalidPercentage { .. }
            | Self::NegativeAmount { .. }
            | Self::NonPositiveValue { .. }
            | Self::NonFiniteValue { .. }
            | Self::InvalidSeasonality(_)
            | Self::InvalidSeasonalityProfile { .. }
            | Self::OccupancyExceedsCapacity { .. }
            | Self::NoRentedNights
            | Self::NumericOverflow { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Returns the input field this error refers to, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPercentage { field, .. }
            | Self::NegativeAmount { field, .. }
            | Self::NonPositiveValue { field, .. }
            | Self::NonFiniteValue { field } => Some(field),
            _ => None,
        }
    }
}

fn write_range(f: &mut std::fmt::Formatter<'_>, max: Option<f64>) -> std::fmt::Result {
    match max {
        Some(max) => write!(f, "must be between 0 and {max}"),
        None => write!(f, "must be a finite, non-negative value"),
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PercentageOutOfRange { value, max } => {
                write!(f, "Percentage {value} is out of range: ")?;
                write_range(f, *max)
            }
            Self::InvalidPercentage { field, value, max } => {
                write!(f, "Invalid percentage for {field}: {value} ")?;
                write_range(f, *max)
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Invalid {field}: {value}. Must not be negative")
            }
            Self::NonPositiveValue { field, value } => {
                write!(f, "Invalid {field}: {value}. Must be greater than 0")
            }
            Self::NonFiniteValue { field } => {
                write!(f, "Invalid {field}: value must be a finite number")
            }
            Self::InvalidSeasonality(value) => {
                write!(
                    f,
                    "Invalid seasonality: '{value}'. Must be one of high, moderate, low"
                )
            }
            Self::InvalidSeasonalityProfile { reason } => {
                write!(f, "Invalid seasonality profile: {reason}")
            }
            Self::OccupancyExceedsCapacity {
                season,
                occupancy_pct,
            } => {
                write!(
                    f,
                    "Effective {season} occupancy of {occupancy_pct}% exceeds 100%"
                )
            }
            Self::NoRentedNights => {
                write!(
                    f,
                    "At least one season must have a positive occupancy rate"
                )
            }
            Self::NumericOverflow { quantity } => {
                write!(f, "Computed {quantity} is not a finite number")
            }
            Self::DegenerateBreakEven { net_rate_per_night } => {
                write!(
                    f,
                    "No break-even occupancy exists: net rate per night is {net_rate_per_night}"
                )
            }
            Self::NoPayback { cash_flow } => {
                write!(
                    f,
                    "Investment is never paid back: annual cash flow is {cash_flow}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
