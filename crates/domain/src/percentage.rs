// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A value expressed in percentage units, where `65.0` means 65%.
///
/// All percentage-denominated inputs carry this type so the conversion to a
/// fraction happens in exactly one place, [`Percentage::to_fraction`].
///
/// Deserialized values bypass the constructors; `validate_projection_input`
/// re-checks them at the projection boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Upper bound for bounded percentages such as occupancy and fees.
    pub const MAX_BOUNDED: f64 = 100.0;

    /// Creates a bounded percentage in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PercentageOutOfRange` if the value is not finite
    /// or lies outside `[0, 100]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if Self::is_valid_bounded(value) {
            Ok(Self(value))
        } else {
            Err(DomainError::PercentageOutOfRange {
                value,
                max: Some(Self::MAX_BOUNDED),
            })
        }
    }

    /// Creates an unbounded, non-negative percentage.
    ///
    /// Used for markups and rates that may legitimately exceed 100%.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PercentageOutOfRange` if the value is not finite
    /// or is negative.
    pub fn premium(value: f64) -> Result<Self, DomainError> {
        if Self::is_valid_premium(value) {
            Ok(Self(value))
        } else {
            Err(DomainError::PercentageOutOfRange { value, max: None })
        }
    }

    /// Returns the value in percentage units.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (`65%` becomes `0.65`).
    #[must_use]
    pub const fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub(crate) fn is_valid_bounded(value: f64) -> bool {
        value.is_finite() && (0.0..=Self::MAX_BOUNDED).contains(&value)
    }

    pub(crate) fn is_valid_premium(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
