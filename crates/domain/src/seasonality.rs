// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season definitions and the market seasonality lookup table.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Months in a projection year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// One of the three pricing seasons of a projection year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// High-demand season, priced with the peak premium.
    Peak,
    /// Regular season, priced at the base rate.
    Shoulder,
    /// Low-demand season, priced at a discount.
    OffPeak,
}

impl Season {
    /// All seasons in projection order.
    pub const ALL: [Self; 3] = [Self::Peak, Self::Shoulder, Self::OffPeak];

    /// Converts this season to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Peak => "peak",
            Self::Shoulder => "shoulder",
            Self::OffPeak => "off_peak",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The market seasonality selector offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSeasonality {
    /// Strongly seasonal market.
    High,
    /// Moderately seasonal market.
    #[default]
    Moderate,
    /// Market with little seasonal variation.
    Low,
}

impl MarketSeasonality {
    /// Converts this selector to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }

    /// Looks up the seasonality profile for this selector.
    ///
    /// Every selector currently resolves to equal thirds (4/4/4 months) with
    /// an occupancy multiplier of 1.0, which keeps projections identical to
    /// the legacy calculator. Change the table here once a product mapping
    /// exists.
    #[must_use]
    pub const fn profile(self) -> SeasonalityProfile {
        match self {
            Self::High | Self::Moderate | Self::Low => SeasonalityProfile::EQUAL_THIRDS,
        }
    }
}

impl FromStr for MarketSeasonality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "moderate" => Ok(Self::Moderate),
            "low" => Ok(Self::Low),
            _ => Err(DomainError::InvalidSeasonality(s.to_string())),
        }
    }
}

impl std::fmt::Display for MarketSeasonality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length and occupancy scaling for one season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonProfile {
    /// Number of months assigned to the season.
    pub months: u8,
    /// Multiplier applied to the season's occupancy assumption.
    pub occupancy_multiplier: f64,
}

/// How a year is divided into peak, shoulder and off-peak seasons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityProfile {
    peak: SeasonProfile,
    shoulder: SeasonProfile,
    off_peak: SeasonProfile,
}

impl SeasonalityProfile {
    /// Four months per season, occupancy used as entered.
    pub const EQUAL_THIRDS: Self = Self {
        peak: SeasonProfile {
            months: 4,
            occupancy_multiplier: 1.0,
        },
        shoulder: SeasonProfile {
            months: 4,
            occupancy_multiplier: 1.0,
        },
        off_peak: SeasonProfile {
            months: 4,
            occupancy_multiplier: 1.0,
        },
    };

    /// Creates a custom profile.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeasonalityProfile` if the months do not
    /// sum to a full year or a multiplier is negative or not finite.
    pub fn new(
        peak: SeasonProfile,
        shoulder: SeasonProfile,
        off_peak: SeasonProfile,
    ) -> Result<Self, DomainError> {
        let total_months: u16 =
            u16::from(peak.months) + u16::from(shoulder.months) + u16::from(off_peak.months);
        if total_months != u16::from(MONTHS_PER_YEAR) {
            return Err(DomainError::InvalidSeasonalityProfile {
                reason: format!("season lengths sum to {total_months} months, expected 12"),
            });
        }

        for season in [peak, shoulder, off_peak] {
            let multiplier: f64 = season.occupancy_multiplier;
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(DomainError::InvalidSeasonalityProfile {
                    reason: format!("occupancy multiplier {multiplier} must be non-negative"),
                });
            }
        }

        Ok(Self {
            peak,
            shoulder,
            off_peak,
        })
    }

    /// Returns the profile for a single season.
    #[must_use]
    pub const fn season(&self, season: Season) -> SeasonProfile {
        match season {
            Season::Peak => self.peak,
            Season::Shoulder => self.shoulder,
            Season::OffPeak => self.off_peak,
        }
    }
}

impl Default for SeasonalityProfile {
    fn default() -> Self {
        Self::EQUAL_THIRDS
    }
}
