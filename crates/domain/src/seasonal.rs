// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season-adjusted nightly rates and rented nights.
//!
//! The year is split into peak, shoulder and off-peak seasons according to
//! a [`SeasonalityProfile`]. Each season gets its own nightly rate and an
//! estimate of rented nights derived from its occupancy assumption.

use crate::error::DomainError;
use crate::percentage::Percentage;
use crate::seasonality::{Season, SeasonalityProfile};
use crate::types::{OccupancyAssumptions, PricingPolicy};
use serde::{Deserialize, Serialize};

/// Average number of days in a month.
pub const DAYS_PER_MONTH: f64 = 30.4;

/// Off-peak nightly rate as a fraction of the base rate (a fixed 15% discount).
pub const OFF_PEAK_RATE_FACTOR: f64 = 0.85;

/// Share of rented nights that fall on a weekend.
pub const WEEKEND_NIGHT_SHARE: f64 = 0.3;

/// Season-adjusted nightly rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRates {
    /// Peak season rate, weekend-adjusted.
    pub peak: f64,
    /// Shoulder season rate, weekend-adjusted.
    pub shoulder: f64,
    /// Off-peak season rate, weekend-adjusted.
    pub off_peak: f64,
    /// Blended weekend multiplier applied to every season.
    pub weekend_multiplier: f64,
}

impl SeasonalRates {
    /// Returns the adjusted nightly rate for a season.
    #[must_use]
    pub const fn rate_for(&self, season: Season) -> f64 {
        match season {
            Season::Peak => self.peak,
            Season::Shoulder => self.shoulder,
            Season::OffPeak => self.off_peak,
        }
    }
}

/// Estimated rented nights for one season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalOccupancy {
    /// The season.
    pub season: Season,
    /// Months assigned to the season.
    pub months_in_segment: u8,
    /// Effective occupancy after the seasonality multiplier.
    pub occupancy_pct: Percentage,
    /// Estimated rented nights.
    pub estimated_nights: f64,
}

impl SeasonalOccupancy {
    /// Returns the number of available nights in the season.
    #[must_use]
    pub fn available_nights(&self) -> f64 {
        f64::from(self.months_in_segment) * DAYS_PER_MONTH
    }
}

/// One season's contribution to the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalSegment {
    /// The season.
    pub season: Season,
    /// Months assigned to the season.
    pub months_in_segment: u8,
    /// Effective occupancy for the season.
    pub occupancy_pct: Percentage,
    /// Weekend-adjusted nightly rate.
    pub adjusted_nightly_rate: f64,
    /// Estimated rented nights.
    pub estimated_nights: f64,
    /// Room revenue for the season.
    pub revenue: f64,
}

/// Resolves the weekend-adjusted nightly rate for each season.
///
/// The peak rate carries the peak premium, the shoulder rate is the base
/// rate and the off-peak rate is discounted by [`OFF_PEAK_RATE_FACTOR`].
/// A blended weekend multiplier, assuming [`WEEKEND_NIGHT_SHARE`] of nights
/// fall on a weekend, is then applied to all three.
#[must_use]
pub fn resolve_seasonal_rates(pricing: &PricingPolicy) -> SeasonalRates {
    let base: f64 = pricing.base_nightly_rate;
    let weekend_multiplier: f64 =
        pricing.weekend_premium_pct.to_fraction().mul_add(WEEKEND_NIGHT_SHARE, 1.0);

    let peak: f64 = base * (1.0 + pricing.peak_season_premium_pct.to_fraction());
    let shoulder: f64 = base;
    let off_peak: f64 = base * OFF_PEAK_RATE_FACTOR;

    SeasonalRates {
        peak: peak * weekend_multiplier,
        shoulder: shoulder * weekend_multiplier,
        off_peak: off_peak * weekend_multiplier,
        weekend_multiplier,
    }
}

/// Estimates rented nights per season.
///
/// Peak uses the peak occupancy, shoulder the average occupancy and
/// off-peak the off-peak occupancy, each scaled by the profile's
/// multiplier for that season.
///
/// # Errors
///
/// Returns `DomainError::OccupancyExceedsCapacity` if a multiplier pushes a
/// season's occupancy above 100%.
pub fn resolve_seasonal_occupancy(
    occupancy: &OccupancyAssumptions,
    profile: &SeasonalityProfile,
) -> Result<[SeasonalOccupancy; 3], DomainError> {
    let resolve = |season: Season| -> Result<SeasonalOccupancy, DomainError> {
        let assumed: Percentage = match season {
            Season::Peak => occupancy.peak_occupancy_pct,
            Season::Shoulder => occupancy.average_occupancy_pct,
            Season::OffPeak => occupancy.off_peak_occupancy_pct,
        };
        let season_profile = profile.season(season);
        let scaled: f64 = assumed.value() * season_profile.occupancy_multiplier;
        let occupancy_pct: Percentage =
            Percentage::new(scaled).map_err(|_| DomainError::OccupancyExceedsCapacity {
                season,
                occupancy_pct: scaled,
            })?;

        let available: f64 = f64::from(season_profile.months) * DAYS_PER_MONTH;
        Ok(SeasonalOccupancy {
            season,
            months_in_segment: season_profile.months,
            occupancy_pct,
            estimated_nights: available * occupancy_pct.to_fraction(),
        })
    };

    Ok([
        resolve(Season::Peak)?,
        resolve(Season::Shoulder)?,
        resolve(Season::OffPeak)?,
    ])
}
