// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seasonal::{SeasonalOccupancy, SeasonalRates, SeasonalSegment};
use crate::types::PricingPolicy;
use crate::validation::require_positive;
use serde::{Deserialize, Serialize};

/// Annual revenue assembled from the seasonal segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Per-season breakdown in projection order.
    pub segments: [SeasonalSegment; 3],
    /// Room revenue: the sum of segment revenue.
    pub gross_annual_revenue: f64,
    /// Total rented nights across all seasons.
    pub total_nights: f64,
    /// Estimated number of bookings.
    pub total_stays: f64,
    /// Cleaning fees collected from guests.
    pub cleaning_revenue: f64,
    /// Room revenue plus cleaning revenue.
    pub total_gross_revenue: f64,
}

/// Combines seasonal rates and rented nights into annual revenue.
///
/// # Arguments
///
/// * `pricing` - The pricing policy, for the per-stay cleaning fee
/// * `rates` - Season-adjusted nightly rates
/// * `occupancy` - Estimated rented nights per season
/// * `average_stay_length_nights` - Average nights per booking
///
/// # Errors
///
/// Returns `DomainError::NonPositiveValue` if `average_stay_length_nights`
/// is not greater than 0.
pub fn aggregate_revenue(
    pricing: &PricingPolicy,
    rates: &SeasonalRates,
    occupancy: &[SeasonalOccupancy; 3],
    average_stay_length_nights: f64,
) -> Result<RevenueSummary, DomainError> {
    require_positive("averageStayLengthNights", average_stay_length_nights)?;

    let segments: [SeasonalSegment; 3] = occupancy.map(|season| {
        let adjusted_nightly_rate: f64 = rates.rate_for(season.season);
        SeasonalSegment {
            season: season.season,
            months_in_segment: season.months_in_segment,
            occupancy_pct: season.occupancy_pct,
            adjusted_nightly_rate,
            estimated_nights: season.estimated_nights,
            revenue: season.estimated_nights * adjusted_nightly_rate,
        }
    });

    let gross_annual_revenue: f64 = segments.iter().map(|s| s.revenue).sum();
    let total_nights: f64 = segments.iter().map(|s| s.estimated_nights).sum();
    let total_stays: f64 = total_nights / average_stay_length_nights;
    let cleaning_revenue: f64 = total_stays * pricing.cleaning_fee_per_stay;

    Ok(RevenueSummary {
        segments,
        gross_annual_revenue,
        total_nights,
        total_stays,
        cleaning_revenue,
        total_gross_revenue: gross_annual_revenue + cleaning_revenue,
    })
}
