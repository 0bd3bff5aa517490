// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::percentage::Percentage;
use crate::seasonality::MarketSeasonality;
use serde::{Deserialize, Serialize};

/// Nightly pricing policy for the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Base nightly rate charged in the shoulder season.
    pub base_nightly_rate: f64,
    /// Markup charged on weekend nights.
    pub weekend_premium_pct: Percentage,
    /// Markup charged during the peak season.
    pub peak_season_premium_pct: Percentage,
    /// Minimum number of nights per booking.
    pub minimum_stay_nights: f64,
    /// Cleaning fee charged to the guest once per stay.
    pub cleaning_fee_per_stay: f64,
}

/// Occupancy assumptions per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyAssumptions {
    /// Occupancy during the shoulder season.
    pub average_occupancy_pct: Percentage,
    /// Occupancy during the peak season.
    pub peak_occupancy_pct: Percentage,
    /// Occupancy during the off-peak season.
    pub off_peak_occupancy_pct: Percentage,
    /// Average number of nights per booking. Must be greater than 0.
    pub average_stay_length_nights: f64,
}

/// Fixed annual operating costs, independent of occupancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedAnnualCosts {
    /// Property insurance.
    pub insurance: f64,
    /// Utilities.
    pub utilities: f64,
    /// Internet service.
    pub internet: f64,
    /// Guest supplies.
    pub supplies: f64,
    /// Maintenance and repairs.
    pub maintenance: f64,
    /// Marketing and photography.
    pub marketing: f64,
    /// Permits and licenses.
    pub licenses: f64,
}

impl FixedAnnualCosts {
    /// Returns each cost paired with its field name.
    #[must_use]
    pub const fn items(&self) -> [(&'static str, f64); 7] {
        [
            ("insurance", self.insurance),
            ("utilities", self.utilities),
            ("internet", self.internet),
            ("supplies", self.supplies),
            ("maintenance", self.maintenance),
            ("marketing", self.marketing),
            ("licenses", self.licenses),
        ]
    }

    /// Returns the sum of all fixed annual costs.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items().iter().map(|(_, amount)| amount).sum()
    }
}

/// Fee percentages and fixed costs for operating the rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAssumptions {
    /// Property manager's share of revenue after channel fees.
    pub management_fee_pct: Percentage,
    /// Booking platform commission on gross revenue.
    pub platform_commission_pct: Percentage,
    /// Card processing fee on gross revenue.
    pub payment_processing_pct: Percentage,
    /// Fixed annual costs.
    pub fixed_costs: FixedAnnualCosts,
}

/// Purchase and financing details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingProfile {
    /// Purchase price of the property. Must be greater than 0.
    pub property_value: f64,
    /// Cash paid at purchase.
    pub down_payment: f64,
    /// Mortgage principal.
    pub loan_amount: f64,
    /// Annual mortgage interest rate.
    pub interest_rate_pct: Percentage,
    /// Mortgage term. Must be greater than 0.
    pub loan_term_years: f64,
    /// One-off furnishing spend.
    pub furnishing_costs: f64,
    /// One-off setup spend (photography, listing, permits).
    pub setup_costs: f64,
}

impl FinancingProfile {
    /// Returns the total cash invested: down payment, furnishing and setup.
    #[must_use]
    pub fn total_investment(&self) -> f64 {
        self.down_payment + self.furnishing_costs + self.setup_costs
    }
}

/// The complete input snapshot for one projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Pricing policy.
    pub pricing: PricingPolicy,
    /// Occupancy assumptions.
    pub occupancy: OccupancyAssumptions,
    /// Expense assumptions.
    pub expenses: ExpenseAssumptions,
    /// Financing profile.
    pub financing: FinancingProfile,
    /// Market seasonality selector.
    #[serde(default)]
    pub seasonality: MarketSeasonality,
}
