// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The operating expense waterfall.
//!
//! Fees are charged in a fixed order. Platform commission and payment
//! processing are charged on total gross revenue, and the management fee is
//! charged on what remains after those two. The order and the
//! [`CLEANING_COST_RATIO`] are policy constants, not derived values.

use crate::revenue::RevenueSummary;
use crate::types::{ExpenseAssumptions, PricingPolicy};
use serde::{Deserialize, Serialize};

/// Cost of one turnover clean as a fraction of the cleaning fee charged.
pub const CLEANING_COST_RATIO: f64 = 0.6;

/// Annual operating expenses, itemized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Booking platform commission.
    pub platform_fees: f64,
    /// Payment processing fees.
    pub processing_fees: f64,
    /// Revenue remaining after platform and processing fees.
    pub net_revenue_after_platform: f64,
    /// Property management fees.
    pub management_fees: f64,
    /// Turnover cleaning costs.
    pub cleaning_costs: f64,
    /// Sum of fixed annual costs.
    pub fixed_costs: f64,
    /// All operating expenses, excluding debt service.
    pub total_annual_expenses: f64,
}

impl ExpenseBreakdown {
    /// Returns the expenses that scale with occupancy.
    #[must_use]
    pub fn variable_costs(&self) -> f64 {
        self.platform_fees + self.processing_fees + self.management_fees + self.cleaning_costs
    }
}

/// Applies the expense waterfall to a revenue summary.
#[must_use]
pub fn apply_expense_waterfall(
    revenue: &RevenueSummary,
    pricing: &PricingPolicy,
    expenses: &ExpenseAssumptions,
) -> ExpenseBreakdown {
    let gross: f64 = revenue.total_gross_revenue;

    let platform_fees: f64 = gross * expenses.platform_commission_pct.to_fraction();
    let processing_fees: f64 = gross * expenses.payment_processing_pct.to_fraction();
    let net_revenue_after_platform: f64 = gross - platform_fees - processing_fees;
    let management_fees: f64 =
        net_revenue_after_platform * expenses.management_fee_pct.to_fraction();
    let cleaning_costs: f64 =
        revenue.total_stays * (pricing.cleaning_fee_per_stay * CLEANING_COST_RATIO);
    let fixed_costs: f64 = expenses.fixed_costs.total();

    let total_annual_expenses: f64 =
        platform_fees + processing_fees + management_fees + cleaning_costs + fixed_costs;

    ExpenseBreakdown {
        platform_fees,
        processing_fees,
        net_revenue_after_platform,
        management_fees,
        cleaning_costs,
        fixed_costs,
        total_annual_expenses,
    }
}
