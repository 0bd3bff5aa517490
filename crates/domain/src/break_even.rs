// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::expenses::ExpenseBreakdown;
use crate::metrics::{InvestmentMetrics, NIGHTS_PER_YEAR};
use crate::mortgage::MortgagePayment;
use crate::revenue::RevenueSummary;

/// Solves for the occupancy at which revenue covers all costs.
///
/// Fixed costs include debt service. Variable costs are spread evenly over
/// rented nights, and each rented night contributes the average daily rate
/// minus that variable cost.
///
/// The result is not clamped: a value above 100 means the property cannot
/// break even even at full occupancy.
///
/// # Errors
///
/// Returns `DomainError::DegenerateBreakEven` if the net rate per night is
/// zero or negative, since no occupancy covers the fixed costs then, or if
/// the resulting percentage is not finite.
pub fn solve_break_even(
    revenue: &RevenueSummary,
    expenses: &ExpenseBreakdown,
    mortgage: &MortgagePayment,
    metrics: &InvestmentMetrics,
) -> Result<f64, DomainError> {
    let fixed_annual_costs: f64 = expenses.fixed_costs + mortgage.annual_payment;
    let variable_cost_per_night: f64 = expenses.variable_costs() / revenue.total_nights;
    let net_rate_per_night: f64 = metrics.average_daily_rate - variable_cost_per_night;

    if !net_rate_per_night.is_finite() || net_rate_per_night <= 0.0 {
        return Err(DomainError::DegenerateBreakEven { net_rate_per_night });
    }

    let break_even_pct: f64 = fixed_annual_costs / net_rate_per_night / NIGHTS_PER_YEAR * 100.0;
    if !break_even_pct.is_finite() {
        return Err(DomainError::DegenerateBreakEven { net_rate_per_night });
    }
    Ok(break_even_pct)
}
