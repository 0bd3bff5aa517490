// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::expenses::ExpenseBreakdown;
use crate::mortgage::MortgagePayment;
use crate::revenue::RevenueSummary;
use crate::types::FinancingProfile;
use crate::validation::require_positive;
use serde::{Deserialize, Serialize};

/// Nights in a projection year, used for `RevPAR` and break-even occupancy.
pub const NIGHTS_PER_YEAR: f64 = 365.0;

/// Investment return metrics for one projection year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    /// Gross revenue minus operating expenses, before debt service.
    pub net_operating_income: f64,
    /// Net operating income minus annual debt service.
    pub cash_flow: f64,
    /// Gross revenue over property value, in percent.
    pub gross_yield_pct: f64,
    /// Net operating income over property value, in percent.
    pub net_yield_pct: f64,
    /// Cash invested: down payment, furnishing and setup.
    pub total_investment: f64,
    /// Cash flow over total investment, in percent.
    pub cash_on_cash_return_pct: f64,
    /// Gross revenue per rented night.
    pub average_daily_rate: f64,
    /// Gross revenue per available night.
    pub rev_par: f64,
}

impl InvestmentMetrics {
    /// Returns the capitalization rate.
    ///
    /// Cap rate and net yield are the same quantity under this model (NOI
    /// over property value), so the cap rate is read from the net yield.
    #[must_use]
    pub const fn cap_rate_pct(&self) -> f64 {
        self.net_yield_pct
    }

    const fn items(&self) -> [(&'static str, f64); 8] {
        [
            ("netOperatingIncome", self.net_operating_income),
            ("cashFlow", self.cash_flow),
            ("grossYieldPct", self.gross_yield_pct),
            ("netYieldPct", self.net_yield_pct),
            ("totalInvestment", self.total_investment),
            ("cashOnCashReturnPct", self.cash_on_cash_return_pct),
            ("averageDailyRate", self.average_daily_rate),
            ("revPar", self.rev_par),
        ]
    }
}

/// Computes income, cash flow and return metrics.
///
/// # Errors
///
/// Returns `DomainError::NonPositiveValue` if the property value, total
/// investment or total rented nights is not greater than 0, and
/// `DomainError::NumericOverflow` naming the first metric that is not finite.
pub fn compute_investment_metrics(
    revenue: &RevenueSummary,
    expenses: &ExpenseBreakdown,
    mortgage: &MortgagePayment,
    financing: &FinancingProfile,
) -> Result<InvestmentMetrics, DomainError> {
    let total_investment: f64 = financing.total_investment();
    require_positive("propertyValue", financing.property_value)?;
    require_positive("totalInvestment", total_investment)?;
    require_positive("totalNights", revenue.total_nights)?;

    let gross: f64 = revenue.total_gross_revenue;
    let net_operating_income: f64 = gross - expenses.total_annual_expenses;
    let cash_flow: f64 = net_operating_income - mortgage.annual_payment;

    let metrics: InvestmentMetrics = InvestmentMetrics {
        net_operating_income,
        cash_flow,
        gross_yield_pct: gross / financing.property_value * 100.0,
        net_yield_pct: net_operating_income / financing.property_value * 100.0,
        total_investment,
        cash_on_cash_return_pct: cash_flow / total_investment * 100.0,
        average_daily_rate: gross / revenue.total_nights,
        rev_par: gross / NIGHTS_PER_YEAR,
    };

    for (quantity, value) in metrics.items() {
        if !value.is_finite() {
            return Err(DomainError::NumericOverflow { quantity });
        }
    }
    Ok(metrics)
}
