// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};
use str_projection_domain::{
    DomainError, ErrorKind, ExpenseBreakdown, InvestmentMetrics, MortgagePayment,
    ProjectionInput, Recommendation, RecommendationContext, RevenueSummary, SeasonalOccupancy,
    SeasonalRates, SeasonalSegment, aggregate_revenue, amortize, apply_expense_waterfall,
    compute_investment_metrics, estimate_payback, evaluate_recommendations,
    resolve_seasonal_occupancy, resolve_seasonal_rates, solve_break_even,
    validate_projection_input,
};

/// The complete output of one projection.
///
/// Every field is recomputed from the input on each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Room revenue across all seasons, excluding cleaning fees.
    pub gross_annual_revenue: f64,
    /// Room revenue plus cleaning fees collected.
    pub total_gross_revenue: f64,
    /// Revenue left after platform commission and payment processing.
    pub net_annual_revenue: f64,
    /// All operating expenses, excluding debt service.
    pub total_annual_expenses: f64,
    /// Gross revenue minus operating expenses.
    pub net_operating_income: f64,
    /// Net operating income minus debt service.
    pub cash_flow: f64,
    /// Gross revenue over property value, in percent.
    pub gross_yield_pct: f64,
    /// Net operating income over property value, in percent.
    pub net_yield_pct: f64,
    /// Capitalization rate, in percent. Always equal to `net_yield_pct`.
    pub cap_rate_pct: f64,
    /// Cash flow over total cash invested, in percent.
    pub cash_on_cash_return_pct: f64,
    /// Gross revenue per rented night.
    pub average_daily_rate: f64,
    /// Gross revenue per available night.
    pub rev_par: f64,
    /// Occupancy needed to cover all costs. `None` if no occupancy does.
    pub break_even_occupancy_pct: Option<f64>,
    /// Years to recover the cash invested. `None` if cash flow is not positive.
    pub payback_period_years: Option<f64>,
    /// Monthly mortgage payment.
    pub monthly_mortgage: f64,
    /// Annual debt service.
    pub annual_mortgage: f64,
    /// Total rented nights.
    pub total_nights: f64,
    /// Cash invested: down payment, furnishing and setup.
    pub total_investment: f64,
    /// Itemized operating expenses.
    pub expenses: ExpenseBreakdown,
    /// Per-season breakdown in projection order.
    pub seasonal_breakdown: [SeasonalSegment; 3],
    /// Advisories, in rule order.
    pub recommendations: Vec<Recommendation>,
}

/// Projects one year of short-term rental operation.
///
/// The input is validated in full before any computation runs. Break-even
/// occupancy and payback period are reported as `None` when they do not
/// exist, without aborting the rest of the projection.
///
/// # Arguments
///
/// * `input` - The complete input snapshot
///
/// # Returns
///
/// * `Ok(ProjectionResult)` with every metric computed
/// * `Err(ProjectionError)` if the input is invalid
///
/// # Errors
///
/// Returns `ProjectionError::InvalidInput` if validation fails, and
/// `ProjectionError::Computation` if a stage fails on validated input.
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    validate_projection_input(input)?;

    let rates: SeasonalRates = resolve_seasonal_rates(&input.pricing);
    let occupancy: [SeasonalOccupancy; 3] =
        resolve_seasonal_occupancy(&input.occupancy, &input.seasonality.profile())?;
    let revenue: RevenueSummary = aggregate_revenue(
        &input.pricing,
        &rates,
        &occupancy,
        input.occupancy.average_stay_length_nights,
    )?;
    let expenses: ExpenseBreakdown =
        apply_expense_waterfall(&revenue, &input.pricing, &input.expenses);

    let mortgage: MortgagePayment = amortize(
        input.financing.loan_amount,
        input.financing.interest_rate_pct,
        input.financing.loan_term_years,
    )?;

    let metrics: InvestmentMetrics =
        compute_investment_metrics(&revenue, &expenses, &mortgage, &input.financing)?;
    let break_even_occupancy_pct: Option<f64> =
        undefined_as_none(solve_break_even(&revenue, &expenses, &mortgage, &metrics))?;
    let payback_period_years: Option<f64> = undefined_as_none(estimate_payback(&metrics))?;

    let recommendations: Vec<Recommendation> =
        evaluate_recommendations(&RecommendationContext {
            input,
            metrics: &metrics,
            break_even_occupancy_pct,
            payback_period_years,
        });

    Ok(ProjectionResult {
        gross_annual_revenue: revenue.gross_annual_revenue,
        total_gross_revenue: revenue.total_gross_revenue,
        net_annual_revenue: expenses.net_revenue_after_platform,
        total_annual_expenses: expenses.total_annual_expenses,
        net_operating_income: metrics.net_operating_income,
        cash_flow: metrics.cash_flow,
        gross_yield_pct: metrics.gross_yield_pct,
        net_yield_pct: metrics.net_yield_pct,
        cap_rate_pct: metrics.cap_rate_pct(),
        cash_on_cash_return_pct: metrics.cash_on_cash_return_pct,
        average_daily_rate: metrics.average_daily_rate,
        rev_par: metrics.rev_par,
        break_even_occupancy_pct,
        payback_period_years,
        monthly_mortgage: mortgage.monthly_payment,
        annual_mortgage: mortgage.annual_payment,
        total_nights: revenue.total_nights,
        total_investment: metrics.total_investment,
        expenses,
        seasonal_breakdown: revenue.segments,
        recommendations,
    })
}

/// Maps a degenerate sub-result to `None` and propagates anything else.
fn undefined_as_none(result: Result<f64, DomainError>) -> Result<Option<f64>, ProjectionError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.kind() {
            ErrorKind::DegenerateBreakEven | ErrorKind::NoPayback => Ok(None),
            ErrorKind::InvalidInput => Err(ProjectionError::from(err)),
        },
    }
}
