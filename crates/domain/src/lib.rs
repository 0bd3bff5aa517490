// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod break_even;
mod error;
mod expenses;
mod metrics;
mod mortgage;
mod payback;
mod percentage;
mod recommendations;
mod revenue;
mod seasonal;
mod seasonality;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use break_even::solve_break_even;
pub use error::{DomainError, ErrorKind};
pub use expenses::{CLEANING_COST_RATIO, ExpenseBreakdown, apply_expense_waterfall};
pub use metrics::{InvestmentMetrics, NIGHTS_PER_YEAR, compute_investment_metrics};
pub use mortgage::{MortgagePayment, amortize};
pub use payback::estimate_payback;
pub use percentage::Percentage;
pub use recommendations::{Recommendation, RecommendationContext, evaluate_recommendations};
pub use revenue::{RevenueSummary, aggregate_revenue};
pub use seasonal::{
    DAYS_PER_MONTH, OFF_PEAK_RATE_FACTOR, SeasonalOccupancy, SeasonalRates, SeasonalSegment,
    WEEKEND_NIGHT_SHARE, resolve_seasonal_occupancy, resolve_seasonal_rates,
};
pub use seasonality::{
    MONTHS_PER_YEAR, MarketSeasonality, Season, SeasonProfile, SeasonalityProfile,
};

// Re-export public types
pub use types::{
    ExpenseAssumptions, FinancingProfile, FixedAnnualCosts, OccupancyAssumptions, PricingPolicy,
    ProjectionInput,
};
pub use validation::{
    validate_expense_assumptions, validate_financing_profile, validate_occupancy_assumptions,
    validate_pricing_policy, validate_projection_input,
};
