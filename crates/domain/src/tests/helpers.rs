// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ExpenseAssumptions, ExpenseBreakdown, FinancingProfile, FixedAnnualCosts, InvestmentMetrics,
    MarketSeasonality, MortgagePayment, OccupancyAssumptions, Percentage, PricingPolicy,
    ProjectionInput, RevenueSummary, aggregate_revenue, amortize, apply_expense_waterfall,
    compute_investment_metrics, resolve_seasonal_occupancy, resolve_seasonal_rates,
};

pub fn pct(value: f64) -> Percentage {
    Percentage::premium(value).unwrap()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

pub fn create_test_pricing() -> PricingPolicy {
    PricingPolicy {
        base_nightly_rate: 150.0,
        weekend_premium_pct: pct(20.0),
        peak_season_premium_pct: pct(30.0),
        minimum_stay_nights: 2.0,
        cleaning_fee_per_stay: 80.0,
    }
}

pub fn create_test_occupancy() -> OccupancyAssumptions {
    OccupancyAssumptions {
        average_occupancy_pct: pct(65.0),
        peak_occupancy_pct: pct(85.0),
        off_peak_occupancy_pct: pct(45.0),
        average_stay_length_nights: 3.5,
    }
}

pub fn create_test_fixed_costs() -> FixedAnnualCosts {
    FixedAnnualCosts {
        insurance: 3000.0,
        utilities: 4200.0,
        internet: 900.0,
        supplies: 1500.0,
        maintenance: 1200.0,
        marketing: 600.0,
        licenses: 700.0,
    }
}

pub fn create_test_expenses() -> ExpenseAssumptions {
    ExpenseAssumptions {
        management_fee_pct: pct(15.0),
        platform_commission_pct: pct(3.0),
        payment_processing_pct: pct(2.9),
        fixed_costs: create_test_fixed_costs(),
    }
}

pub fn create_test_financing() -> FinancingProfile {
    FinancingProfile {
        property_value: 800_000.0,
        down_payment: 160_000.0,
        loan_amount: 640_000.0,
        interest_rate_pct: pct(6.5),
        loan_term_years: 30.0,
        furnishing_costs: 25_000.0,
        setup_costs: 5_000.0,
    }
}

/// The reference scenario: a $800k property with negative cash flow.
pub fn create_test_input() -> ProjectionInput {
    ProjectionInput {
        pricing: create_test_pricing(),
        occupancy: create_test_occupancy(),
        expenses: create_test_expenses(),
        financing: create_test_financing(),
        seasonality: MarketSeasonality::Moderate,
    }
}

pub fn compute_revenue(input: &ProjectionInput) -> RevenueSummary {
    let rates = resolve_seasonal_rates(&input.pricing);
    let occupancy =
        resolve_seasonal_occupancy(&input.occupancy, &input.seasonality.profile()).unwrap();
    aggregate_revenue(
        &input.pricing,
        &rates,
        &occupancy,
        input.occupancy.average_stay_length_nights,
    )
    .unwrap()
}

pub struct Pipeline {
    pub revenue: RevenueSummary,
    pub expenses: ExpenseBreakdown,
    pub mortgage: MortgagePayment,
    pub metrics: InvestmentMetrics,
}

pub fn run_pipeline(input: &ProjectionInput) -> Pipeline {
    let revenue: RevenueSummary = compute_revenue(input);
    let expenses: ExpenseBreakdown =
        apply_expense_waterfall(&revenue, &input.pricing, &input.expenses);
    let mortgage: MortgagePayment = amortize(
        input.financing.loan_amount,
        input.financing.interest_rate_pct,
        input.financing.loan_term_years,
    )
    .unwrap();
    let metrics: InvestmentMetrics =
        compute_investment_metrics(&revenue, &expenses, &mortgage, &input.financing).unwrap();
    Pipeline {
        revenue,
        expenses,
        mortgage,
        metrics,
    }
}
