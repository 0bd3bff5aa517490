// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use str_projection_domain::{
    ExpenseAssumptions, FinancingProfile, FixedAnnualCosts, MarketSeasonality,
    OccupancyAssumptions, Percentage, PricingPolicy, ProjectionInput,
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

/// The reference scenario: a leveraged $800k property that loses money.
pub fn create_test_input() -> ProjectionInput {
    ProjectionInput {
        pricing: PricingPolicy {
            base_nightly_rate: 150.0,
            weekend_premium_pct: pct(20.0),
            peak_season_premium_pct: pct(30.0),
            minimum_stay_nights: 2.0,
            cleaning_fee_per_stay: 80.0,
        },
        occupancy: OccupancyAssumptions {
            average_occupancy_pct: pct(65.0),
            peak_occupancy_pct: pct(85.0),
            off_peak_occupancy_pct: pct(45.0),
            average_stay_length_nights: 3.5,
        },
        expenses: ExpenseAssumptions {
            management_fee_pct: pct(15.0),
            platform_commission_pct: pct(3.0),
            payment_processing_pct: pct(2.9),
            fixed_costs: FixedAnnualCosts {
                insurance: 3000.0,
                utilities: 4200.0,
                internet: 900.0,
                supplies: 1500.0,
                maintenance: 1200.0,
                marketing: 600.0,
                licenses: 700.0,
            },
        },
        financing: FinancingProfile {
            property_value: 800_000.0,
            down_payment: 160_000.0,
            loan_amount: 640_000.0,
            interest_rate_pct: pct(6.5),
            loan_term_years: 30.0,
            furnishing_costs: 25_000.0,
            setup_costs: 5_000.0,
        },
        seasonality: MarketSeasonality::Moderate,
    }
}

/// The reference property bought outright, which makes money.
pub fn create_cash_purchase_input() -> ProjectionInput {
    let mut input: ProjectionInput = create_test_input();
    input.financing.down_payment = 800_000.0;
    input.financing.loan_amount = 0.0;
    input
}
