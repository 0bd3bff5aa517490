// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{assert_close, create_cash_purchase_input, create_test_input, pct};
use crate::{ProjectionError, ProjectionResult, project};
use str_projection_domain::{DomainError, Percentage, ProjectionInput, Recommendation, Season};

#[test]
fn test_reference_scenario() {
    let result: ProjectionResult = project(&create_test_input()).unwrap();

    assert_close(result.total_nights, 237.1, 0.05);
    assert_close(result.total_gross_revenue, 46_747.0, 1.0);
    assert_close(result.total_annual_expenses, 24_708.0, 1.0);
    assert_close(result.net_operating_income, 22_039.0, 1.0);
    assert_close(result.annual_mortgage, 48_546.0, 5.0);
    assert_close(result.cash_flow, -26_507.0, 5.0);
    assert_close(result.cash_on_cash_return_pct, -13.9, 0.1);
    assert_close(result.break_even_occupancy_pct.unwrap(), 115.0, 0.5);
    assert_eq!(result.payback_period_years, None);
}

#[test]
fn test_reference_scenario_secondary_metrics() {
    let result: ProjectionResult = project(&create_test_input()).unwrap();

    assert_close(result.gross_annual_revenue, 41_327.28, 0.01);
    assert_close(result.net_annual_revenue, 43_989.08, 0.01);
    assert_close(result.monthly_mortgage, 4_045.24, 0.01);
    assert_close(result.total_investment, 190_000.0, 1e-9);
    assert_close(result.average_daily_rate, 197.15, 0.01);
    assert_close(result.rev_par, 128.07, 0.01);
    assert_close(result.gross_yield_pct, 5.84, 0.01);
    assert_close(result.net_yield_pct, 2.75, 0.01);
}

#[test]
fn test_break_even_above_full_occupancy_is_not_clamped() {
    let result: ProjectionResult = project(&create_test_input()).unwrap();
    let break_even: f64 = result.break_even_occupancy_pct.unwrap();
    assert!(break_even > 100.0);
    assert!(break_even.is_finite());
}

#[test]
fn test_reference_scenario_recommendations() {
    let result: ProjectionResult = project(&create_test_input()).unwrap();
    assert_eq!(
        result.recommendations,
        vec![
            Recommendation::ImproveCashOnCash,
            Recommendation::TightMargins,
            Recommendation::NegativeCashFlow,
        ]
    );
}

#[test]
fn test_seasonal_breakdown_is_in_season_order() {
    let result: ProjectionResult = project(&create_test_input()).unwrap();
    let seasons: Vec<Season> = result
        .seasonal_breakdown
        .iter()
        .map(|segment| segment.season)
        .collect();
    assert_eq!(seasons, Season::ALL.to_vec());

    for segment in result.seasonal_breakdown {
        assert_eq!(segment.months_in_segment, 4);
    }
}

#[test]
fn test_cash_purchase_has_payback() {
    let result: ProjectionResult = project(&create_cash_purchase_input()).unwrap();

    assert!(result.cash_flow > 0.0);
    assert_close(result.annual_mortgage, 0.0, 1e-9);
    let payback: f64 = result.payback_period_years.unwrap();
    assert_close(payback, result.total_investment / result.cash_flow, 1e-9);
    assert!(result.break_even_occupancy_pct.unwrap() < 100.0);
}

#[test]
fn test_degenerate_break_even_still_reports_revenue() {
    let mut input: ProjectionInput = create_test_input();
    input.pricing.base_nightly_rate = 1.0;
    input.pricing.cleaning_fee_per_stay = 1_000.0;
    input.expenses.management_fee_pct = pct(100.0);

    let result: ProjectionResult = project(&input).unwrap();

    assert_eq!(result.break_even_occupancy_pct, None);
    assert_eq!(result.payback_period_years, None);
    assert!(result.total_gross_revenue > 0.0);
    assert!(result.cash_flow < 0.0);
    assert!(
        result
            .recommendations
            .contains(&Recommendation::BreakEvenUnreachable)
    );
}

#[test]
fn test_invalid_occupancy_fails_before_computation() {
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.average_occupancy_pct = serde_json::from_str::<Percentage>("150.0").unwrap();

    let err: ProjectionError = project(&input).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::InvalidInput(DomainError::InvalidPercentage {
            field: "averageOccupancyPct",
            value: 150.0,
            max: Some(100.0),
        })
    );
}

#[test]
fn test_zero_stay_length_is_invalid_input() {
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.average_stay_length_nights = 0.0;

    let err: ProjectionError = project(&input).unwrap_err();
    assert!(matches!(err, ProjectionError::InvalidInput(_)));
    assert_eq!(err.domain_error().field(), Some("averageStayLengthNights"));
}

#[test]
fn test_zero_total_investment_is_invalid_input() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.down_payment = 0.0;
    input.financing.furnishing_costs = 0.0;
    input.financing.setup_costs = 0.0;

    let err: ProjectionError = project(&input).unwrap_err();
    assert_eq!(err.domain_error().field(), Some("totalInvestment"));
}

#[test]
fn test_result_round_trips_through_json() {
    let result: ProjectionResult = project(&create_test_input()).unwrap();
    let json: String = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"payback_period_years\":null"));

    let parsed: ProjectionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_overflowing_mortgage_is_invalid_input() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.loan_term_years = 1e-305;

    let err: ProjectionError = project(&input).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::InvalidInput(DomainError::NumericOverflow {
            quantity: "monthlyPayment",
        })
    );
}
