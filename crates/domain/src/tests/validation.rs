// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_input, pct};
use crate::{
    DomainError, ErrorKind, Percentage, ProjectionInput, validate_expense_assumptions,
    validate_financing_profile, validate_occupancy_assumptions, validate_pricing_policy,
    validate_projection_input,
};

#[test]
fn test_reference_input_is_valid() {
    let input: ProjectionInput = create_test_input();
    assert!(validate_projection_input(&input).is_ok());
}

#[test]
fn test_negative_nightly_rate_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.pricing.base_nightly_rate = -10.0;

    let result: Result<(), DomainError> = validate_pricing_policy(&input.pricing);
    assert_eq!(
        result.unwrap_err(),
        DomainError::NegativeAmount {
            field: "baseNightlyRate",
            value: -10.0,
        }
    );
}

#[test]
fn test_nan_cleaning_fee_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.pricing.cleaning_fee_per_stay = f64::NAN;

    let err: DomainError = validate_projection_input(&input).unwrap_err();
    assert_eq!(
        err,
        DomainError::NonFiniteValue {
            field: "cleaningFeePerStay"
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_occupancy_above_one_hundred_is_rejected_not_clamped() {
    // Deserialized percentages skip the constructor checks
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.peak_occupancy_pct = serde_json::from_str::<Percentage>("120.0").unwrap();

    let result: Result<(), DomainError> = validate_occupancy_assumptions(&input.occupancy);
    assert_eq!(
        result.unwrap_err(),
        DomainError::InvalidPercentage {
            field: "peakOccupancyPct",
            value: 120.0,
            max: Some(100.0),
        }
    );
}

#[test]
fn test_negative_occupancy_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.off_peak_occupancy_pct = serde_json::from_str::<Percentage>("-1.0").unwrap();

    let err: DomainError = validate_projection_input(&input).unwrap_err();
    assert_eq!(err.field(), Some("offPeakOccupancyPct"));
}

#[test]
fn test_zero_stay_length_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.average_stay_length_nights = 0.0;

    let result: Result<(), DomainError> = validate_occupancy_assumptions(&input.occupancy);
    assert_eq!(
        result.unwrap_err(),
        DomainError::NonPositiveValue {
            field: "averageStayLengthNights",
            value: 0.0,
        }
    );
}

#[test]
fn test_all_zero_occupancy_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.average_occupancy_pct = pct(0.0);
    input.occupancy.peak_occupancy_pct = pct(0.0);
    input.occupancy.off_peak_occupancy_pct = pct(0.0);

    let result: Result<(), DomainError> = validate_occupancy_assumptions(&input.occupancy);
    assert_eq!(result.unwrap_err(), DomainError::NoRentedNights);
}

#[test]
fn test_single_occupied_season_is_enough() {
    let mut input: ProjectionInput = create_test_input();
    input.occupancy.average_occupancy_pct = pct(0.0);
    input.occupancy.off_peak_occupancy_pct = pct(0.0);

    assert!(validate_occupancy_assumptions(&input.occupancy).is_ok());
}

#[test]
fn test_fee_above_one_hundred_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.expenses.management_fee_pct = pct(101.0);

    let err: DomainError = validate_expense_assumptions(&input.expenses).unwrap_err();
    assert_eq!(err.field(), Some("managementFeePct"));
}

#[test]
fn test_negative_fixed_cost_reports_cost_name() {
    let mut input: ProjectionInput = create_test_input();
    input.expenses.fixed_costs.marketing = -50.0;

    let result: Result<(), DomainError> = validate_expense_assumptions(&input.expenses);
    assert_eq!(
        result.unwrap_err(),
        DomainError::NegativeAmount {
            field: "marketing",
            value: -50.0,
        }
    );
}

#[test]
fn test_zero_loan_term_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.loan_term_years = 0.0;

    let err: DomainError = validate_financing_profile(&input.financing).unwrap_err();
    assert_eq!(err.field(), Some("loanTermYears"));
}

#[test]
fn test_zero_property_value_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.property_value = 0.0;

    let err: DomainError = validate_financing_profile(&input.financing).unwrap_err();
    assert_eq!(err.field(), Some("propertyValue"));
}

#[test]
fn test_zero_total_investment_is_rejected() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.down_payment = 0.0;
    input.financing.furnishing_costs = 0.0;
    input.financing.setup_costs = 0.0;

    let result: Result<(), DomainError> = validate_financing_profile(&input.financing);
    assert_eq!(
        result.unwrap_err(),
        DomainError::NonPositiveValue {
            field: "totalInvestment",
            value: 0.0,
        }
    );
}

#[test]
fn test_interest_rate_above_one_hundred_is_allowed() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.interest_rate_pct = pct(120.0);

    assert!(validate_financing_profile(&input.financing).is_ok());
}

#[test]
fn test_first_failing_section_is_reported() {
    let mut input: ProjectionInput = create_test_input();
    input.pricing.base_nightly_rate = -1.0;
    input.financing.loan_term_years = 0.0;

    let err: DomainError = validate_projection_input(&input).unwrap_err();
    assert_eq!(err.field(), Some("baseNightlyRate"));
}
