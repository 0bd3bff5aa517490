// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{Pipeline, assert_close, create_test_input, pct, run_pipeline};
use crate::{DomainError, ErrorKind, ProjectionInput, solve_break_even};

#[test]
fn test_reference_break_even_exceeds_full_occupancy() {
    let pipeline: Pipeline = run_pipeline(&create_test_input());
    let break_even: f64 = solve_break_even(
        &pipeline.revenue,
        &pipeline.expenses,
        &pipeline.mortgage,
        &pipeline.metrics,
    )
    .unwrap();

    assert_close(break_even, 115.4, 0.05);
    assert!(break_even > 100.0);
}

#[test]
fn test_unleveraged_property_breaks_even_below_full_occupancy() {
    let mut input: ProjectionInput = create_test_input();
    input.financing.loan_amount = 0.0;
    input.financing.down_payment = 800_000.0;
    let pipeline: Pipeline = run_pipeline(&input);

    let break_even: f64 = solve_break_even(
        &pipeline.revenue,
        &pipeline.expenses,
        &pipeline.mortgage,
        &pipeline.metrics,
    )
    .unwrap();

    // 12,100 fixed over a ~143.97 net nightly rate
    assert_close(break_even, 12_100.0 / 143.972_626 / 365.0 * 100.0, 0.01);
    assert!(break_even > 0.0 && break_even < 100.0);
}

#[test]
fn test_non_positive_net_rate_has_no_break_even() {
    let mut input: ProjectionInput = create_test_input();
    // Cleaning cost alone exceeds the nightly rate
    input.pricing.base_nightly_rate = 1.0;
    input.pricing.cleaning_fee_per_stay = 1_000.0;
    input.expenses.management_fee_pct = pct(100.0);
    let pipeline: Pipeline = run_pipeline(&input);

    let err: DomainError = solve_break_even(
        &pipeline.revenue,
        &pipeline.expenses,
        &pipeline.mortgage,
        &pipeline.metrics,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DegenerateBreakEven);
    match err {
        DomainError::DegenerateBreakEven { net_rate_per_night } => {
            assert!(net_rate_per_night <= 0.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_overflowing_fixed_costs_have_no_break_even() {
    let mut pipeline: Pipeline = run_pipeline(&create_test_input());
    pipeline.expenses.fixed_costs = f64::MAX;
    pipeline.mortgage.annual_payment = f64::MAX;

    let err: DomainError = solve_break_even(
        &pipeline.revenue,
        &pipeline.expenses,
        &pipeline.mortgage,
        &pipeline.metrics,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DegenerateBreakEven);
}
