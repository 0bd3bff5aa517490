// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ErrorKind, Season};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::PercentageOutOfRange {
        value: 120.0,
        max: Some(100.0),
    };
    assert_eq!(
        format!("{err}"),
        "Percentage 120 is out of range: must be between 0 and 100"
    );

    let err: DomainError = DomainError::PercentageOutOfRange {
        value: -5.0,
        max: None,
    };
    assert_eq!(
        format!("{err}"),
        "Percentage -5 is out of range: must be a finite, non-negative value"
    );

    let err: DomainError = DomainError::InvalidPercentage {
        field: "peakOccupancyPct",
        value: 101.0,
        max: Some(100.0),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid percentage for peakOccupancyPct: 101 must be between 0 and 100"
    );

    let err: DomainError = DomainError::NegativeAmount {
        field: "insurance",
        value: -1.0,
    };
    assert_eq!(format!("{err}"), "Invalid insurance: -1. Must not be negative");

    let err: DomainError = DomainError::NonPositiveValue {
        field: "loanTermYears",
        value: 0.0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid loanTermYears: 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::NonFiniteValue {
        field: "baseNightlyRate",
    };
    assert_eq!(
        format!("{err}"),
        "Invalid baseNightlyRate: value must be a finite number"
    );

    let err: DomainError = DomainError::InvalidSeasonality(String::from("extreme"));
    assert_eq!(
        format!("{err}"),
        "Invalid seasonality: 'extreme'. Must be one of high, moderate, low"
    );

    let err: DomainError = DomainError::OccupancyExceedsCapacity {
        season: Season::Peak,
        occupancy_pct: 110.5,
    };
    assert_eq!(
        format!("{err}"),
        "Effective peak occupancy of 110.5% exceeds 100%"
    );

    let err: DomainError = DomainError::NumericOverflow {
        quantity: "monthlyPayment",
    };
    assert_eq!(
        format!("{err}"),
        "Computed monthlyPayment is not a finite number"
    );

    let err: DomainError = DomainError::NoPayback { cash_flow: -250.0 };
    assert_eq!(
        format!("{err}"),
        "Investment is never paid back: annual cash flow is -250"
    );
}

#[test]
fn test_error_kind_classification() {
    assert_eq!(
        DomainError::NegativeAmount {
            field: "supplies",
            value: -1.0
        }
        .kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(DomainError::NoRentedNights.kind(), ErrorKind::InvalidInput);
    assert_eq!(
        DomainError::NumericOverflow { quantity: "cashFlow" }.kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        DomainError::DegenerateBreakEven {
            net_rate_per_night: -3.0
        }
        .kind(),
        ErrorKind::DegenerateBreakEven
    );
    assert_eq!(
        DomainError::NoPayback { cash_flow: 0.0 }.kind(),
        ErrorKind::NoPayback
    );
}

#[test]
fn test_error_field_reports_offending_input() {
    let err: DomainError = DomainError::NonPositiveValue {
        field: "averageStayLengthNights",
        value: 0.0,
    };
    assert_eq!(err.field(), Some("averageStayLengthNights"));
    assert_eq!(DomainError::NoRentedNights.field(), None);
}
