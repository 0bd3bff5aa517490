// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::percentage::Percentage;
use crate::types::{
    ExpenseAssumptions, FinancingProfile, OccupancyAssumptions, PricingPolicy, ProjectionInput,
};

/// Validates a complete projection input.
///
/// Checks run section by section in a fixed order and the first failure is
/// returned, so the same input always reports the same field.
///
/// # Arguments
///
/// * `input` - The projection input to validate
///
/// # Errors
///
/// Returns an error if:
/// - Any monetary amount is negative or not finite
/// - Any bounded percentage lies outside `[0, 100]`
/// - Any premium percentage is negative
/// - The average stay length, loan term, property value or total investment is not positive
/// - Every season has zero occupancy
pub fn validate_projection_input(input: &ProjectionInput) -> Result<(), DomainError> {
    validate_pricing_policy(&input.pricing)?;
    validate_occupancy_assumptions(&input.occupancy)?;
    validate_expense_assumptions(&input.expenses)?;
    validate_financing_profile(&input.financing)?;
    Ok(())
}

/// Validates the pricing policy.
///
/// # Errors
///
/// Returns an error if a rate or fee is negative, or a premium is invalid.
pub fn validate_pricing_policy(pricing: &PricingPolicy) -> Result<(), DomainError> {
    require_non_negative("baseNightlyRate", pricing.base_nightly_rate)?;
    require_premium("weekendPremiumPct", pricing.weekend_premium_pct)?;
    require_premium("peakSeasonPremiumPct", pricing.peak_season_premium_pct)?;
    require_non_negative("minimumStayNights", pricing.minimum_stay_nights)?;
    require_non_negative("cleaningFeePerStay", pricing.cleaning_fee_per_stay)?;
    Ok(())
}

/// Validates the occupancy assumptions.
///
/// # Errors
///
/// Returns an error if an occupancy lies outside `[0, 100]`, all
/// occupancies are zero, or the average stay length is not positive.
pub fn validate_occupancy_assumptions(
    occupancy: &OccupancyAssumptions,
) -> Result<(), DomainError> {
    require_bounded("averageOccupancyPct", occupancy.average_occupancy_pct)?;
    require_bounded("peakOccupancyPct", occupancy.peak_occupancy_pct)?;
    require_bounded("offPeakOccupancyPct", occupancy.off_peak_occupancy_pct)?;
    require_positive(
        "averageStayLengthNights",
        occupancy.average_stay_length_nights,
    )?;

    // Rule: something must be rented, otherwise nightly averages are undefined
    let any_occupied: bool = [
        occupancy.average_occupancy_pct,
        occupancy.peak_occupancy_pct,
        occupancy.off_peak_occupancy_pct,
    ]
    .iter()
    .any(|pct| pct.value() > 0.0);
    if !any_occupied {
        return Err(DomainError::NoRentedNights);
    }

    Ok(())
}

/// Validates the expense assumptions.
///
/// # Errors
///
/// Returns an error if a fee lies outside `[0, 100]` or a fixed cost is negative.
pub fn validate_expense_assumptions(expenses: &ExpenseAssumptions) -> Result<(), DomainError> {
    require_bounded("managementFeePct", expenses.management_fee_pct)?;
    require_bounded("platformCommissionPct", expenses.platform_commission_pct)?;
    require_bounded("paymentProcessingPct", expenses.payment_processing_pct)?;
    for (field, amount) in expenses.fixed_costs.items() {
        require_non_negative(field, amount)?;
    }
    Ok(())
}

/// Validates the financing profile.
///
/// # Errors
///
/// Returns an error if an amount is negative, the interest rate is invalid,
/// or the property value, loan term or total investment is not positive.
pub fn validate_financing_profile(financing: &FinancingProfile) -> Result<(), DomainError> {
    require_positive("propertyValue", financing.property_value)?;
    require_non_negative("downPayment", financing.down_payment)?;
    require_non_negative("loanAmount", financing.loan_amount)?;
    require_premium("interestRatePct", financing.interest_rate_pct)?;
    require_positive("loanTermYears", financing.loan_term_years)?;
    require_non_negative("furnishingCosts", financing.furnishing_costs)?;
    require_non_negative("setupCosts", financing.setup_costs)?;
    require_positive("totalInvestment", financing.total_investment())?;
    Ok(())
}

fn require_finite(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFiniteValue { field })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), DomainError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(DomainError::NegativeAmount { field, value });
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), DomainError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(DomainError::NonPositiveValue { field, value });
    }
    Ok(())
}

fn require_bounded(field: &'static str, pct: Percentage) -> Result<(), DomainError> {
    if Percentage::is_valid_bounded(pct.value()) {
        Ok(())
    } else {
        Err(DomainError::InvalidPercentage {
            field,
            value: pct.value(),
            max: Some(Percentage::MAX_BOUNDED),
        })
    }
}

fn require_premium(field: &'static str, pct: Percentage) -> Result<(), DomainError> {
    if Percentage::is_valid_premium(pct.value()) {
        Ok(())
    } else {
        Err(DomainError::InvalidPercentage {
            field,
            value: pct.value(),
            max: None,
        })
    }
}
