// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::percentage::Percentage;
use crate::seasonality::MONTHS_PER_YEAR;
use crate::validation::require_positive;
use serde::{Deserialize, Serialize};

/// Level payment schedule for a fixed-rate mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgagePayment {
    /// Monthly payment of principal and interest.
    pub monthly_payment: f64,
    /// Annual debt service (`monthly_payment * 12`).
    pub annual_payment: f64,
    /// Interest paid over the full term.
    pub total_interest: f64,
}

/// Computes the level monthly payment of a fixed-rate loan.
///
/// Uses the standard amortization formula:
/// `M = P * r(1+r)^n / ((1+r)^n - 1)`
///
/// Where:
/// - `P` = loan amount
/// - `r` = monthly rate (annual rate / 12)
/// - `n` = term in months
///
/// `(1+r)^n - 1` is evaluated as `expm1(n * ln1p(r))` so it does not cancel
/// to zero for tiny rates. Where it still underflows to zero, including at
/// `r = 0`, the payment is `P / n`.
///
/// # Arguments
///
/// * `loan_amount` - Principal borrowed
/// * `interest_rate` - Annual interest rate
/// * `loan_term_years` - Term of the loan in years
///
/// # Errors
///
/// Returns `DomainError::NonPositiveValue` if `loan_term_years` is not
/// greater than 0, and `DomainError::NumericOverflow` if the payment is too
/// large to represent.
pub fn amortize(
    loan_amount: f64,
    interest_rate: Percentage,
    loan_term_years: f64,
) -> Result<MortgagePayment, DomainError> {
    require_positive("loanTermYears", loan_term_years)?;

    let months_per_year: f64 = f64::from(MONTHS_PER_YEAR);
    let monthly_rate: f64 = interest_rate.to_fraction() / months_per_year;
    let payments: f64 = loan_term_years * months_per_year;

    // growth = (1+r)^n - 1
    let growth: f64 = (payments * monthly_rate.ln_1p()).exp_m1();
    let monthly_payment: f64 = if growth == 0.0 {
        loan_amount / payments
    } else {
        // r(1+r)^n / ((1+r)^n - 1) == r * (1 + 1/growth)
        loan_amount * monthly_rate * (1.0 + growth.recip())
    };

    let payment: MortgagePayment = MortgagePayment {
        monthly_payment,
        annual_payment: monthly_payment * months_per_year,
        total_interest: monthly_payment.mul_add(payments, -loan_amount),
    };
    if !payment.annual_payment.is_finite() || !payment.total_interest.is_finite() {
        return Err(DomainError::NumericOverflow {
            quantity: "monthlyPayment",
        });
    }
    Ok(payment)
}
