// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::metrics::InvestmentMetrics;

/// Estimates the years of cash flow needed to recover the cash invested.
///
/// # Errors
///
/// Returns `DomainError::NoPayback` if annual cash flow is zero or negative,
/// or too small for the period to be finite.
pub fn estimate_payback(metrics: &InvestmentMetrics) -> Result<f64, DomainError> {
    let cash_flow: f64 = metrics.cash_flow;
    if !cash_flow.is_finite() || cash_flow <= 0.0 {
        return Err(DomainError::NoPayback { cash_flow });
    }
    let years: f64 = metrics.total_investment / cash_flow;
    if !years.is_finite() {
        return Err(DomainError::NoPayback { cash_flow });
    }
    Ok(years)
}
