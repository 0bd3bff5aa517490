// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable formatting of projection figures.

use crate::request_response::ProjectionResponse;

/// Placeholder for a metric that does not exist.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats an amount as whole dollars with thousands separators.
///
/// `46747.17` becomes `$46,747` and `-26504.03` becomes `-$26,504`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::from(NOT_AVAILABLE);
    }

    let digits: String = format!("{:.0}", amount.abs());
    let grouped: String = group_thousands(&digits);
    if amount < 0.0 && digits != "0" {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a percentage with one decimal place, e.g. `12.3%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        String::from(NOT_AVAILABLE)
    }
}

/// Formats an optional percentage, rendering `None` as `N/A`.
#[must_use]
pub fn format_optional_percentage(value: Option<f64>) -> String {
    value.map_or_else(|| String::from(NOT_AVAILABLE), format_percentage)
}

/// Formats an optional period in years, rendering `None` as `N/A`.
#[must_use]
pub fn format_years(value: Option<f64>) -> String {
    match value {
        Some(years) if years.is_finite() => format!("{years:.1} years"),
        _ => String::from(NOT_AVAILABLE),
    }
}

fn group_thousands(digits: &str) -> String {
    let len: usize = digits.len();
    let mut grouped: String = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl ProjectionResponse {
    /// Renders the headline figures and recommendations as plain text.
    #[must_use]
    pub fn display_summary(&self) -> String {
        let mut lines: Vec<String> = vec![
            format!(
                "Gross revenue:          {}",
                format_currency(self.total_gross_revenue)
            ),
            format!(
                "Operating expenses:     {}",
                format_currency(self.total_annual_expenses)
            ),
            format!(
                "Net operating income:   {}",
                format_currency(self.net_operating_income)
            ),
            format!(
                "Annual mortgage:        {}",
                format_currency(self.annual_mortgage)
            ),
            format!("Cash flow:              {}", format_currency(self.cash_flow)),
            format!(
                "Cap rate:               {}",
                format_percentage(self.cap_rate_pct)
            ),
            format!(
                "Cash-on-cash return:    {}",
                format_percentage(self.cash_on_cash_return_pct)
            ),
            format!(
                "Break-even occupancy:   {}",
                format_optional_percentage(self.break_even_occupancy_pct)
            ),
            format!(
                "Payback period:         {}",
                format_years(self.payback_period_years)
            ),
        ];

        if !self.recommendations.is_empty() {
            lines.push(String::from("Recommendations:"));
            lines.extend(
                self.recommendations
                    .iter()
                    .map(|recommendation| format!("- {}", recommendation.message)),
            );
        }

        lines.join("\n")
    }
}
