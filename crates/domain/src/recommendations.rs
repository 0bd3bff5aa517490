// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Threshold rules that turn a projection into advice.
//!
//! Rules are evaluated in table order against a read-only
//! [`RecommendationContext`]. Each rule is independent; the output is the
//! ordered subset of rules whose condition holds.

use crate::metrics::InvestmentMetrics;
use crate::types::ProjectionInput;
use serde::{Deserialize, Serialize};

/// Occupancy below which pricing and marketing should be reviewed.
pub const LOW_OCCUPANCY_PCT: f64 = 60.0;
/// Cash-on-cash return below which costs or revenue should be improved.
pub const TARGET_CASH_ON_CASH_PCT: f64 = 8.0;
/// Break-even occupancy above which margins are considered tight.
pub const TIGHT_BREAK_EVEN_PCT: f64 = 70.0;
/// Management fee above which self-management is worth considering.
pub const HIGH_MANAGEMENT_FEE_PCT: f64 = 20.0;
/// Minimum stay above which shorter bookings are being turned away.
pub const LONG_MINIMUM_STAY_NIGHTS: f64 = 3.0;
/// Peak premium below which a busy peak season is under-priced.
pub const LOW_PEAK_PREMIUM_PCT: f64 = 20.0;
/// Peak occupancy at or above which the peak season counts as busy.
pub const BUSY_PEAK_OCCUPANCY_PCT: f64 = 80.0;
/// Payback period above which recovering the cash invested is slow.
pub const SLOW_PAYBACK_YEARS: f64 = 20.0;
/// Cap rate at or above which the property is a strong performer.
pub const STRONG_CAP_RATE_PCT: f64 = 8.0;

/// An advisory produced by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Average occupancy is low.
    IncreaseOccupancy,
    /// Cash-on-cash return is below target.
    ImproveCashOnCash,
    /// Break-even occupancy leaves little margin.
    TightMargins,
    /// No occupancy level covers the costs.
    BreakEvenUnreachable,
    /// Debt service exceeds net operating income.
    NegativeCashFlow,
    /// Management fee is high.
    ReviewManagementFee,
    /// Minimum stay is long.
    ShortenMinimumStay,
    /// Busy peak season with a small premium.
    RaisePeakPremium,
    /// Cash flow is positive but recovers the investment slowly.
    SlowPayback,
    /// Strong cap rate with positive cash flow.
    StrongInvestment,
}

impl Recommendation {
    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IncreaseOccupancy => "increase_occupancy",
            Self::ImproveCashOnCash => "improve_cash_on_cash",
            Self::TightMargins => "tight_margins",
            Self::BreakEvenUnreachable => "break_even_unreachable",
            Self::NegativeCashFlow => "negative_cash_flow",
            Self::ReviewManagementFee => "review_management_fee",
            Self::ShortenMinimumStay => "shorten_minimum_stay",
            Self::RaisePeakPremium => "raise_peak_premium",
            Self::SlowPayback => "slow_payback",
            Self::StrongInvestment => "strong_investment",
        }
    }

    /// Returns the advisory text shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::IncreaseOccupancy => {
                "Average occupancy is below 60%. Review nightly rates and listing marketing to attract more bookings."
            }
            Self::ImproveCashOnCash => {
                "Cash-on-cash return is below 8%. Look for ways to reduce operating costs or increase revenue."
            }
            Self::TightMargins => {
                "Break-even occupancy is above 70%, leaving tight margins. A few slow months could push the property into a loss."
            }
            Self::BreakEvenUnreachable => {
                "Variable costs exceed the average nightly rate, so no occupancy level covers the costs. Raise rates or cut per-stay costs."
            }
            Self::NegativeCashFlow => {
                "Cash flow is negative. Consider a larger down payment, a lower interest rate, or a longer loan term."
            }
            Self::ReviewManagementFee => {
                "Management fees above 20% are high. Consider negotiating the fee or self-managing."
            }
            Self::ShortenMinimumStay => {
                "A minimum stay above 3 nights turns away short bookings. Consider shortening it outside the peak season."
            }
            Self::RaisePeakPremium => {
                "Peak occupancy is strong but the peak premium is below 20%. There is room to raise peak season rates."
            }
            Self::SlowPayback => {
                "Payback period is longer than 20 years. Reducing setup and furnishing spend shortens the time to recover your cash."
            }
            Self::StrongInvestment => {
                "Cap rate of 8% or more with positive cash flow. This is a strong short-term rental investment."
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Everything the rules may look at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    /// The projection input.
    pub input: &'a ProjectionInput,
    /// The computed investment metrics.
    pub metrics: &'a InvestmentMetrics,
    /// Break-even occupancy, `None` if no break-even point exists.
    pub break_even_occupancy_pct: Option<f64>,
    /// Payback period, `None` if the investment is never paid back.
    pub payback_period_years: Option<f64>,
}

type Rule = (Recommendation, fn(&RecommendationContext<'_>) -> bool);

const RULES: [Rule; 10] = [
    (Recommendation::IncreaseOccupancy, |ctx| {
        ctx.input.occupancy.average_occupancy_pct.value() < LOW_OCCUPANCY_PCT
    }),
    (Recommendation::ImproveCashOnCash, |ctx| {
        ctx.metrics.cash_on_cash_return_pct < TARGET_CASH_ON_CASH_PCT
    }),
    (Recommendation::TightMargins, |ctx| {
        ctx.break_even_occupancy_pct
            .is_some_and(|pct| pct > TIGHT_BREAK_EVEN_PCT)
    }),
    (Recommendation::BreakEvenUnreachable, |ctx| {
        ctx.break_even_occupancy_pct.is_none()
    }),
    (Recommendation::NegativeCashFlow, |ctx| {
        ctx.metrics.cash_flow < 0.0
    }),
    (Recommendation::ReviewManagementFee, |ctx| {
        ctx.input.expenses.management_fee_pct.value() > HIGH_MANAGEMENT_FEE_PCT
    }),
    (Recommendation::ShortenMinimumStay, |ctx| {
        ctx.input.pricing.minimum_stay_nights > LONG_MINIMUM_STAY_NIGHTS
    }),
    (Recommendation::RaisePeakPremium, |ctx| {
        ctx.input.pricing.peak_season_premium_pct.value() < LOW_PEAK_PREMIUM_PCT
            && ctx.input.occupancy.peak_occupancy_pct.value() >= BUSY_PEAK_OCCUPANCY_PCT
    }),
    (Recommendation::SlowPayback, |ctx| {
        ctx.payback_period_years
            .is_some_and(|years| years > SLOW_PAYBACK_YEARS)
    }),
    (Recommendation::StrongInvestment, |ctx| {
        ctx.metrics.cap_rate_pct() >= STRONG_CAP_RATE_PCT && ctx.metrics.cash_flow > 0.0
    }),
];

/// Evaluates every rule in order and returns the ones that apply.
#[must_use]
pub fn evaluate_recommendations(context: &RecommendationContext<'_>) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|(_, applies)| applies(context))
        .map(|(recommendation, _)| *recommendation)
        .collect()
}
