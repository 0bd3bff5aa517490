// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use crate::error::{ApiError, ApiResult, translate_domain_error};
use serde::{Deserialize, Serialize};
use str_projection::ProjectionResult;
use str_projection_domain::{
    ExpenseAssumptions, ExpenseBreakdown, FinancingProfile, FixedAnnualCosts, MarketSeasonality,
    OccupancyAssumptions, Percentage, PricingPolicy, ProjectionInput, Recommendation,
    SeasonalSegment,
};

/// Pricing section of a projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Base nightly rate before premiums.
    pub base_nightly_rate: f64,
    /// Weekend premium, in percent.
    pub weekend_premium_pct: f64,
    /// Peak season premium, in percent.
    pub peak_season_premium_pct: f64,
    /// Minimum nights per booking.
    pub minimum_stay_nights: f64,
    /// Cleaning fee charged per stay.
    pub cleaning_fee_per_stay: f64,
}

/// Occupancy section of a projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyRequest {
    /// Shoulder season occupancy, in percent.
    pub average_occupancy_pct: f64,
    /// Peak season occupancy, in percent.
    pub peak_occupancy_pct: f64,
    /// Off-peak season occupancy, in percent.
    pub off_peak_occupancy_pct: f64,
    /// Average nights per stay.
    pub average_stay_length_nights: f64,
}

/// Annual fixed costs section of a projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCostsRequest {
    pub insurance: f64,
    pub utilities: f64,
    pub internet: f64,
    pub supplies: f64,
    pub maintenance: f64,
    pub marketing: f64,
    pub licenses: f64,
}

/// Expense section of a projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesRequest {
    /// Management fee, in percent of net revenue.
    pub management_fee_pct: f64,
    /// Platform commission, in percent of gross revenue.
    pub platform_commission_pct: f64,
    /// Payment processing fee, in percent of gross revenue.
    pub payment_processing_pct: f64,
    /// Itemized annual fixed costs.
    pub fixed_costs: FixedCostsRequest,
}

/// Financing section of a projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingRequest {
    pub property_value: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    /// Annual interest rate, in percent.
    pub interest_rate_pct: f64,
    pub loan_term_years: f64,
    pub furnishing_costs: f64,
    pub setup_costs: f64,
}

/// API request to run a projection.
///
/// This DTO is distinct from domain types and represents the API contract.
/// Percentages arrive as raw numbers and are range-checked by [`Self::into_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub pricing: PricingRequest,
    pub occupancy: OccupancyRequest,
    pub expenses: ExpensesRequest,
    pub financing: FinancingRequest,
    /// Market seasonality selector (`high`, `moderate` or `low`). Defaults to `moderate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<String>,
}

impl ProjectionRequest {
    /// Converts this request into the domain input.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming the first percentage field
    /// that is out of range, or the seasonality selector if it is unknown.
    pub fn into_input(self) -> ApiResult<ProjectionInput> {
        let pricing: PricingPolicy = PricingPolicy {
            base_nightly_rate: self.pricing.base_nightly_rate,
            weekend_premium_pct: premium("weekendPremiumPct", self.pricing.weekend_premium_pct)?,
            peak_season_premium_pct: premium(
                "peakSeasonPremiumPct",
                self.pricing.peak_season_premium_pct,
            )?,
            minimum_stay_nights: self.pricing.minimum_stay_nights,
            cleaning_fee_per_stay: self.pricing.cleaning_fee_per_stay,
        };

        let occupancy: OccupancyAssumptions = OccupancyAssumptions {
            average_occupancy_pct: bounded(
                "averageOccupancyPct",
                self.occupancy.average_occupancy_pct,
            )?,
            peak_occupancy_pct: bounded("peakOccupancyPct", self.occupancy.peak_occupancy_pct)?,
            off_peak_occupancy_pct: bounded(
                "offPeakOccupancyPct",
                self.occupancy.off_peak_occupancy_pct,
            )?,
            average_stay_length_nights: self.occupancy.average_stay_length_nights,
        };

        let fixed: &FixedCostsRequest = &self.expenses.fixed_costs;
        let expenses: ExpenseAssumptions = ExpenseAssumptions {
            management_fee_pct: bounded("managementFeePct", self.expenses.management_fee_pct)?,
            platform_commission_pct: bounded(
                "platformCommissionPct",
                self.expenses.platform_commission_pct,
            )?,
            payment_processing_pct: bounded(
                "paymentProcessingPct",
                self.expenses.payment_processing_pct,
            )?,
            fixed_costs: FixedAnnualCosts {
                insurance: fixed.insurance,
                utilities: fixed.utilities,
                internet: fixed.internet,
                supplies: fixed.supplies,
                maintenance: fixed.maintenance,
                marketing: fixed.marketing,
                licenses: fixed.licenses,
            },
        };

        let financing: FinancingProfile = FinancingProfile {
            property_value: self.financing.property_value,
            down_payment: self.financing.down_payment,
            loan_amount: self.financing.loan_amount,
            interest_rate_pct: premium("interestRatePct", self.financing.interest_rate_pct)?,
            loan_term_years: self.financing.loan_term_years,
            furnishing_costs: self.financing.furnishing_costs,
            setup_costs: self.financing.setup_costs,
        };

        let seasonality: MarketSeasonality = match &self.seasonality {
            Some(selector) => selector.parse().map_err(translate_domain_error)?,
            None => MarketSeasonality::default(),
        };

        Ok(ProjectionInput {
            pricing,
            occupancy,
            expenses,
            financing,
            seasonality,
        })
    }
}

fn bounded(field: &str, value: f64) -> ApiResult<Percentage> {
    Percentage::new(value).map_err(|err| ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    })
}

fn premium(field: &str, value: f64) -> ApiResult<Percentage> {
    Percentage::premium(value).map_err(|err| ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    })
}

/// Itemized operating expenses in a projection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdownResponse {
    pub platform_fees: f64,
    pub processing_fees: f64,
    pub management_fees: f64,
    pub cleaning_costs: f64,
    pub fixed_costs: f64,
    /// Everything above except fixed costs.
    pub variable_costs: f64,
    pub total_annual_expenses: f64,
}

impl From<&ExpenseBreakdown> for ExpenseBreakdownResponse {
    fn from(expenses: &ExpenseBreakdown) -> Self {
        Self {
            platform_fees: expenses.platform_fees,
            processing_fees: expenses.processing_fees,
            management_fees: expenses.management_fees,
            cleaning_costs: expenses.cleaning_costs,
            fixed_costs: expenses.fixed_costs,
            variable_costs: expenses.variable_costs(),
            total_annual_expenses: expenses.total_annual_expenses,
        }
    }
}

/// One season of a projection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalSegmentResponse {
    /// The season (`peak`, `shoulder` or `off_peak`).
    pub season: String,
    pub months_in_segment: u8,
    pub occupancy_pct: f64,
    pub adjusted_nightly_rate: f64,
    pub estimated_nights: f64,
    pub revenue: f64,
}

impl From<&SeasonalSegment> for SeasonalSegmentResponse {
    fn from(segment: &SeasonalSegment) -> Self {
        Self {
            season: String::from(segment.season.as_str()),
            months_in_segment: segment.months_in_segment,
            occupancy_pct: segment.occupancy_pct.value(),
            adjusted_nightly_rate: segment.adjusted_nightly_rate,
            estimated_nights: segment.estimated_nights,
            revenue: segment.revenue,
        }
    }
}

/// A recommendation in a projection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Stable machine-readable code.
    pub code: String,
    /// Advisory text.
    pub message: String,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            code: String::from(recommendation.code()),
            message: String::from(recommendation.message()),
        }
    }
}

/// API response for a completed projection.
///
/// `breakEvenOccupancyPct` and `paybackPeriodYears` serialize as `null`
/// when the metric does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub gross_annual_revenue: f64,
    pub total_gross_revenue: f64,
    pub net_annual_revenue: f64,
    pub total_annual_expenses: f64,
    pub net_operating_income: f64,
    pub cash_flow: f64,
    pub gross_yield_pct: f64,
    pub net_yield_pct: f64,
    pub cap_rate_pct: f64,
    pub cash_on_cash_return_pct: f64,
    pub average_daily_rate: f64,
    pub rev_par: f64,
    pub break_even_occupancy_pct: Option<f64>,
    pub payback_period_years: Option<f64>,
    pub monthly_mortgage: f64,
    pub annual_mortgage: f64,
    pub total_nights: f64,
    pub total_investment: f64,
    pub expenses: ExpenseBreakdownResponse,
    pub seasonal_breakdown: Vec<SeasonalSegmentResponse>,
    pub recommendations: Vec<RecommendationResponse>,
}

impl From<ProjectionResult> for ProjectionResponse {
    fn from(result: ProjectionResult) -> Self {
        Self {
            gross_annual_revenue: result.gross_annual_revenue,
            total_gross_revenue: result.total_gross_revenue,
            net_annual_revenue: result.net_annual_revenue,
            total_annual_expenses: result.total_annual_expenses,
            net_operating_income: result.net_operating_income,
            cash_flow: result.cash_flow,
            gross_yield_pct: result.gross_yield_pct,
            net_yield_pct: result.net_yield_pct,
            cap_rate_pct: result.cap_rate_pct,
            cash_on_cash_return_pct: result.cash_on_cash_return_pct,
            average_daily_rate: result.average_daily_rate,
            rev_par: result.rev_par,
            break_even_occupancy_pct: result.break_even_occupancy_pct,
            payback_period_years: result.payback_period_years,
            monthly_mortgage: result.monthly_mortgage,
            annual_mortgage: result.annual_mortgage,
            total_nights: result.total_nights,
            total_investment: result.total_investment,
            expenses: ExpenseBreakdownResponse::from(&result.expenses),
            seasonal_breakdown: result
                .seasonal_breakdown
                .iter()
                .map(SeasonalSegmentResponse::from)
                .collect(),
            recommendations: result
                .recommendations
                .into_iter()
                .map(RecommendationResponse::from)
                .collect(),
        }
    }
}

/// Returns the reference scenario as a request.
///
/// An $800k property, 20% down, 6.5% over 30 years, $150 base rate and
/// 65% average occupancy. It projects a negative cash flow.
#[must_use]
pub fn sample_request() -> ProjectionRequest {
    ProjectionRequest {
        pricing: PricingRequest {
            base_nightly_rate: 150.0,
            weekend_premium_pct: 20.0,
            peak_season_premium_pct: 30.0,
            minimum_stay_nights: 2.0,
            cleaning_fee_per_stay: 80.0,
        },
        occupancy: OccupancyRequest {
            average_occupancy_pct: 65.0,
            peak_occupancy_pct: 85.0,
            off_peak_occupancy_pct: 45.0,
            average_stay_length_nights: 3.5,
        },
        expenses: ExpensesRequest {
            management_fee_pct: 15.0,
            platform_commission_pct: 3.0,
            payment_processing_pct: 2.9,
            fixed_costs: FixedCostsRequest {
                insurance: 3000.0,
                utilities: 4200.0,
                internet: 900.0,
                supplies: 1500.0,
                maintenance: 1200.0,
                marketing: 600.0,
                licenses: 700.0,
            },
        },
        financing: FinancingRequest {
            property_value: 800_000.0,
            down_payment: 160_000.0,
            loan_amount: 640_000.0,
            interest_rate_pct: 6.5,
            loan_term_years: 30.0,
            furnishing_costs: 25_000.0,
            setup_costs: 5_000.0,
        },
        seasonality: Some(String::from("moderate")),
    }
}
