// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod display;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use display::{
    NOT_AVAILABLE, format_currency, format_optional_percentage, format_percentage, format_years,
};
pub use error::{ApiError, ApiResult, translate_domain_error, translate_projection_error};
pub use handlers::calculate_projection;
pub use request_response::{
    ExpenseBreakdownResponse, ExpensesRequest, FinancingRequest, FixedCostsRequest,
    OccupancyRequest, PricingRequest, ProjectionRequest, ProjectionResponse,
    RecommendationResponse, SeasonalSegmentResponse, sample_request,
};
