// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations.

use crate::error::{ApiError, ApiResult, translate_projection_error};
use crate::request_response::{ProjectionRequest, ProjectionResponse};
use str_projection::{ProjectionResult, project};
use str_projection_domain::ProjectionInput;
use tracing::{debug, info, warn};

/// Runs a projection for an API request.
///
/// The request is converted into domain types, projected, and converted
/// back into a response DTO. Missing break-even or payback figures are not
/// errors; they are logged and returned as `null`.
///
/// # Arguments
///
/// * `request` - The projection request
///
/// # Returns
///
/// * `Ok(ProjectionResponse)` on success
/// * `Err(ApiError)` if the request is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A percentage is out of range or the seasonality selector is unknown
/// - Any amount fails domain validation
pub fn calculate_projection(request: ProjectionRequest) -> ApiResult<ProjectionResponse> {
    let input: ProjectionInput = request.into_input().inspect_err(|err| {
        warn!(error = %err, "Rejected projection request");
    })?;

    info!(
        seasonality = %input.seasonality,
        base_nightly_rate = input.pricing.base_nightly_rate,
        property_value = input.financing.property_value,
        "Calculating projection"
    );

    let result: ProjectionResult = project(&input).map_err(|err| {
        let api_err: ApiError = translate_projection_error(err);
        warn!(error = %api_err, "Projection failed");
        api_err
    })?;

    debug!(
        total_nights = result.total_nights,
        total_gross_revenue = result.total_gross_revenue,
        net_operating_income = result.net_operating_income,
        cash_flow = result.cash_flow,
        "Projection computed"
    );

    if result.break_even_occupancy_pct.is_none() {
        warn!(
            average_daily_rate = result.average_daily_rate,
            "No break-even occupancy: variable costs exceed the nightly rate"
        );
    }
    if result.payback_period_years.is_none() {
        info!(
            cash_flow = result.cash_flow,
            "No payback period: cash flow is not positive"
        );
    }

    info!(
        recommendations = result.recommendations.len(),
        "Projection complete"
    );

    Ok(ProjectionResponse::from(result))
}
