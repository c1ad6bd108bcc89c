//! Trip generation endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::trip::{TripPlan, TripRequest},
};

/// Successful generation envelope
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTripResponse {
    pub success: bool,
    pub trip_plan: TripPlan,
}

/// Generate a trip plan from trip parameters
#[utoipa::path(
    post,
    path = "/trips/generate",
    tag = "trips",
    request_body = TripRequest,
    responses(
        (status = 200, description = "Generated trip plan", body = GenerateTripResponse),
        (status = 400, description = "Invalid trip parameters", body = crate::error::ErrorResponse),
        (status = 402, description = "AI credits exhausted", body = crate::error::ErrorResponse),
        (status = 429, description = "Upstream rate limit hit", body = crate::error::ErrorResponse),
        (status = 500, description = "Generation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn generate_trip(
    State(state): State<crate::AppState>,
    Json(request): Json<TripRequest>,
) -> AppResult<Json<GenerateTripResponse>> {
    let trip_plan = state.services.planner.generate(&request).await?;

    Ok(Json(GenerateTripResponse {
        success: true,
        trip_plan,
    }))
}
