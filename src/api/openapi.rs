//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, trips};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tripcraft API",
        version = "1.0.0",
        description = "AI-assisted trip planning REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Tripcraft Team", email = "contact@tripcraft.dev")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Trips
        trips::generate_trip,
    ),
    components(
        schemas(
            // Trips
            trips::GenerateTripResponse,
            crate::models::trip::TripRequest,
            crate::models::trip::TripPlan,
            crate::models::trip::Place,
            crate::models::trip::Hotel,
            crate::models::trip::ItineraryDay,
            crate::models::trip::ItineraryStop,
            crate::models::trip::GeoPoint,
            crate::models::enums::BudgetTier,
            crate::models::enums::TravelType,
            crate::models::enums::PlaceCategory,
            crate::models::enums::HotelCategory,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "trips", description = "Trip plan generation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
