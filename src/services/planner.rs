//! Trip planning orchestration

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::trip::{TripPlan, TripRequest},
    plan::{build_prompts, normalize_trip_plan},
};

use super::gateway::ModelGateway;

/// Stateless per-request pipeline: validate, build prompts, call the
/// gateway, normalize. No retries; retry policy belongs to the caller.
#[derive(Clone)]
pub struct PlannerService {
    gateway: Arc<dyn ModelGateway>,
}

impl PlannerService {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Generate a fully normalized trip plan for a request.
    pub async fn generate(&self, request: &TripRequest) -> AppResult<TripPlan> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tracing::info!(
            destination = %request.destination,
            origin = %request.origin,
            "generating trip plan"
        );

        let prompts = build_prompts(request);
        let raw = self
            .gateway
            .complete(&prompts.system, &prompts.user)
            .await?;

        tracing::debug!(bytes = raw.len(), "AI response received");

        normalize_trip_plan(&raw, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{BudgetTier, TravelType};
    use crate::services::gateway::MockModelGateway;
    use serde_json::json;

    fn request() -> TripRequest {
        TripRequest {
            origin: "Delhi".to_string(),
            destination: "Mumbai".to_string(),
            start_date: "2024-12-26".parse().unwrap(),
            end_date: "2024-12-27".parse().unwrap(),
            travelers: 2,
            budget: BudgetTier::Medium,
            travel_type: TravelType::Friends,
            interests: vec!["food".to_string()],
        }
    }

    #[tokio::test]
    async fn test_generate_happy_path() {
        let mut gateway = MockModelGateway::new();
        gateway.expect_complete().times(1).returning(|system, _user| {
            assert!(system.contains("travel planning expert"));
            Ok(json!({
                "places": [ { "name": "Gateway of India", "category": "historical" } ],
                "hotels": [ { "name": "Taj Mahal Palace", "category": "luxury", "platform": "Agoda" } ],
                "itinerary": [ { "day": 1, "places": [ { "placeId": "p1" } ] } ],
                "localTips": [ "Try vada pav" ],
                "summary": "A short Mumbai escape."
            })
            .to_string())
        });

        let planner = PlannerService::new(Arc::new(gateway));
        let plan = planner.generate(&request()).await.unwrap();

        assert_eq!(plan.places[0].id, "p1");
        assert_eq!(plan.hotels[0].booking_url, "https://www.agoda.com");
        assert_eq!(plan.itinerary[0].places[0].place.name, "Gateway of India");
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_dates_before_gateway_call() {
        let mut gateway = MockModelGateway::new();
        gateway.expect_complete().times(0);

        let mut req = request();
        req.end_date = "2024-12-20".parse().unwrap();

        let planner = PlannerService::new(Arc::new(gateway));
        let result = planner.generate(&req).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_surfaces_gateway_errors() {
        let mut gateway = MockModelGateway::new();
        gateway
            .expect_complete()
            .returning(|_, _| Err(AppError::UpstreamRateLimited));

        let planner = PlannerService::new(Arc::new(gateway));
        let result = planner.generate(&request()).await;
        assert!(matches!(result, Err(AppError::UpstreamRateLimited)));
    }

    #[tokio::test]
    async fn test_generate_surfaces_parse_failure() {
        let mut gateway = MockModelGateway::new();
        gateway
            .expect_complete()
            .returning(|_, _| Ok("sorry, no json today".to_string()));

        let planner = PlannerService::new(Arc::new(gateway));
        let result = planner.generate(&request()).await;
        assert!(matches!(result, Err(AppError::GenerationParse)));
    }
}
