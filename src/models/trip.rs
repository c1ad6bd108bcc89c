//! Trip request and trip plan models
//!
//! Wire names are camelCase to match the web client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::enums::{BudgetTier, HotelCategory, PlaceCategory, TravelType};

/// Validated trip parameters driving generation
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_date_range))]
pub struct TripRequest {
    #[validate(length(min = 1, message = "Origin must not be empty"))]
    pub origin: String,
    #[validate(length(min = 1, message = "Destination must not be empty"))]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1, message = "At least one traveler is required"))]
    pub travelers: u32,
    pub budget: BudgetTier,
    pub travel_type: TravelType,
    #[serde(default)]
    pub interests: Vec<String>,
}

fn validate_date_range(request: &TripRequest) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        let mut err = ValidationError::new("end_date_before_start_date");
        err.message = Some("End date must not be before start date".into());
        return Err(err);
    }
    Ok(())
}

/// GPS coordinates. `(0, 0)` is the explicit "unknown" sentinel used when
/// the generator omits a location.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn unknown() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }
}

/// A point of interest within a plan
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique within a single plan ("p1", "p2", ...)
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    pub description: String,
    pub rating: f64,
    pub visit_duration: String,
    pub best_time: String,
    /// Representative image URL, always populated
    pub image: String,
    pub location: GeoPoint,
}

/// A hotel recommendation within a plan
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Unique within a single plan ("h1", "h2", ...)
    pub id: String,
    pub name: String,
    pub category: HotelCategory,
    pub rating: f64,
    pub price_range: String,
    pub amenities: Vec<String>,
    /// Representative image URL, always populated
    pub image: String,
    /// Booking platform label, passed through from the generator verbatim
    pub platform: String,
    /// Always derived from `platform`, never taken from the generator
    pub booking_url: String,
}

/// One scheduled visit within an itinerary day
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStop {
    /// The resolved place, embedded rather than referenced by id
    pub place: Place,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,
}

/// One day of the trip schedule
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    /// Display date, always recomputed from the requested start date
    pub date: String,
    pub places: Vec<ItineraryStop>,
}

/// The fully normalized output of the generation pipeline
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub places: Vec<Place>,
    pub hotels: Vec<Hotel>,
    pub itinerary: Vec<ItineraryDay>,
    pub local_tips: Vec<String>,
    pub summary: String,
}
