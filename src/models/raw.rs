//! Untrusted generator output, before normalization
//!
//! The generator's schema is enforced only by prompt convention, so every
//! field here is optional and defaulted. The normalizer is responsible for
//! turning these into the guaranteed-complete types in [`super::trip`].

use serde::Deserialize;

use super::trip::GeoPoint;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTripPlan {
    #[serde(default)]
    pub places: Vec<RawPlace>,
    #[serde(default)]
    pub hotels: Vec<RawHotel>,
    #[serde(default)]
    pub itinerary: Vec<RawItineraryDay>,
    #[serde(default)]
    pub local_tips: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub visit_duration: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHotel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItineraryDay {
    #[serde(default)]
    pub day: Option<u32>,
    /// Ignored: the date is always recomputed from the request
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub places: Vec<RawItineraryStop>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItineraryStop {
    #[serde(default)]
    pub place_id: Option<String>,
    /// Some generations embed the place instead of referencing it
    #[serde(default)]
    pub place: Option<RawPlaceRef>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub travel_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaceRef {
    #[serde(default)]
    pub id: Option<String>,
}
