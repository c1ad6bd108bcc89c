//! Repair of untrusted generator output into a valid trip plan
//!
//! Only the initial JSON parse can fail; every later step fills missing
//! fields with deterministic fallbacks, so the result is either a
//! `GenerationParse` error or a fully populated [`TripPlan`].

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{HotelCategory, PlaceCategory},
        raw::{RawHotel, RawItineraryDay, RawItineraryStop, RawPlace, RawTripPlan},
        trip::{GeoPoint, Hotel, ItineraryDay, ItineraryStop, Place, TripPlan, TripRequest},
    },
};

use super::fallback::{booking_url, hotel_image, place_image};

/// Parse and normalize raw gateway output into a complete trip plan.
pub fn normalize_trip_plan(raw_text: &str, request: &TripRequest) -> AppResult<TripPlan> {
    let raw: RawTripPlan = serde_json::from_str(raw_text).map_err(|e| {
        // Logged for diagnosis, never echoed back to the client
        tracing::error!(error = %e, raw = raw_text, "failed to parse generator output");
        AppError::GenerationParse
    })?;

    let places = normalize_places(raw.places);
    let lookup: HashMap<String, Place> = places
        .iter()
        .map(|place| (place.id.clone(), place.clone()))
        .collect();

    let hotels = normalize_hotels(raw.hotels);
    let itinerary = normalize_itinerary(raw.itinerary, request.start_date, &places, &lookup);

    Ok(TripPlan {
        places,
        hotels,
        itinerary,
        local_tips: raw.local_tips,
        summary: raw.summary.unwrap_or_default(),
    })
}

fn normalize_places(raw: Vec<RawPlace>) -> Vec<Place> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, place)| {
            let category = PlaceCategory::from_label(place.category.as_deref().unwrap_or(""));
            Place {
                id: place
                    .id
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| format!("p{}", idx + 1)),
                name: place.name.unwrap_or_default(),
                category,
                description: place.description.unwrap_or_default(),
                rating: place.rating.unwrap_or(0.0),
                visit_duration: place.visit_duration.unwrap_or_default(),
                best_time: place.best_time.unwrap_or_default(),
                image: place_image(category).to_string(),
                location: place.location.unwrap_or_else(GeoPoint::unknown),
            }
        })
        .collect()
}

fn normalize_hotels(raw: Vec<RawHotel>) -> Vec<Hotel> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, hotel)| {
            let category = HotelCategory::from_label(hotel.category.as_deref().unwrap_or(""));
            let platform = hotel.platform.unwrap_or_default();
            Hotel {
                id: hotel
                    .id
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| format!("h{}", idx + 1)),
                name: hotel.name.unwrap_or_default(),
                category,
                rating: hotel.rating.unwrap_or(0.0),
                price_range: hotel.price_range.unwrap_or_default(),
                amenities: hotel.amenities,
                image: hotel_image(category).to_string(),
                booking_url: booking_url(&platform).to_string(),
                platform,
            }
        })
        .collect()
}

fn normalize_itinerary(
    raw: Vec<RawItineraryDay>,
    start_date: NaiveDate,
    places: &[Place],
    lookup: &HashMap<String, Place>,
) -> Vec<ItineraryDay> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, day)| {
            // Missing day numbers fall back to the entry's position, as do
            // day numbers too large to land on a calendar date
            let position = idx as u32 + 1;
            let mut day_number = day.day.unwrap_or(position);
            let mut date =
                start_date.checked_add_signed(Duration::days(i64::from(day_number) - 1));
            if date.is_none() {
                day_number = position;
                date = start_date.checked_add_signed(Duration::days(idx as i64));
            }
            let date = date.unwrap_or(start_date);
            ItineraryDay {
                day: day_number,
                // Generator-supplied dates are discarded so the schedule is
                // always consistent with the requested range
                date: date.format("%A, %b %-d").to_string(),
                places: day
                    .places
                    .into_iter()
                    .enumerate()
                    .map(|(stop_idx, stop)| resolve_stop(stop, stop_idx, places, lookup))
                    .collect(),
            }
        })
        .collect()
}

/// Resolve a stop's place reference: by id first, then by ordinal position
/// in the global places list, then a synthesized placeholder.
fn resolve_stop(
    raw: RawItineraryStop,
    idx: usize,
    places: &[Place],
    lookup: &HashMap<String, Place>,
) -> ItineraryStop {
    let RawItineraryStop {
        place_id,
        place: place_ref,
        name,
        time,
        travel_time,
    } = raw;

    let place_id = place_id
        .filter(|id| !id.is_empty())
        .or_else(|| place_ref.and_then(|p| p.id))
        .unwrap_or_else(|| format!("p{}", idx + 1));

    let place = lookup
        .get(&place_id)
        .cloned()
        .or_else(|| places.get(idx).cloned())
        .unwrap_or_else(|| placeholder_place(place_id, name));

    ItineraryStop {
        place,
        time: time
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("{}:00 AM", 9 + idx * 2)),
        travel_time,
    }
}

fn placeholder_place(id: String, name: Option<String>) -> Place {
    Place {
        id,
        name: name.unwrap_or_else(|| "Unknown Place".to_string()),
        category: PlaceCategory::Cultural,
        description: String::new(),
        rating: 4.0,
        visit_duration: "1-2 hours".to_string(),
        best_time: "Morning".to_string(),
        image: place_image(PlaceCategory::Cultural).to_string(),
        location: GeoPoint::unknown(),
    }
}
