//! Prompt construction for the AI gateway

use chrono::NaiveDate;

use crate::models::trip::TripRequest;

/// Places requested per trip day
const PLACES_PER_DAY: i64 = 3;
/// Generation volume cap for long trips
const MAX_PLACES: i64 = 12;
/// One hotel per budget category spread
pub const TARGET_HOTEL_COUNT: i64 = 4;

/// The two instruction blocks sent to the gateway
#[derive(Debug, Clone)]
pub struct TripPrompts {
    pub system: String,
    pub user: String,
}

/// Inclusive day span of the trip, never less than 1.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(1)
}

/// Number of places asked of the generator for a trip of `days` days.
pub fn target_place_count(days: i64) -> i64 {
    (days * PLACES_PER_DAY).min(MAX_PLACES)
}

/// Render the system and user instructions for a validated request.
/// Pure function of the request.
pub fn build_prompts(request: &TripRequest) -> TripPrompts {
    let days = day_count(request.start_date, request.end_date);
    let place_count = target_place_count(days);

    let system = format!(
        r#"You are a travel planning expert. Generate realistic travel recommendations for the specified destination.

IMPORTANT: All places, hotels, and recommendations MUST be real locations that actually exist in the specified destination city/region. Do not use placeholder or generic data.

You MUST include accurate GPS coordinates (latitude and longitude) for each place. These should be the real coordinates of the actual location.

Respond with a JSON object containing:
1. "places" - Array of {place_count} real tourist attractions/points of interest in the destination with accurate lat/lng coordinates
2. "hotels" - Array of {hotel_count} real hotels in the destination across different budget categories
3. "itinerary" - Array of {days} day objects, each with day number, date, and 2-4 places to visit that day
4. "localTips" - 3-4 local food recommendations and travel tips specific to the destination
5. "summary" - Brief trip overview

CRITICAL FORMAT REQUIREMENTS:
Each place MUST have:
- id (string like "p1", "p2")
- name (actual place name)
- category (one of: historical, nature, food, adventure, cultural)
- description (2-3 sentences)
- rating (realistic number 3.5-5.0)
- visitDuration (like "1-2 hours")
- bestTime (like "Morning" or "10 AM - 2 PM")
- location: {{ lat: number, lng: number }} - ACTUAL GPS coordinates

Each hotel MUST have:
- id (string like "h1", "h2")
- name (actual hotel name)
- category (one of: luxury, mid-range, budget)
- rating (number 3.0-5.0)
- priceRange (like "$50-100" or use local currency)
- amenities (array of strings like ["WiFi", "Pool", "Breakfast"])
- platform (one of: Booking.com, MakeMyTrip, Agoda, Airbnb)

Each itinerary day MUST have:
- day (number starting from 1)
- date (formatted date string)
- places: array of {{ placeId: string, time: string, travelTime: string (optional) }}

Use the local currency for the destination country in price ranges."#,
        place_count = place_count,
        hotel_count = TARGET_HOTEL_COUNT,
        days = days,
    );

    let interests = if request.interests.is_empty() {
        "General sightseeing".to_string()
    } else {
        request.interests.join(", ")
    };

    let user = format!(
        r#"Plan a {days}-day trip to {destination} from {origin}.
Travel Dates: {start} to {end}
Number of Travelers: {travelers}
Budget: {budget}
Travel Type: {travel_type}
Interests: {interests}

Generate real places and hotels that actually exist in {destination}. Include famous landmarks, local favorites, and hidden gems based on the traveler's interests.

IMPORTANT: Include accurate GPS coordinates for each place so they can be displayed on a map."#,
        days = days,
        destination = request.destination,
        origin = request.origin,
        start = request.start_date,
        end = request.end_date,
        travelers = request.travelers,
        budget = request.budget,
        travel_type = request.travel_type,
        interests = interests,
    );

    TripPrompts { system, user }
}
