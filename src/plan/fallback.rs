//! Fixed fallback data used during normalization
//!
//! Generator output never carries images or booking URLs that we trust;
//! both are always derived from these tables so every plan links to known
//! hosts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::enums::{HotelCategory, PlaceCategory};

const PLACE_IMAGE_HISTORICAL: &str =
    "https://images.unsplash.com/photo-1552832230-c0197dd311b5?w=400&h=300&fit=crop";
const PLACE_IMAGE_NATURE: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop";
const PLACE_IMAGE_FOOD: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=400&h=300&fit=crop";
const PLACE_IMAGE_ADVENTURE: &str =
    "https://images.unsplash.com/photo-1533130061792-64b345e4a833?w=400&h=300&fit=crop";
const PLACE_IMAGE_CULTURAL: &str =
    "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?w=400&h=300&fit=crop";

const HOTEL_IMAGE_LUXURY: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400&h=300&fit=crop";
const HOTEL_IMAGE_MID_RANGE: &str =
    "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=400&h=300&fit=crop";
const HOTEL_IMAGE_BUDGET: &str =
    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=400&h=300&fit=crop";

pub const DEFAULT_BOOKING_URL: &str = "https://www.booking.com";

/// Booking platform labels to landing page URLs
static BOOKING_URLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Booking.com", "https://www.booking.com"),
        ("MakeMyTrip", "https://www.makemytrip.com"),
        ("Agoda", "https://www.agoda.com"),
        ("Airbnb", "https://www.airbnb.com"),
    ])
});

/// Representative image for a place category.
pub fn place_image(category: PlaceCategory) -> &'static str {
    match category {
        PlaceCategory::Historical => PLACE_IMAGE_HISTORICAL,
        PlaceCategory::Nature => PLACE_IMAGE_NATURE,
        PlaceCategory::Food => PLACE_IMAGE_FOOD,
        PlaceCategory::Adventure => PLACE_IMAGE_ADVENTURE,
        // No dedicated shopping image; shares the cultural one
        PlaceCategory::Shopping | PlaceCategory::Cultural => PLACE_IMAGE_CULTURAL,
    }
}

/// Representative image for a hotel category.
pub fn hotel_image(category: HotelCategory) -> &'static str {
    match category {
        HotelCategory::Luxury => HOTEL_IMAGE_LUXURY,
        HotelCategory::MidRange => HOTEL_IMAGE_MID_RANGE,
        HotelCategory::Budget => HOTEL_IMAGE_BUDGET,
    }
}

/// Landing page for a booking platform label. Unrecognized labels map to
/// Booking.com.
pub fn booking_url(platform: &str) -> &'static str {
    BOOKING_URLS
        .get(platform)
        .copied()
        .unwrap_or(DEFAULT_BOOKING_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_url_known_platforms() {
        assert_eq!(booking_url("Booking.com"), "https://www.booking.com");
        assert_eq!(booking_url("MakeMyTrip"), "https://www.makemytrip.com");
        assert_eq!(booking_url("Agoda"), "https://www.agoda.com");
        assert_eq!(booking_url("Airbnb"), "https://www.airbnb.com");
    }

    #[test]
    fn test_booking_url_unknown_platform_defaults() {
        assert_eq!(booking_url("Expedia"), DEFAULT_BOOKING_URL);
        assert_eq!(booking_url(""), DEFAULT_BOOKING_URL);
        // Lookup is case-sensitive, like the platform labels themselves
        assert_eq!(booking_url("agoda"), DEFAULT_BOOKING_URL);
    }

    #[test]
    fn test_shopping_shares_cultural_image() {
        assert_eq!(
            place_image(PlaceCategory::Shopping),
            place_image(PlaceCategory::Cultural)
        );
        assert_ne!(
            place_image(PlaceCategory::Nature),
            place_image(PlaceCategory::Cultural)
        );
    }

    #[test]
    fn test_images_always_populated() {
        for category in [
            HotelCategory::Budget,
            HotelCategory::MidRange,
            HotelCategory::Luxury,
        ] {
            assert!(hotel_image(category).starts_with("https://"));
        }
    }
}
