//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// BudgetTier
// ---------------------------------------------------------------------------

/// Trip budget tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    Luxury,
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::Luxury => "luxury",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// TravelType
// ---------------------------------------------------------------------------

/// Who is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Solo,
    Family,
    Friends,
    Honeymoon,
    Business,
}

impl std::fmt::Display for TravelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TravelType::Solo => "solo",
            TravelType::Family => "family",
            TravelType::Friends => "friends",
            TravelType::Honeymoon => "honeymoon",
            TravelType::Business => "business",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// PlaceCategory
// ---------------------------------------------------------------------------

/// Place categories. The generator may emit "cultural" even though the
/// client-side filter enum historically only knew the other five, so the
/// two are reconciled here into a single enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Historical,
    Nature,
    Food,
    Adventure,
    Shopping,
    Cultural,
}

impl PlaceCategory {
    /// Fold an untrusted category label into a known variant.
    /// Unknown labels map to Cultural, matching the image table default.
    pub fn from_label(label: &str) -> Self {
        match label {
            "historical" => PlaceCategory::Historical,
            "nature" => PlaceCategory::Nature,
            "food" => PlaceCategory::Food,
            "adventure" => PlaceCategory::Adventure,
            "shopping" => PlaceCategory::Shopping,
            _ => PlaceCategory::Cultural,
        }
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PlaceCategory::Historical => "historical",
            PlaceCategory::Nature => "nature",
            PlaceCategory::Food => "food",
            PlaceCategory::Adventure => "adventure",
            PlaceCategory::Shopping => "shopping",
            PlaceCategory::Cultural => "cultural",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// HotelCategory
// ---------------------------------------------------------------------------

/// Hotel budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HotelCategory {
    Budget,
    MidRange,
    Luxury,
}

impl HotelCategory {
    /// Fold an untrusted category label into a known variant.
    /// Unknown labels map to MidRange, matching the image table default.
    pub fn from_label(label: &str) -> Self {
        match label {
            "budget" => HotelCategory::Budget,
            "luxury" => HotelCategory::Luxury,
            _ => HotelCategory::MidRange,
        }
    }
}

impl std::fmt::Display for HotelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HotelCategory::Budget => "budget",
            HotelCategory::MidRange => "mid-range",
            HotelCategory::Luxury => "luxury",
        };
        write!(f, "{}", label)
    }
}
