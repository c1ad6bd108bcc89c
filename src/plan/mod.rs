//! Trip plan generation pipeline
//!
//! Prompt construction, fallback data, and the normalizer that repairs
//! untrusted generator output into a guaranteed-valid [`TripPlan`].
//!
//! [`TripPlan`]: crate::models::trip::TripPlan

pub mod fallback;
pub mod normalize;
pub mod prompt;

pub use normalize::normalize_trip_plan;
pub use prompt::{build_prompts, day_count, TripPrompts};
