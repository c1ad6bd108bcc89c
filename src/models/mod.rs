//! Domain models for trip planning

pub mod enums;
pub mod raw;
pub mod trip;
