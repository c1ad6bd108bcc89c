//! API handlers for Tripcraft REST endpoints

pub mod health;
pub mod openapi;
pub mod trips;
