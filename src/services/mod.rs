//! Business logic services

pub mod gateway;
pub mod planner;

use std::sync::Arc;

use crate::{config::GatewayConfig, error::AppResult};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub planner: planner::PlannerService,
}

impl Services {
    /// Create all services with the given gateway configuration
    pub fn new(gateway_config: GatewayConfig) -> AppResult<Self> {
        let gateway = Arc::new(gateway::HttpModelGateway::new(gateway_config)?);
        Ok(Self {
            planner: planner::PlannerService::new(gateway),
        })
    }
}
