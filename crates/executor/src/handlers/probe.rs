//! Health, ping and info handlers.

use medistock_engine::InventoryIndex;

use crate::types::{ApiInfo, HealthReport};
use crate::{Command, Output, Result};

/// Handle Health command.
pub fn health(index: &InventoryIndex) -> Result<Output> {
    Ok(Output::Health(HealthReport::from(index.status())))
}

/// Handle Ping command.
pub fn ping() -> Result<Output> {
    Ok(Output::Pong {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle Info command.
pub fn info() -> Result<Output> {
    Ok(Output::ApiInfo(ApiInfo {
        name: "medistock".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commands: Command::NAMES.iter().map(|c| c.to_string()).collect(),
    }))
}
