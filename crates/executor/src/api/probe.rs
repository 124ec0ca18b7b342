//! Health and service probes.

use super::Medistock;
use crate::types::{ApiInfo, HealthReport};
use crate::{Command, Error, Output, Result};

impl Medistock {
    /// Index health and counts.
    pub fn health(&self) -> Result<HealthReport> {
        match self.executor.execute(Command::Health)? {
            Output::Health(report) => Ok(report),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Health".into(),
            }),
        }
    }

    /// Liveness check; returns the crate version.
    pub fn ping(&self) -> Result<String> {
        match self.executor.execute(Command::Ping)? {
            Output::Pong { version } => Ok(version),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Ping".into(),
            }),
        }
    }

    /// Service name, version and supported commands.
    pub fn info(&self) -> Result<ApiInfo> {
        match self.executor.execute(Command::Info)? {
            Output::ApiInfo(info) => Ok(info),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Info".into(),
            }),
        }
    }
}
