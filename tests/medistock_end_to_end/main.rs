//! End-to-End Tests
//!
//! Drives the public `medistock` API the way a transport would:
//! - JSON commands in, JSON outputs and errors out
//! - The typed `Medistock` wrapper over a shared index
//! - Configuration files and degraded expiry mode
//! - Concurrent clients sharing one executor

mod common;

mod concurrent_clients;
mod configuration;
mod json_transport;
mod workflow;
