// Conformance harness for booking inventory plugins

pub mod client;
pub mod config;
pub mod error;
pub mod fake_data;
pub mod grpc_client;
pub mod grpc_mapping;
pub mod grpc_proto;
pub mod harness;
pub mod model;
pub mod rest_client;
pub mod rest_mapping;
pub mod validation;
pub mod validators;

// Re-export key types for convenience
pub use client::{connect, AvailabilityWindow, PluginClient};
pub use config::{PluginEndpoint, TransportKind};
pub use error::HarnessError;
pub use harness::{Harness, RunOutcome, RunSummary, StopReason};
pub use validation::{Failures, ValidationBuilder, ValidationResult, Validator};
