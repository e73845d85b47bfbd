//! Core types and service wiring for the vracht shipping-carrier framework.

/// Domain models and identifiers shared by all carriers.
pub mod model;
/// Registry and helpers for plugging carrier providers into the service.
pub mod plugin;
/// Traits describing the carrier and host-collaborator interfaces.
pub mod ports;
/// High-level service facade used by the host application.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
