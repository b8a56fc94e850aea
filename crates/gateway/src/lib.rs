//! Typed client for the collection backend: configuration, the
//! [`backend::RsvpBackend`] trait the flows consume, and the HTTP
//! implementation with per-operation deadlines and the user-facing error
//! taxonomy.

pub mod backend;
pub mod config;
pub mod deadline;
pub mod directus;
pub mod error;
pub mod wire;

pub use backend::RsvpBackend;
pub use config::GatewayConfig;
pub use directus::DirectusGateway;
pub use error::{GatewayError, GatewayErrorKind, GatewayResult};
