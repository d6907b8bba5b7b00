//! Application layer - Use cases and orchestration
//!
//! Contains the prediction models, advisability scoring and the port
//! through which weather history is loaded.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
