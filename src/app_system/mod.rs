//! System wiring, configuration, and tracing setup.

pub mod config;
pub mod resolver_system;
pub mod tracing;

pub use config::*;
pub use resolver_system::*;
pub use self::tracing::*;
