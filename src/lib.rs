//! # PrintAlma vendor product resolver
//!
//! Maps a `(base product, design)` pair to the id of the vendor product built
//! from them, creating the vendor product on the backend the first time it is
//! asked for.
//!
//! ## Pieces
//!
//! - **Domain types** - keys, ids, product structure, creation payload → [`domain`]
//! - **Backend seam** - the three remote calls, with an HTTP implementation → [`backend`]
//! - **Resolver** - lookup-then-create, deduplicated per key → [`resolver`]
//! - **System** - configuration, wiring and tracing setup → [`app_system`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use printalma_resolver::app_system::{setup_tracing, ResolverConfig, ResolverSystem};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! setup_tracing();
//! let system = ResolverSystem::new(ResolverConfig::load()?);
//!
//! // Concurrent calls for the same pair share one lookup/creation
//! let vendor_product_id = system.resolver.resolve(4, 9).await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod backend;
pub mod domain;
pub mod error;
pub mod resolver;

#[cfg(test)]
mod mock_framework;
