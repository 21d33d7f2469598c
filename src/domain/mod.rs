//! Domain layer containing the URL record entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Closed set of store failure kinds
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete stores live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod errors;
pub mod repositories;
