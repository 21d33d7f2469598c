//! Utility functions shared by handlers and services.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`validation`] - Destination validation and validation error rendering

pub mod alias_generator;
pub mod validation;
