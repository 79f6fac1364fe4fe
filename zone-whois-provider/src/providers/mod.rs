//! Zone provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod ultradns;

pub use ultradns::UltraDnsProvider;
