//! Todo lifecycle management for Listkeeper.
//!
//! This module implements the full record lifecycle: creation of validated
//! todo records, field-by-field partial updates, deletion with an explicit
//! existence check, and exact-match priority filtering. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
