//! Domain models for RealPro.
//!
//! These are the core types shared across all crates.

pub mod session;
pub mod theme;
pub mod ticket;
pub mod user;
