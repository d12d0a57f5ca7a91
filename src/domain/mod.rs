//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, errors)
//! - `ahp` - Pure domain services for AHP weighting and consistency checks

pub mod ahp;
pub mod foundation;
