//! AHP Weights - Pairwise-comparison weighting for survey submissions
//!
//! This crate derives priority weights for fixed groups of criteria from a
//! respondent's pairwise judgments using the Analytic Hierarchy Process,
//! and reports how consistent each group of judgments is.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
