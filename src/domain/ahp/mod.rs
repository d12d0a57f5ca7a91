//! AHP Module - Pairwise-comparison weighting and consistency checking.
//!
//! Pure, stateless domain services: each submission is evaluated from its
//! own input with no shared mutable state, so evaluations may run
//! concurrently without locking.
//!
//! # Components
//!
//! - `JudgmentSet` - Canonical per-group judgments (last write wins per pair)
//! - `ComparisonMatrix` - Sorted, reciprocal, neutral-filled matrix
//! - `WeightSolver` - Row geometric-mean priority vector
//! - `ConsistencyEvaluator` - lambda_max, CI, CR against the Random Index
//! - `SectionEvaluator` - One group, rounded for reporting
//! - `SubmissionEvaluator` - Every recognized group of a submission
//!
//! # Flow
//!
//! ```text
//! Submission ─► SubmissionEvaluator ─► (per group) SectionEvaluator
//!     ─► ComparisonMatrix ─► WeightSolver ─► ConsistencyEvaluator ─► SectionResult
//! ```

mod comparison_matrix;
mod consistency;
mod errors;
mod group;
mod judgment;
mod result_rows;
mod section;
mod submission;
mod submission_input;
mod weight_solver;

pub use comparison_matrix::ComparisonMatrix;
pub use consistency::{
    random_index, ConsistencyEvaluator, ConsistencyResult, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
    RANDOM_INDEX_FALLBACK,
};
pub use errors::EvaluationError;
pub use group::{GroupCatalog, DEFAULT_GROUPS};
pub use judgment::{DiscardReason, Judgment, JudgmentSet, RATIO_LIMIT};
pub use result_rows::ResultRow;
pub use section::{
    round_to, EvaluationSettings, SectionEvaluator, SectionResult, DEFAULT_DECIMAL_PLACES,
};
pub use submission::{SubmissionEvaluator, SubmissionResult};
pub use submission_input::{GroupInput, JudgmentRecord, Submission, SubmissionBuilder};
pub use weight_solver::{PriorityVector, WeightSolver};
