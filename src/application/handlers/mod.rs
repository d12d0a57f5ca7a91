//! Application handlers.
//!
//! Command handlers that orchestrate the weighting engine and its ports.

mod evaluate_submission;

pub use evaluate_submission::{
    EvaluateSubmissionCommand, EvaluateSubmissionHandler, EvaluateSubmissionResult,
};
