//! Submission Evaluator - Runs every recognized group of a submission.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{info, warn};

use super::{
    EvaluationError, EvaluationSettings, GroupCatalog, GroupInput, SectionEvaluator,
    SectionResult, Submission,
};
use crate::domain::foundation::GroupName;

/// Section results for one submission, in catalog order.
///
/// Only groups with at least one judgment record appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    /// Respondent metadata, passed through unmodified.
    pub meta: Value,
    #[serde(serialize_with = "serialize_sections")]
    pub sections: Vec<(GroupName, SectionResult)>,
}

fn serialize_sections<S>(
    sections: &[(GroupName, SectionResult)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for (name, section) in sections {
        map.serialize_entry(name.as_str(), section)?;
    }
    map.end()
}

impl SubmissionResult {
    /// Section result for a group, if it was evaluated.
    pub fn section(&self, group: &str) -> Option<&SectionResult> {
        self.sections
            .iter()
            .find(|(name, _)| name.as_str() == group)
            .map(|(_, section)| section)
    }

    /// Names of the evaluated groups, in catalog order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(name, _)| name.as_str())
    }

    /// Number of evaluated groups.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if no group was evaluated.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns true if every evaluated group passed the consistency check.
    pub fn all_consistent(&self) -> bool {
        self.sections.iter().all(|(_, section)| section.consistent)
    }
}

/// Evaluates whole submissions against a fixed group catalog.
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct SubmissionEvaluator {
    catalog: GroupCatalog,
    settings: EvaluationSettings,
}

impl SubmissionEvaluator {
    /// Creates an evaluator.
    pub fn new(catalog: GroupCatalog, settings: EvaluationSettings) -> Self {
        Self { catalog, settings }
    }

    /// The recognized groups.
    pub fn catalog(&self) -> &GroupCatalog {
        &self.catalog
    }

    /// The packaging settings.
    pub fn settings(&self) -> &EvaluationSettings {
        &self.settings
    }

    /// Parses and evaluates a JSON submission.
    ///
    /// All-or-nothing: a structural defect yields an error and no result.
    pub fn evaluate_json(&self, payload: &str) -> Result<SubmissionResult, EvaluationError> {
        let submission = Submission::from_json_str(payload)?;
        Ok(self.evaluate(&submission))
    }

    /// Evaluates every recognized group present in the submission.
    ///
    /// # Edge Cases
    /// - Absent or empty group: omitted
    /// - Malformed group (not a list): omitted, logged
    /// - Unrecognized group: ignored, logged
    pub fn evaluate(&self, submission: &Submission) -> SubmissionResult {
        for name in submission.group_names() {
            if !self.catalog.contains(name) {
                warn!(group = %name, "Ignoring unrecognized group");
            }
        }

        let mut sections = Vec::new();
        for group in self.catalog.iter() {
            let Some(input) = submission.group(group.as_str()) else {
                continue;
            };

            if let GroupInput::Malformed { found } = input {
                warn!(group = %group, found = found, "Skipping malformed group");
                continue;
            }

            let Some(judgments) = input.judgment_set() else {
                continue;
            };

            if let Some(section) = SectionEvaluator::evaluate(group, &judgments, &self.settings) {
                sections.push((group.clone(), section));
            }
        }

        let result = SubmissionResult {
            meta: submission.meta().clone(),
            sections,
        };

        info!(
            groups = result.len(),
            all_consistent = result.all_consistent(),
            "Evaluated submission"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn evaluator() -> SubmissionEvaluator {
        SubmissionEvaluator::default()
    }

    #[test]
    fn evaluates_only_present_groups() {
        let submission = Submission::builder()
            .judgment("dimensions", "A", "B", Some(2.0))
            .judgment("social", "X", "Y", Some(1.0))
            .empty_group("economic")
            .build();

        let result = evaluator().evaluate(&submission);

        assert_eq!(result.group_names().collect::<Vec<_>>(), vec!["dimensions", "social"]);
        assert!(result.section("economic").is_none());
        assert!(result.section("technical").is_none());
    }

    #[test]
    fn sections_follow_catalog_order() {
        let catalog = GroupCatalog::new(vec!["zeta", "alpha"]).unwrap();
        let evaluator = SubmissionEvaluator::new(catalog, EvaluationSettings::default());
        let submission = Submission::builder()
            .judgment("alpha", "A", "B", Some(2.0))
            .judgment("zeta", "A", "B", Some(2.0))
            .build();

        let result = evaluator.evaluate(&submission);
        assert_eq!(result.group_names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn unrecognized_groups_are_ignored() {
        let submission = Submission::builder()
            .judgment("bonus", "A", "B", Some(2.0))
            .build();

        let result = evaluator().evaluate(&submission);
        assert!(result.is_empty());
    }

    #[test]
    fn malformed_group_does_not_affect_others() {
        let result = evaluator()
            .evaluate_json(
                r#"{
                    "comparisons": {
                        "dimensions": "oops",
                        "technical": [{"left": "A", "right": "B", "ahp_ratio_aij": 3}]
                    }
                }"#,
            )
            .unwrap();

        assert!(result.section("dimensions").is_none());
        assert_eq!(result.section("technical").unwrap().weight("A"), Some(0.75));
    }

    #[test]
    fn meta_is_passed_through() {
        let submission = Submission::builder()
            .meta(json!({"respondent": "r-42", "email": "r@example.com"}))
            .judgment("dimensions", "A", "B", Some(2.0))
            .build();

        let result = evaluator().evaluate(&submission);
        assert_eq!(result.meta, json!({"respondent": "r-42", "email": "r@example.com"}));
    }

    #[test]
    fn missing_comparisons_produces_no_result() {
        let result = evaluator().evaluate_json(r#"{"meta": {"respondent": "r-1"}}"#);
        assert_eq!(result, Err(EvaluationError::MissingComparisons));
    }

    #[test]
    fn all_consistent_reflects_sections() {
        let submission = Submission::builder()
            .judgment("dimensions", "A", "B", Some(5.0))
            .judgment("dimensions", "B", "C", Some(5.0))
            .judgment("dimensions", "C", "A", Some(5.0))
            .judgment("social", "A", "B", Some(2.0))
            .build();

        let result = evaluator().evaluate(&submission);
        assert!(!result.section("dimensions").unwrap().consistent);
        assert!(result.section("social").unwrap().consistent);
        assert!(!result.all_consistent());
    }

    #[test]
    fn serializes_sections_as_map() {
        let submission = Submission::builder()
            .meta(json!({"respondent": "r-1"}))
            .judgment("dimensions", "A", "B", Some(3.0))
            .build();

        let json = serde_json::to_value(evaluator().evaluate(&submission)).unwrap();
        assert_eq!(json["meta"]["respondent"], "r-1");
        assert_eq!(json["sections"]["dimensions"]["weights"]["B"], 0.25);
    }
}
