//! Result rows - Spreadsheet-style flattening of a submission result.

use serde::{Deserialize, Serialize};

use super::SubmissionResult;

/// One (group, item) line of a submission result.
///
/// The group-level figures repeat on every row of the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub group: String,
    pub item: String,
    pub weight: f64,
    pub n: usize,
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
    pub consistent: bool,
}

impl SubmissionResult {
    /// Flattens into rows ordered by group (catalog order) then item.
    pub fn to_rows(&self) -> Vec<ResultRow> {
        self.sections
            .iter()
            .flat_map(|(group, section)| {
                section.weights.iter().map(move |(item, weight)| ResultRow {
                    group: group.to_string(),
                    item: item.to_string(),
                    weight: *weight,
                    n: section.n,
                    lambda_max: section.lambda_max,
                    ci: section.ci,
                    cr: section.cr,
                    consistent: section.consistent,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::ahp::{Submission, SubmissionEvaluator};

    #[test]
    fn empty_result_has_no_rows() {
        let result = SubmissionEvaluator::default().evaluate(&Submission::builder().build());
        assert!(result.to_rows().is_empty());
    }

    #[test]
    fn one_row_per_item_in_group_then_item_order() {
        let submission = Submission::builder()
            .judgment("social", "Y", "X", Some(1.0))
            .judgment("dimensions", "B", "A", Some(3.0))
            .build();

        let rows = SubmissionEvaluator::default().evaluate(&submission).to_rows();
        let keys: Vec<_> = rows
            .iter()
            .map(|r| (r.group.as_str(), r.item.as_str()))
            .collect();

        assert_eq!(
            keys,
            vec![("dimensions", "A"), ("dimensions", "B"), ("social", "X"), ("social", "Y")]
        );
        assert_eq!(rows[0].weight, 0.25);
        assert_eq!(rows[1].weight, 0.75);
        assert!(rows.iter().all(|r| r.n == 2 && r.cr == 0.0 && r.consistent));
    }
}
