//! Comparison synthesizer.
//!
//! Reduces the heterogeneous feature and benefit lists of the selected plans
//! into one matrix: a fixed block of scalar rows followed by one presence row
//! per distinct feature id and one per distinct benefit string.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::selection::SelectionNotice;
use crate::{
    config::MIN_COMPARABLE,
    models::{Periodicity, Plan, PlanStatus, PlanType},
};

/// Whether a row carries per-plan values or per-plan booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Scalar,
    Presence,
}

/// The fixed scalar rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Price,
    Periodicity,
    IncludedSessions,
    PlanType,
    Status,
}

impl ScalarField {
    pub const ALL: [ScalarField; 5] = [
        ScalarField::Price,
        ScalarField::Periodicity,
        ScalarField::IncludedSessions,
        ScalarField::PlanType,
        ScalarField::Status,
    ];
}

/// One cell of a scalar row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarValue {
    Price {
        /// Price after discount
        amount: f64,
        /// Base price, present only when a discount applies
        original: Option<f64>,
        currency: String,
        periodicity: Periodicity,
    },
    Periodicity(Periodicity),
    /// `None` renders as an em dash
    IncludedSessions(Option<u32>),
    PlanType(PlanType),
    Status(PlanStatus),
}

impl ScalarValue {
    fn of(field: ScalarField, plan: &Plan) -> Self {
        match field {
            ScalarField::Price => ScalarValue::Price {
                amount: plan.final_price(),
                original: plan.is_discounted().then_some(plan.base_price),
                currency: plan.currency.clone(),
                periodicity: plan.periodicity,
            },
            ScalarField::Periodicity => ScalarValue::Periodicity(plan.periodicity),
            ScalarField::IncludedSessions => ScalarValue::IncludedSessions(plan.included_sessions),
            ScalarField::PlanType => ScalarValue::PlanType(plan.plan_type),
            ScalarField::Status => ScalarValue::Status(plan.status),
        }
    }
}

/// A row of the comparison matrix. Cells follow the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum ComparisonRow {
    Scalar {
        field: ScalarField,
        values: Vec<ScalarValue>,
    },
    Feature {
        feature_id: String,
        /// Label of the first occurrence across the columns
        label: String,
        highlighted: bool,
        present: Vec<bool>,
    },
    Benefit {
        text: String,
        present: Vec<bool>,
    },
}

impl ComparisonRow {
    pub fn kind(&self) -> RowKind {
        match self {
            ComparisonRow::Scalar { .. } => RowKind::Scalar,
            ComparisonRow::Feature { .. } | ComparisonRow::Benefit { .. } => RowKind::Presence,
        }
    }

    /// Per-column presence for boolean rows, `None` for scalar rows.
    pub fn presence(&self) -> Option<&[bool]> {
        match self {
            ComparisonRow::Scalar { .. } => None,
            ComparisonRow::Feature { present, .. } | ComparisonRow::Benefit { present, .. } => {
                Some(present)
            }
        }
    }
}

/// Column header identifying one compared plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonColumn {
    pub plan_id: String,
    pub name: String,
    pub is_popular: bool,
}

/// Synthesized comparison table across two or more plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonMatrix {
    /// Builds the matrix with columns in exactly the order of `plans`.
    ///
    /// # Errors
    ///
    /// Fewer than two plans yield [`SelectionNotice::InsufficientSelection`];
    /// an empty input renders as "nothing to compare".
    pub fn build(plans: &[&Plan]) -> Result<Self, SelectionNotice> {
        if plans.len() < MIN_COMPARABLE {
            return Err(SelectionNotice::insufficient(plans.len()));
        }

        let columns = plans
            .iter()
            .map(|plan| ComparisonColumn {
                plan_id: plan.id.clone(),
                name: plan.name.clone(),
                is_popular: plan.is_popular,
            })
            .collect();

        let mut rows: Vec<ComparisonRow> = ScalarField::ALL
            .iter()
            .map(|&field| ComparisonRow::Scalar {
                field,
                values: plans.iter().map(|plan| ScalarValue::of(field, plan)).collect(),
            })
            .collect();

        let mut seen_features = HashSet::new();
        for feature in plans.iter().flat_map(|plan| &plan.features) {
            if seen_features.insert(feature.id.as_str()) {
                rows.push(ComparisonRow::Feature {
                    feature_id: feature.id.clone(),
                    label: feature.label.clone(),
                    highlighted: feature.highlighted,
                    present: plans.iter().map(|p| p.has_feature(&feature.id)).collect(),
                });
            }
        }

        let mut seen_benefits = HashSet::new();
        for benefit in plans.iter().flat_map(|plan| &plan.benefits) {
            if seen_benefits.insert(benefit.as_str()) {
                rows.push(ComparisonRow::Benefit {
                    text: benefit.clone(),
                    present: plans.iter().map(|p| p.has_benefit(benefit)).collect(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Iterates over the feature presence rows.
    pub fn feature_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows
            .iter()
            .filter(|row| matches!(row, ComparisonRow::Feature { .. }))
    }

    /// Iterates over the benefit presence rows.
    pub fn benefit_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows
            .iter()
            .filter(|row| matches!(row, ComparisonRow::Benefit { .. }))
    }

    /// Finds the scalar row for `field`.
    pub fn scalar(&self, field: ScalarField) -> Option<&[ScalarValue]> {
        self.rows.iter().find_map(|row| match row {
            ComparisonRow::Scalar { field: f, values } if *f == field => Some(values.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::testing::plan, models::Feature};

    /// Plans A and B: A at 100 without discount, B at 80 with 10% off.
    fn scenario() -> (Plan, Plan) {
        let mut a = plan("A", "Plan A", 100.0);
        a.features = vec![Feature::new("f1", "24/7 access")];
        a.benefits = vec!["Mobile app".to_string()];

        let mut b = plan("B", "Plan B", 80.0);
        b.discount_percent = Some(10.0);
        b.included_sessions = Some(8);
        b.features = vec![
            Feature::new("f1", "24/7 access"),
            Feature::new("f2", "Sauna").highlighted(),
        ];
        b.benefits = vec!["Nutrition talk".to_string(), "Mobile app".to_string()];
        (a, b)
    }

    fn feature_ids(matrix: &ComparisonMatrix) -> Vec<String> {
        matrix
            .feature_rows()
            .filter_map(|row| match row {
                ComparisonRow::Feature { feature_id, .. } => Some(feature_id.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scenario_matrix() {
        let (a, b) = scenario();
        let matrix = ComparisonMatrix::build(&[&a, &b]).unwrap();

        let ids: Vec<&str> = matrix.columns.iter().map(|c| c.plan_id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);

        let prices = matrix.scalar(ScalarField::Price).unwrap();
        match &prices[0] {
            ScalarValue::Price {
                amount, original, ..
            } => {
                assert!((amount - 100.0).abs() < 1e-9);
                assert_eq!(*original, None);
            }
            other => panic!("unexpected cell {other:?}"),
        }
        match &prices[1] {
            ScalarValue::Price {
                amount, original, ..
            } => {
                assert!((amount - 72.0).abs() < 1e-9);
                assert_eq!(*original, Some(80.0));
            }
            other => panic!("unexpected cell {other:?}"),
        }

        let features: Vec<_> = matrix.feature_rows().collect();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].presence(), Some(&[true, true][..]));
        assert_eq!(features[1].presence(), Some(&[false, true][..]));
    }

    #[test]
    fn test_scalar_rows_come_first_in_fixed_order() {
        let (a, b) = scenario();
        let matrix = ComparisonMatrix::build(&[&a, &b]).unwrap();

        let scalar_fields: Vec<ScalarField> = matrix
            .rows
            .iter()
            .take_while(|row| row.kind() == RowKind::Scalar)
            .map(|row| match row {
                ComparisonRow::Scalar { field, .. } => *field,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(scalar_fields, ScalarField::ALL);
        assert!(matrix.rows[5..].iter().all(|r| r.kind() == RowKind::Presence));

        assert_eq!(
            matrix.scalar(ScalarField::IncludedSessions).unwrap(),
            [
                ScalarValue::IncludedSessions(None),
                ScalarValue::IncludedSessions(Some(8))
            ]
        );
    }

    #[test]
    fn test_columns_follow_input_order() {
        let (a, b) = scenario();
        let matrix = ComparisonMatrix::build(&[&b, &a]).unwrap();

        assert_eq!(matrix.columns[0].plan_id, "B");
        // f1, f2 discovered from B first
        assert_eq!(feature_ids(&matrix), ["f1", "f2"]);
        let f2 = matrix.feature_rows().nth(1).unwrap();
        assert_eq!(f2.presence(), Some(&[true, false][..]));
    }

    #[test]
    fn test_feature_union_first_seen_label_wins() {
        let mut a = plan("a", "A", 1.0);
        a.features = vec![Feature::new("gym", "Gym floor")];
        let mut b = plan("b", "B", 1.0);
        b.features = vec![
            Feature::new("spa", "Spa"),
            Feature::new("gym", "Full gym access").highlighted(),
        ];
        let mut c = plan("c", "C", 1.0);
        c.features = vec![Feature::new("pool", "Pool"), Feature::new("spa", "Spa & sauna")];

        let matrix = ComparisonMatrix::build(&[&a, &b, &c]).unwrap();
        assert_eq!(feature_ids(&matrix), ["gym", "spa", "pool"]);

        let first = matrix.feature_rows().next().unwrap();
        match first {
            ComparisonRow::Feature {
                label,
                highlighted,
                present,
                ..
            } => {
                assert_eq!(label, "Gym floor");
                assert!(!highlighted);
                assert_eq!(present, &[true, true, false]);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_every_feature_appears_exactly_once_with_exact_membership() {
        let mut a = plan("a", "A", 1.0);
        a.features = vec![Feature::new("x", "X"), Feature::new("y", "Y")];
        let mut b = plan("b", "B", 1.0);
        b.features = vec![Feature::new("y", "Y"), Feature::new("z", "Z")];
        let mut c = plan("c", "C", 1.0);
        c.features = vec![Feature::new("x", "X")];
        let plans = [&a, &b, &c];

        let matrix = ComparisonMatrix::build(&plans).unwrap();
        for feature in plans.iter().flat_map(|p| &p.features) {
            let rows: Vec<_> = matrix
                .feature_rows()
                .filter(|row| {
                    matches!(row, ComparisonRow::Feature { feature_id, .. } if *feature_id == feature.id)
                })
                .collect();
            assert_eq!(rows.len(), 1, "feature {}", feature.id);

            let expected: Vec<bool> = plans.iter().map(|p| p.has_feature(&feature.id)).collect();
            assert_eq!(rows[0].presence().unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn test_benefit_union_by_exact_string() {
        let (a, b) = scenario();
        let matrix = ComparisonMatrix::build(&[&a, &b]).unwrap();

        let benefits: Vec<(&str, &[bool])> = matrix
            .benefit_rows()
            .filter_map(|row| match row {
                ComparisonRow::Benefit { text, present } => Some((text.as_str(), present.as_slice())),
                _ => None,
            })
            .collect();
        assert_eq!(
            benefits,
            [
                ("Mobile app", &[true, true][..]),
                ("Nutrition talk", &[false, true][..]),
            ]
        );
    }

    #[test]
    fn test_rejects_fewer_than_two() {
        let (a, _) = scenario();
        assert_eq!(
            ComparisonMatrix::build(&[&a]),
            Err(SelectionNotice::InsufficientSelection {
                selected: 1,
                required: 2
            })
        );
        assert_eq!(
            ComparisonMatrix::build(&[]),
            Err(SelectionNotice::InsufficientSelection {
                selected: 0,
                required: 2
            })
        );
    }
}
