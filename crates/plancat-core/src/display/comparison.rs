//! Markdown rendering of comparison matrices.

use std::fmt;

use super::labels::PriceTag;
use crate::engine::{ComparisonMatrix, ComparisonRow, ScalarField, ScalarValue};

const PRESENT: &str = "✓";
const ABSENT: &str = "✗";
const NO_VALUE: &str = "—";

impl ScalarField {
    /// Row heading.
    pub fn label(&self) -> &'static str {
        match self {
            ScalarField::Price => "Price",
            ScalarField::Periodicity => "Billing",
            ScalarField::IncludedSessions => "Sessions",
            ScalarField::PlanType => "Type",
            ScalarField::Status => "Status",
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Price {
                amount,
                original,
                currency,
                periodicity,
            } => write!(
                f,
                "{}",
                PriceTag {
                    amount: *amount,
                    original: *original,
                    currency,
                    periodicity: *periodicity,
                }
            ),
            ScalarValue::Periodicity(periodicity) => write!(f, "{}", periodicity.label()),
            ScalarValue::IncludedSessions(Some(sessions)) => write!(f, "{sessions}"),
            ScalarValue::IncludedSessions(None) => write!(f, "{NO_VALUE}"),
            ScalarValue::PlanType(plan_type) => write!(f, "{}", plan_type.label()),
            ScalarValue::Status(status) => write!(f, "{}", status.badge()),
        }
    }
}

impl fmt::Display for ComparisonMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| |")?;
        for column in &self.columns {
            if column.is_popular {
                write!(f, " {} ★ |", cell(&column.name))?;
            } else {
                write!(f, " {} |", cell(&column.name))?;
            }
        }
        writeln!(f)?;
        write!(f, "|---|")?;
        for _ in &self.columns {
            write!(f, ":---:|")?;
        }
        writeln!(f)?;

        let mut features_started = false;
        let mut benefits_started = false;
        for row in &self.rows {
            match row {
                ComparisonRow::Scalar { field, values } => {
                    write!(f, "| {} |", field.label())?;
                    for value in values {
                        write!(f, " {} |", cell(&value.to_string()))?;
                    }
                }
                ComparisonRow::Feature {
                    label,
                    highlighted,
                    present,
                    ..
                } => {
                    if !features_started {
                        features_started = true;
                        self.section(f, "Features")?;
                    }
                    if *highlighted {
                        write!(f, "| **{}** |", cell(label))?;
                    } else {
                        write!(f, "| {} |", cell(label))?;
                    }
                    write_presence(f, present)?;
                }
                ComparisonRow::Benefit { text, present } => {
                    if !benefits_started {
                        benefits_started = true;
                        self.section(f, "Benefits")?;
                    }
                    write!(f, "| {} |", cell(text))?;
                    write_presence(f, present)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl ComparisonMatrix {
    fn section(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        write!(f, "| *{title}* |")?;
        for _ in &self.columns {
            write!(f, " |")?;
        }
        writeln!(f)
    }
}

fn write_presence(f: &mut fmt::Formatter<'_>, present: &[bool]) -> fmt::Result {
    for &on in present {
        write!(f, " {} |", if on { PRESENT } else { ABSENT })?;
    }
    Ok(())
}

/// Escapes table separators inside a cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
