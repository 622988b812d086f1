// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The full response to one user action, and its text and JSON forms.

use crate::algebra::ordering::{display_order, format_set};
use crate::algebra::{compute, NamedSet, Operation};
use crate::config::Limits;
use crate::error::SetError;
use crate::partition::Emphasis;
use crate::render::{Diagram, DiagramPlan};
use colored::*;
use serde::Serialize;
use std::fmt;

/// One entered set, elements in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetListing {
    pub name: String,
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sets: Vec<SetListing>,
    pub operation: Operation,
    /// Expression such as "A ∪ B".
    pub expression: String,
    /// Result elements in display order.
    pub result: Vec<String>,
    pub diagram: Diagram,
}

impl Report {
    /// Compute `operation` over `sets` and plan the diagram.
    ///
    /// # Errors
    ///
    /// Only errors from the set algebra itself, such as
    /// [`SetError::InvalidArity`]; a diagram that cannot be drawn is
    /// reported through [`Diagram::Omitted`].
    pub fn build(sets: &[NamedSet], operation: Operation, limits: &Limits) -> Result<Self, SetError> {
        let result = compute(operation, sets)?;
        let diagram = Diagram::build(sets, operation, &result, limits.label_elements);

        Ok(Self {
            sets: sets
                .iter()
                .map(|s| SetListing {
                    name: s.name.clone(),
                    elements: display_order(&s.elements),
                })
                .collect(),
            operation,
            result: display_order(&result.elements),
            expression: result.label,
            diagram,
        })
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Report formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    pub fn format_report(&self, report: &Report) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report),
            OutputFormat::Text => Ok(self.format_text(report)),
        }
    }

    fn format_text(&self, report: &Report) -> String {
        TextReport {
            formatter: self,
            report,
        }
        .to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, emphasis: Option<Emphasis>) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match emphasis {
            None => text.yellow().to_string(),
            Some(Emphasis::Baseline) => text.dimmed().to_string(),
            Some(Emphasis::Union) => text.cyan().to_string(),
            Some(Emphasis::Intersection) => text.yellow().to_string(),
            Some(Emphasis::Difference) => text.green().to_string(),
            Some(Emphasis::SymmetricDifference) => text.red().to_string(),
        }
    }
}

/// Text layout of a [`Report`].
struct TextReport<'a> {
    formatter: &'a Formatter,
    report: &'a Report,
}

impl TextReport<'_> {
    fn write_regions(&self, f: &mut fmt::Formatter<'_>, plan: &DiagramPlan) -> fmt::Result {
        writeln!(f, "  {:<8}{:<16}{:<22}elements", "region", "sets", "emphasis")?;
        for region in &plan.regions {
            let inside: Vec<&str> = region
                .id
                .curves()
                .filter_map(|c| plan.set_labels.get(c.as_usize()).map(String::as_str))
                .collect();
            let emphasis: &'static str = region.emphasis.into();
            let row = format!(
                "{:<8}{:<16}{:<22}{}",
                region.id.to_string(),
                inside.join(" ∩ "),
                emphasis,
                region.label.replace('\n', ", ")
            );
            writeln!(f, "  {}", self.formatter.paint(&row, Some(region.emphasis)))?;
        }
        Ok(())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { formatter, report } = self;

        writeln!(f, "{}", formatter.heading("Sets entered:"))?;
        for set in &report.sets {
            writeln!(f, "  {} = {}", set.name, format_set(&set.elements))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", formatter.heading(&format!("Result of {}:", report.expression)))?;
        writeln!(f, "  Result = {}", format_set(&report.result))?;

        writeln!(f)?;
        match &report.diagram {
            Diagram::Drawn(plan) => {
                writeln!(f, "{}", formatter.heading("Venn diagram:"))?;
                self.write_regions(f, plan)
            }
            Diagram::Omitted { notice } => {
                writeln!(f, "{}", formatter.paint(&notice.to_string(), None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> Vec<NamedSet> {
        vec![
            NamedSet::new("A", ["3", "1", "2"]),
            NamedSet::new("B", ["2", "3", "4"]),
        ]
    }

    #[test]
    fn test_build() {
        let report = Report::build(&sets(), Operation::Union, &Limits::default()).unwrap();
        assert_eq!(report.expression, "A ∪ B");
        assert_eq!(report.result, vec!["1", "2", "3", "4"]);
        assert_eq!(report.sets[0].elements, vec!["1", "2", "3"]);
        assert!(report.diagram.plan().is_some());
    }

    #[test]
    fn test_build_invalid_arity() {
        let mut three = sets();
        three.push(NamedSet::new("C", ["9"]));
        assert!(matches!(
            Report::build(&three, Operation::SymmetricDifference, &Limits::default()),
            Err(SetError::InvalidArity { .. })
        ));
    }

    #[test]
    fn test_text_output() {
        let report = Report::build(&sets(), Operation::Intersection, &Limits::default()).unwrap();
        let text = Formatter::new(OutputFormat::Text, false)
            .format_report(&report)
            .unwrap();
        assert!(text.contains("Sets entered:\n  A = { 1, 2, 3 }\n  B = { 2, 3, 4 }\n"));
        assert!(text.contains("Result of A ∩ B:\n  Result = { 2, 3 }\n"));
        assert!(text.contains("Venn diagram:"));
        let row = text.lines().find(|l| l.trim_start().starts_with("11")).unwrap();
        assert!(row.contains("A ∩ B"));
        assert!(row.contains("intersection"));
        assert!(row.ends_with("2, 3"));
    }

    #[test]
    fn test_text_output_without_diagram() {
        let many: Vec<NamedSet> = (0..4).map(|i| NamedSet::new(format!("S{}", i), ["1"])).collect();
        let report = Report::build(&many, Operation::Union, &Limits::default()).unwrap();
        let text = Formatter::new(OutputFormat::Text, false)
            .format_report(&report)
            .unwrap();
        assert!(text.contains("more than 3 sets"));
        assert!(!text.contains("Venn diagram:"));
    }

    #[test]
    fn test_text_layout_is_complete() {
        let many: Vec<NamedSet> = (0..4).map(|i| NamedSet::new(format!("S{}", i), ["1"])).collect();
        let report = Report::build(&many, Operation::Intersection, &Limits::default()).unwrap();
        let text = Formatter::new(OutputFormat::Text, false)
            .format_report(&report)
            .unwrap();
        assert_eq!(
            text,
            "Sets entered:\n  S0 = { 1 }\n  S1 = { 1 }\n  S2 = { 1 }\n  S3 = { 1 }\n\n\
             Result of S0 ∩ S1 ∩ S2 ∩ S3:\n  Result = { 1 }\n\n\
             Result computed (a Venn diagram cannot be drawn for more than 3 sets).\n"
        );
    }

    #[test]
    fn test_build_with_nan_tokens() {
        let sets: Vec<NamedSet> = (0..3)
            .map(|s| {
                let mut tokens: Vec<String> = (0..14).map(|i| (s * 14 + i).to_string()).collect();
                tokens.push(if s == 1 { "nan" } else { "NaN" }.to_string());
                NamedSet::new(format!("S{}", s), tokens)
            })
            .collect();
        let report = Report::build(&sets, Operation::Union, &Limits::default()).unwrap();
        assert_eq!(report.result.len(), 44);
        let numbers: Vec<f64> = report.result[..42].iter().map(|s| s.parse().unwrap()).collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(report.result[42..], ["NaN", "nan"]);
    }

    #[test]
    fn test_json_output() {
        let report = Report::build(&sets(), Operation::Difference, &Limits::default()).unwrap();
        let json = Formatter::new(OutputFormat::Json, false)
            .format_report(&report)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["operation"], "difference");
        assert_eq!(value["expression"], "A - B");
        assert_eq!(value["result"], serde_json::json!(["1"]));
        assert_eq!(value["diagram"]["kind"], "drawn");
    }
}
