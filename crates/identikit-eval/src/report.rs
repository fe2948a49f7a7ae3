use crate::metrics::{DatasetMetrics, Violation};

/// Render a deterministic markdown report from metrics and violations.
pub fn render_report(
    metrics: &DatasetMetrics,
    violations: &[Violation],
    max_examples: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push("# Identikit Dataset Report".to_string());
    lines.push(String::new());
    lines.push("## Summary".to_string());
    lines.push(format!("- records: {}", metrics.records));
    lines.push(format!("- entities: {}", metrics.entities));
    lines.push(format!(
        "- avg entities per record: {:.1}",
        metrics.avg_entities_per_record
    ));
    lines.push(format!("- violations: {}", metrics.violations));
    lines.push(String::new());

    lines.push("## Entities by label".to_string());
    lines.push("| label | count |".to_string());
    lines.push("| --- | --- |".to_string());
    for (label, count) in &metrics.label_counts {
        lines.push(format!("| {label} | {count} |"));
    }
    lines.push(String::new());

    if violations.is_empty() {
        lines.push("All spans are exact substrings of their records.".to_string());
    } else {
        lines.push("## Violations".to_string());
        for violation in violations.iter().take(max_examples) {
            let actual = violation.actual.as_deref().unwrap_or("<out of bounds>");
            lines.push(format!(
                "- record {} [{}, {}) {}: expected '{}', found '{}'",
                violation.record_index,
                violation.start,
                violation.end,
                violation.label,
                violation.expected,
                actual
            ));
        }
        if violations.len() > max_examples {
            lines.push(format!("- ... and {} more", violations.len() - max_examples));
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn report_truncates_violation_examples() {
        let metrics = DatasetMetrics {
            metrics_version: "0.1".to_string(),
            records: 2,
            entities: 3,
            violations: 3,
            avg_entities_per_record: 1.5,
            label_counts: BTreeMap::new(),
        };
        let violations: Vec<Violation> = (0..3)
            .map(|index| Violation {
                record_index: index,
                start: 0,
                end: 1,
                label: "Name".to_string(),
                expected: "A".to_string(),
                actual: Some("B".to_string()),
            })
            .collect();

        let report = render_report(&metrics, &violations, 2);
        assert!(report.contains("- ... and 1 more"));
        assert!(report.contains("violations: 3"));
    }
}
