//! Text and JSON reports

use anyhow::{Context, Result};
use clap::ValueEnum;
use cofactor_core::{Analysis, Narration, Step};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `(3) · (3)`, or `(1)` when there is nothing to multiply
pub fn format_product(factors: &[u64]) -> String {
    if factors.is_empty() {
        return "(1)".to_string();
    }
    factors
        .iter()
        .map(|f| format!("({f})"))
        .collect::<Vec<_>>()
        .join(" · ")
}

/// `cofactor factor` output line
pub fn factor_line(n: u64, factors: &[u64]) -> String {
    format!("{} = {}", n, format_product(factors))
}

pub fn render(format: OutputFormat, analysis: &Analysis, steps: bool) -> Result<String> {
    render_all(format, std::slice::from_ref(analysis), steps)
}

/// Render several analyses: text blocks separated by a blank line, or one JSON array
pub fn render_all(format: OutputFormat, analyses: &[Analysis], steps: bool) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let blocks = analyses
                .iter()
                .map(|analysis| render_text(analysis, steps))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(blocks.join("\n\n"))
        }
        OutputFormat::Json => {
            let reports: Vec<JsonReport<'_>> = analyses
                .iter()
                .map(|analysis| JsonReport::new(analysis, steps))
                .collect();
            if let [report] = reports.as_slice() {
                serde_json::to_string_pretty(report).context("Failed to serialize report")
            } else {
                serde_json::to_string_pretty(&reports).context("Failed to serialize report")
            }
        }
    }
}

fn render_text(analysis: &Analysis, steps: bool) -> Result<String, std::fmt::Error> {
    let narration = Narration::from_analysis(analysis);
    let m = &analysis.matching;
    let mut out = String::new();

    writeln!(out, "{}", factor_line(analysis.x, &analysis.x_factors))?;
    writeln!(out, "{}", factor_line(analysis.y, &analysis.y_factors))?;
    writeln!(out, "matched:     {}", format_product(&m.matched()))?;
    writeln!(out, "leftover x:  {}", format_product(&m.unmatched_a()))?;
    writeln!(out, "leftover y:  {}", format_product(&m.unmatched_b()))?;
    writeln!(out, "GCF = {}", analysis.gcf)?;
    writeln!(out, "LCM = {}", analysis.lcm)?;

    if steps {
        writeln!(out)?;
        for (i, step) in narration.steps().iter().enumerate() {
            writeln!(out, "{:>2}. {}", i + 1, step)?;
        }
    }

    writeln!(out)?;
    out.push_str(&narration.summary());
    Ok(out)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
}

impl<'a> JsonReport<'a> {
    fn new(analysis: &'a Analysis, steps: bool) -> Self {
        let narration = Narration::from_analysis(analysis);
        Self {
            analysis,
            summary: narration.summary(),
            steps: steps.then(|| narration.steps().to_vec()),
        }
    }
}
