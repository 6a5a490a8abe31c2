//! Rendering example outcomes as text or JSON

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Outcome;

/// Output format for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// A complete run, as written to JSON
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub examples: Vec<Outcome>,
}

impl Report {
    pub fn new(seed: u64, examples: Vec<Outcome>) -> Self {
        Self {
            generated_at: Utc::now(),
            seed,
            examples,
        }
    }

    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Text => Ok(render_text(&self.examples)),
            Format::Json => serde_json::to_string_pretty(self)
                .context("Failed to serialize report"),
        }
    }
}

/// Human-readable form: a heading per example, then each labelled value
pub fn render_text(outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Example {}: {}\n", outcome.id, outcome.title));
        for step in &outcome.steps {
            out.push_str(&format!("  # {}\n", step.label));
            for line in step.value.to_string().lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }
    }
    out
}
