//! Sample reporting and export
//!
//! Summarizes a sampling run as JSON or Markdown.

use crate::error::Result;
use crate::path::{PathValue, Variant};
use crate::sampler::{SampleConfig, VariantTally};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MAX_EXAMPLES: usize = 5;

/// Summary of one sampling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReport {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub config: SampleConfig,
    pub tally: VariantTally,
    /// First few drawn values
    pub examples: Vec<PathValue>,
}

impl SampleReport {
    pub fn new(
        name: &str,
        config: SampleConfig,
        tally: VariantTally,
        examples: impl IntoIterator<Item = PathValue>,
    ) -> Self {
        Self {
            name: name.to_string(),
            generated_at: Utc::now(),
            config,
            tally,
            examples: examples.into_iter().take(MAX_EXAMPLES).collect(),
        }
    }

    /// Export as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export as Markdown summary
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Sample Report: {}\n\n", self.name));
        md.push_str(&format!(
            "**Date:** {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        md.push_str(&format!("**Seed:** {}\n\n", self.config.seed));

        md.push_str("| Variant | Count | Share |\n");
        md.push_str("|---------|-------|-------|\n");
        for variant in Variant::ALL {
            let count = self.tally.count(variant);
            let share = if self.tally.total > 0 {
                count as f64 / self.tally.total as f64 * 100.0
            } else {
                0.0
            };
            md.push_str(&format!("| {} | {} | {:.1}% |\n", variant, count, share));
        }
        md.push_str(&format!(
            "\n{} values, {} empty, longest {}\n",
            self.tally.total, self.tally.empty, self.tally.max_len
        ));

        if !self.examples.is_empty() {
            md.push_str("\n## Examples\n\n");
            for (i, example) in self.examples.iter().enumerate() {
                md.push_str(&format!("{}. `{}`: `{:?}`\n", i + 1, example.variant(), example));
            }
        }

        md
    }
}
