//! The published report and its console summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use narrative_rules::SourceKind;

use crate::aggregator::{DetectionResult, Narrative};

const TREND_UP_THRESHOLD: f64 = 0.6;
const TREND_DOWN_THRESHOLD: f64 = 0.3;
const BAR_CELLS: u32 = 10;

/// Overall direction across all narratives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Direction from the mean confidence: above 0.6 is up, below 0.3 is down.
    pub fn from_narratives(narratives: &[Narrative]) -> Self {
        if narratives.is_empty() {
            return TrendDirection::Flat;
        }

        let mean = narratives.iter().map(|n| n.confidence).sum::<f64>() / narratives.len() as f64;
        if mean > TREND_UP_THRESHOLD {
            TrendDirection::Up
        } else if mean < TREND_DOWN_THRESHOLD {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

/// The document written for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub timestamp: DateTime<Utc>,
    pub total_narratives: usize,
    pub trending: TrendDirection,
    pub narratives: Vec<Narrative>,
}

impl From<DetectionResult> for DetectionReport {
    fn from(result: DetectionResult) -> Self {
        Self {
            timestamp: result.timestamp,
            total_narratives: result.narratives.len(),
            trending: TrendDirection::from_narratives(&result.narratives),
            narratives: result.narratives,
        }
    }
}

impl DetectionReport {
    /// One console line per narrative, in report order.
    pub fn summary_lines(&self) -> Vec<String> {
        self.narratives.iter().map(summary_line).collect()
    }
}

/// Render a ten-cell confidence bar.
pub fn confidence_bar(percent: u32) -> String {
    let filled = (percent / 10).min(BAR_CELLS) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS as usize - filled))
}

fn summary_line(narrative: &Narrative) -> String {
    let percent = narrative.confidence_percent();
    let counts: Vec<String> = SourceKind::ALL
        .iter()
        .map(|&source| {
            let initial = source.as_str()[..1].to_uppercase();
            format!("{initial}:{}", narrative.data_sources.count(source))
        })
        .collect();

    format!(
        "{} {:>3}% - {:<20} [{}]",
        confidence_bar(percent),
        percent,
        narrative.name,
        counts.join(" ")
    )
}
