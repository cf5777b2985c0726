//! Plagiarism report model.
//!
//! The backend produces the report; this app only renders it. The score is
//! bucketed into three severity bands that drive the color coding of the
//! result pane.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    pub similarity_percentage: f64,
    #[serde(default)]
    pub sources: Vec<PlagiarismSource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlagiarismSource {
    pub url: String,
    pub title: String,
    pub percentage: f64,
}

/// Severity band for a similarity score: below 15% is low, 15-30% moderate,
/// above 30% high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBand {
    Low,
    Moderate,
    High,
}

impl SimilarityBand {
    pub fn of(percentage: f64) -> Self {
        if percentage < 15.0 {
            SimilarityBand::Low
        } else if percentage <= 30.0 {
            SimilarityBand::Moderate
        } else {
            SimilarityBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SimilarityBand::Low => "Low similarity",
            SimilarityBand::Moderate => "Moderate similarity",
            SimilarityBand::High => "High similarity",
        }
    }

    /// CSS color used for the score dial and band chip.
    pub fn color(self) -> &'static str {
        match self {
            SimilarityBand::Low => "#10b981",
            SimilarityBand::Moderate => "#f59e0b",
            SimilarityBand::High => "#ef4444",
        }
    }
}

impl PlagiarismReport {
    pub fn band(&self) -> SimilarityBand {
        SimilarityBand::of(self.similarity_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(SimilarityBand::of(0.0), SimilarityBand::Low);
        assert_eq!(SimilarityBand::of(14.9), SimilarityBand::Low);
        assert_eq!(SimilarityBand::of(15.0), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::of(30.0), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::of(30.1), SimilarityBand::High);
        assert_eq!(SimilarityBand::of(100.0), SimilarityBand::High);
    }

    #[test]
    fn report_deserializes_from_wire_shape() {
        let report: PlagiarismReport = serde_json::from_str(
            r#"{
                "similarityPercentage": 22.5,
                "sources": [
                    {"url": "https://example.com/a", "title": "Example A", "percentage": 12.0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(report.band(), SimilarityBand::Moderate);
        assert_eq!(report.sources.len(), 1);
        assert_eq!(report.sources[0].title, "Example A");
    }

    #[test]
    fn sources_default_to_empty() {
        let report: PlagiarismReport =
            serde_json::from_str(r#"{"similarityPercentage": 3.0}"#).unwrap();
        assert!(report.sources.is_empty());
        assert_eq!(report.band(), SimilarityBand::Low);
    }
}
