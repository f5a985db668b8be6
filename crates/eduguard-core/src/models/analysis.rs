//! Image analysis results.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Granularity of a text detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Line,
    Word,
}

/// Label reported by the analysis provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    pub name: String,
    /// Confidence in `[0, 100]`
    pub confidence: f32,
    #[serde(default)]
    pub parents: Vec<String>,
}

/// Text found in an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedText {
    pub text: String,
    pub confidence: f32,
    pub kind: Option<TextKind>,
    pub id: Option<i32>,
    pub parent_id: Option<i32>,
}

/// Merged output of label detection and text detection on one stored object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub labels: Vec<DetectedLabel>,
    pub texts: Vec<DetectedText>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.texts.is_empty()
    }

    /// Public projection: label name and confidence, detected text and confidence.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            labels: self
                .labels
                .iter()
                .map(|label| LabelSummary {
                    name: label.name.clone(),
                    confidence: label.confidence,
                })
                .collect(),
            detected_text: self
                .texts
                .iter()
                .map(|text| TextSummary {
                    text: text.text.clone(),
                    confidence: text.confidence,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelSummary {
    #[schema(example = "Person")]
    pub name: String,
    #[schema(example = 99.1)]
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextSummary {
    #[schema(example = "EXAM")]
    pub text: String,
    #[schema(example = 97.4)]
    pub confidence: f32,
}

/// `analysis` section of an upload response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub labels: Vec<LabelSummary>,
    pub detected_text: Vec<TextSummary>,
}
