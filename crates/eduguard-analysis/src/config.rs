use std::time::Duration;

/// Analyzer tuning. Defaults match what the upload endpoint has always requested.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Most labels returned by label detection
    pub max_labels: i32,
    /// Minimum label confidence threshold (0-100)
    pub min_confidence: f32,
    /// Per remote call timeout
    pub timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_labels: 10,
            min_confidence: 70.0,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
