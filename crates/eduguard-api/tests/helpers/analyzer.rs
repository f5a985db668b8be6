use async_trait::async_trait;
use eduguard_analysis::{AnalysisError, AnalysisOutput, ImageAnalyzer};
use eduguard_core::models::{AnalysisResult, ObjectRef};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Analyzer returning a canned answer and recording what it was asked about.
pub struct FakeAnalyzer {
    output: AnalysisOutput,
    calls: AtomicUsize,
    last_object: Mutex<Option<ObjectRef>>,
}

impl FakeAnalyzer {
    pub fn succeeding(result: AnalysisResult) -> Self {
        Self::with_output(Ok(result))
    }

    pub fn failing(error: AnalysisError) -> Self {
        Self::with_output(Err(error))
    }

    fn with_output(output: AnalysisOutput) -> Self {
        Self {
            output,
            calls: AtomicUsize::new(0),
            last_object: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_object(&self) -> Option<ObjectRef> {
        self.last_object.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageAnalyzer for FakeAnalyzer {
    async fn analyze(&self, object: &ObjectRef) -> AnalysisOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_object.lock().unwrap() = Some(object.clone());
        self.output.clone()
    }

    fn is_configured(&self) -> bool {
        true
    }
}
