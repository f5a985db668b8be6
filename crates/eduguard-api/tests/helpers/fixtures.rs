//! Test fixtures: small file payloads and analysis results.

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;
use eduguard_core::models::{AnalysisResult, DetectedLabel, DetectedText, TextKind};

/// Minimal valid 1x1 PNG bytes.
pub fn create_minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// Bytes that start like a PDF. Nothing parses them.
pub fn create_minimal_pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj<<>>endobj\ntrailer<<>>\n%%EOF\n".to_vec()
}

/// Form with a single `file` field.
pub fn file_form(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(Bytes::from(data))
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("file", part)
}

/// Labels and text for a photo of an exam desk.
pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        labels: vec![
            DetectedLabel {
                name: "Person".to_string(),
                confidence: 99.5,
                parents: vec![],
            },
            DetectedLabel {
                name: "Mobile Phone".to_string(),
                confidence: 87.5,
                parents: vec!["Electronics".to_string()],
            },
        ],
        texts: vec![DetectedText {
            text: "x = 42".to_string(),
            confidence: 91.0,
            kind: Some(TextKind::Line),
            id: Some(0),
            parent_id: None,
        }],
    }
}
