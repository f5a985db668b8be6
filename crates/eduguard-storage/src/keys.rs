//! Shared key generation for storage backends.
//!
//! Key format: `uploads/{timestamp_millis}-{filename}`.

use chrono::{DateTime, Utc};
use eduguard_core::constants::UPLOAD_PREFIX;
use eduguard_core::models::StoredObjectKey;

/// Longest filename component embedded in a key
pub const MAX_FILENAME_LEN: usize = 200;

const MAX_EXTENSION_LEN: usize = 16;
const FALLBACK_FILENAME: &str = "file";

/// Canonicalize a client-supplied filename for use inside an object key.
///
/// Only the final path component is kept, characters outside `[A-Za-z0-9._-]` become
/// `_`, runs of dots are collapsed so `..` never survives, and the result is capped at
/// [`MAX_FILENAME_LEN`] characters (keeping a short extension when truncating). An empty
/// result becomes `file`.
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let mut sanitized = String::with_capacity(last.len());
    for c in last.chars() {
        let mapped = if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            c
        } else {
            '_'
        };
        if mapped == '.' && sanitized.ends_with('.') {
            continue;
        }
        sanitized.push(mapped);
    }

    if sanitized.is_empty() || sanitized == "." {
        return FALLBACK_FILENAME.to_string();
    }

    // Only ASCII remains, so byte offsets are char offsets.
    if sanitized.len() > MAX_FILENAME_LEN {
        let extension = sanitized
            .rfind('.')
            .map(|idx| &sanitized[idx..])
            .filter(|ext| ext.len() <= MAX_EXTENSION_LEN)
            .unwrap_or("");
        let stem_len = MAX_FILENAME_LEN - extension.len();
        sanitized = format!("{}{}", &sanitized[..stem_len], extension);
    }

    sanitized
}

/// Generate the object key for an upload received at `at`.
pub fn generate_object_key(at: DateTime<Utc>, filename: &str) -> StoredObjectKey {
    StoredObjectKey::new(format!(
        "{}/{}-{}",
        UPLOAD_PREFIX,
        at.timestamp_millis(),
        sanitize_filename(filename)
    ))
}

/// Keys may not escape their root.
pub(crate) fn is_safe_key(key: &str) -> bool {
    !key.is_empty() && !key.contains("..") && !key.starts_with('/') && !key.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_uses_timestamp_millis_and_name() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let key = generate_object_key(at, "photo.jpg");
        assert_eq!(key.as_str(), "uploads/1700000000123-photo.jpg");
    }

    #[test]
    fn test_plain_names_are_unchanged() {
        assert_eq!(sanitize_filename("exam_answers-v2.pdf"), "exam_answers-v2.pdf");
    }

    #[test]
    fn test_path_components_are_stripped() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\amy\\scan.png"), "scan.png");
        assert_eq!(sanitize_filename("dir/"), "file");
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_filename("résumé.docx"), "r_sum_.docx");
    }

    #[test]
    fn test_dot_runs_collapse() {
        assert_eq!(sanitize_filename("a..b...jpg"), "a.b.jpg");
        assert_eq!(sanitize_filename(".."), "file");
        assert!(!sanitize_filename("....").contains(".."));
    }

    #[test]
    fn test_long_names_keep_extension() {
        let long = format!("{}.jpeg", "a".repeat(500));
        let sanitized = sanitize_filename(&long);
        assert_eq!(sanitized.len(), MAX_FILENAME_LEN);
        assert!(sanitized.ends_with(".jpeg"));
    }

    #[test]
    fn test_generated_keys_are_safe() {
        let at = Utc.timestamp_millis_opt(0).unwrap();
        for name in ["../x.png", "/abs.png", "..\\..\\y.gif", ""] {
            let key = generate_object_key(at, name);
            assert!(is_safe_key(key.as_str()), "{}", key);
        }
    }
}
