//! Property-based tests for document naming and staging
//!
//! Tests invariants:
//! - Stripping the display stem removes exactly one final extension
//! - The stem is always a prefix of the original name
//! - `.txt` staging accepts arbitrary content
//! - Unknown extensions are rejected with the allow-list message
//! - `.pdf` staging demands the `%PDF-` header

use proptest::prelude::*;

use crate::core::document::{self, DocumentKind, UploadedDocumentRef};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// A file stem without dots or path separators.
fn arb_stem() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{1,20}"
}

/// A plausible extension without dots.
fn arb_ext() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,8}"
}

/// An extension that is definitely not in the allow-list.
fn arb_unknown_ext() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_filter("must not be an accepted type", |e| {
        !matches!(e.as_str(), "pdf" | "docx" | "txt")
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Stripping the stem removes exactly one final extension
    #[test]
    fn prop_stem_strips_one_final_extension(
        stem in arb_stem(),
        ext in arb_ext()
    ) {
        let name = format!("{stem}.{ext}");
        prop_assert_eq!(document::display_stem(&name), stem);
    }

    /// Property: Dot-free names pass through unchanged
    #[test]
    fn prop_dotless_names_pass_through(stem in arb_stem()) {
        prop_assert_eq!(document::display_stem(&stem), stem.clone());
    }

    /// Property: Only the final extension is removed from multi-dot names
    #[test]
    fn prop_multi_dot_names_keep_inner_extensions(
        stem in arb_stem(),
        inner in arb_ext(),
        outer in arb_ext()
    ) {
        let name = format!("{stem}.{inner}.{outer}");
        prop_assert_eq!(
            document::display_stem(&name),
            format!("{stem}.{inner}")
        );
    }

    /// Property: The stem is always a prefix of the original name
    #[test]
    fn prop_stem_is_prefix_of_name(name in "[A-Za-z0-9 ._-]{0,30}") {
        let stem = document::display_stem(&name);
        prop_assert!(
            name.starts_with(&stem),
            "stem {:?} should be a prefix of {:?}",
            stem,
            name
        );
    }

    /// Property: `.txt` staging accepts arbitrary content
    #[test]
    fn prop_txt_accepts_any_content(content in prop::collection::vec(any::<u8>(), 0..512)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, &content).unwrap();

        let doc = UploadedDocumentRef::stage(&path).unwrap();
        prop_assert_eq!(doc.kind, DocumentKind::Text);
        prop_assert_eq!(doc.file_name, "sample.txt");
    }

    /// Property: Unknown extensions are rejected with the allow-list message
    #[test]
    fn prop_unknown_extensions_are_rejected(
        stem in "[a-z0-9]{1,10}",
        ext in arb_unknown_ext()
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{stem}.{ext}"));
        std::fs::write(&path, b"anything").unwrap();

        let err = UploadedDocumentRef::stage(&path).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            "Only PDF, DOCX, and TXT files are allowed."
        );
    }

    /// Property: `.pdf` staging demands the `%PDF-` header
    #[test]
    fn prop_pdf_requires_magic_header(body in prop::collection::vec(any::<u8>(), 0..64)) {
        let dir = tempfile::tempdir().unwrap();

        // With the header: accepted
        let good = dir.path().join("good.pdf");
        let mut content = b"%PDF-".to_vec();
        content.extend_from_slice(&body);
        std::fs::write(&good, &content).unwrap();
        prop_assert_eq!(
            UploadedDocumentRef::stage(&good).unwrap().kind,
            DocumentKind::Pdf
        );

        // Without it: rejected
        let bad = dir.path().join("bad.pdf");
        let mut content = b"XX".to_vec();
        content.extend_from_slice(&body);
        std::fs::write(&bad, &content).unwrap();
        prop_assert!(UploadedDocumentRef::stage(&bad).is_err());
    }

    /// Property: Extension matching is case-insensitive
    #[test]
    fn prop_extension_case_is_ignored(upper in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let name = if upper { "NOTES.TXT" } else { "notes.txt" };
        let path = dir.path().join(name);
        std::fs::write(&path, b"hello").unwrap();

        let doc = UploadedDocumentRef::stage(&path).unwrap();
        prop_assert_eq!(doc.kind, DocumentKind::Text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Basic sanity test matching the documented example
    #[test]
    fn test_report_pdf_becomes_report() {
        assert_eq!(document::display_stem("Report.pdf"), "Report");
        assert_eq!(document::display_stem("archive.tar.gz"), "archive.tar");
    }
}
