//! Document identification and naming.
//!
//! The backend accepts exactly three document types. Selection is validated
//! locally before any request is issued: the extension picks the candidate
//! kind, and for the binary kinds the file's leading bytes must carry the
//! matching signature. Display names are the file name with its final
//! extension stripped.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// MIME types the backend accepts.
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Display name used when no document is attached to a chat.
pub const DEFAULT_DISPLAY_NAME: &str = "RoleDoc";

/// Matches a final extension: a dot followed by non-dot, non-slash chars.
static EXTENSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("Failed to compile extension regex"));

// ============================================================================
// Document kinds
// ============================================================================

/// Accepted document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// MIME type sent with the upload form.
    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::Text => "text/plain",
        }
    }

    /// Short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Text => "TXT",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

/// Document validation and access errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Extension outside the allow-list, or leading bytes that do not match
    /// the extension's signature. The message is shown to the user verbatim.
    #[error("Only PDF, DOCX, and TXT files are allowed.")]
    UnsupportedType,

    #[error("cannot read file: {0}")]
    Io(#[from] io::Error),
}

/// Sniff a file's kind from its extension plus leading bytes.
///
/// `.txt` relies on the extension alone; `.pdf` requires the `%PDF-` header
/// and `.docx` the `PK` zip signature.
pub fn detect(path: &Path) -> Result<DocumentKind, DocumentError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let Some(kind) = DocumentKind::from_extension(&ext) else {
        log::debug!("Rejected '{}': extension not in allow-list", path.display());
        return Err(DocumentError::UnsupportedType);
    };

    let signature: &[u8] = match kind {
        DocumentKind::Pdf => b"%PDF-",
        DocumentKind::Docx => b"PK",
        DocumentKind::Text => return Ok(kind),
    };

    let head = leading_bytes(path, signature.len())?;
    if head.starts_with(signature) {
        Ok(kind)
    } else {
        log::debug!(
            "Rejected '{}': leading bytes do not match .{}",
            path.display(),
            ext
        );
        Err(DocumentError::UnsupportedType)
    }
}

fn leading_bytes(path: &Path, n: usize) -> io::Result<Vec<u8>> {
    let mut file = fs::File::open(path)?;
    let mut buf = vec![0u8; n];
    let read = file.read(&mut buf)?;
    buf.truncate(read);
    Ok(buf)
}

/// Strip the final extension from a file name.
///
/// `Report.pdf` becomes `Report`, `archive.tar.gz` becomes `archive.tar`,
/// and names without a matching extension pass through unchanged.
pub fn display_stem(file_name: &str) -> String {
    EXTENSION_PATTERN.replace(file_name, "").into_owned()
}

// ============================================================================
// Uploaded document handle
// ============================================================================

/// Reference to a successfully staged/uploaded document.
///
/// Holds the display name the backend knows the document by, plus the local
/// path used for the in-terminal preview pane. Nothing here is persisted;
/// the reference lives only as long as the chat that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocumentRef {
    pub file_name: String,
    pub path: PathBuf,
    pub kind: DocumentKind,
}

impl UploadedDocumentRef {
    /// Validate a local file and build a reference to it.
    pub fn stage(path: &Path) -> Result<Self, DocumentError> {
        let kind = detect(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        Ok(Self {
            file_name,
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Chat header title: the file name with its extension stripped.
    pub fn title(&self) -> String {
        display_stem(&self.file_name)
    }

    /// File size, if the file is still readable.
    pub fn size_bytes(&self) -> Option<u64> {
        fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// First lines of the document for the preview pane.
    ///
    /// Only text documents are previewable in-terminal; binary kinds
    /// return `None` and the view falls back to a metadata card.
    pub fn text_preview(&self, max_lines: usize) -> Option<Vec<String>> {
        if self.kind != DocumentKind::Text {
            return None;
        }
        match fs::read(&self.path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                Some(
                    text.lines()
                        .take(max_lines)
                        .map(|l| l.to_string())
                        .collect(),
                )
            }
            Err(e) => {
                log::debug!("Preview read failed for {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
