//! Upload/conversion boundary.
//!
//! The binary `.doc` decoding itself is an external collaborator: a
//! [`DocDecoder`] implementation turns uploaded bytes into the
//! [`Document`] paragraph model, and this module validates the upload,
//! runs the markup serializer, and shapes the downloadable result and
//! the structured error payload a transport layer returns on failure.

use serde::Serialize;
use std::path::Path;

use crate::detect;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{to_markup_with_options, MarkupOptions};

/// The only supported upload extension.
pub const SUPPORTED_EXTENSION: &str = "doc";

/// External decoder for the legacy binary container.
///
/// Implementations wrap whatever `.doc` parsing library is available
/// and report failures as [`Error::Decode`].
pub trait DocDecoder: Send + Sync {
    /// Decode document bytes into the paragraph model.
    fn decode(&self, bytes: &[u8]) -> Result<Document>;
}

/// Options for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Serialization options passed to the markup serializer
    pub markup: MarkupOptions,

    /// Verify the OLE container signature before decoding
    pub check_signature: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set markup serialization options.
    pub fn with_markup_options(mut self, markup: MarkupOptions) -> Self {
        self.markup = markup;
        self
    }

    /// Skip the container signature check.
    pub fn without_signature_check(mut self) -> Self {
        self.check_signature = false;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            markup: MarkupOptions::default(),
            check_signature: true,
        }
    }
}

/// Result of a successful conversion, shaped for a download response.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Serialized markup text
    pub content: String,

    /// MIME type of the content
    pub mime_type: &'static str,

    /// Attachment file name: the original name with `.txt` appended
    pub attachment_name: String,
}

impl ConvertResult {
    /// Content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Structured error payload for a transport layer to return.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Status marker, always `"error"`
    pub status: &'static str,

    /// Human-readable failure message
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            status: "error",
            message: format!("Conversion failed: {}", err),
        }
    }
}

/// Convert one uploaded file.
///
/// Validates the file name and extension, optionally checks the OLE
/// container signature, decodes via the external collaborator, and
/// serializes the paragraph stream to markup. Decode failures surface
/// as [`Error::Decode`] rather than an empty result, so a caller can
/// tell them apart from a genuinely empty document.
pub fn convert_upload(
    file_name: Option<&str>,
    bytes: &[u8],
    decoder: &dyn DocDecoder,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let name = match file_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(Error::MissingFileName),
    };

    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if !extension.eq_ignore_ascii_case(SUPPORTED_EXTENSION) {
        return Err(Error::UnsupportedFormat(extension.to_string()));
    }

    if options.check_signature {
        detect::check_legacy_doc_bytes(bytes)?;
    }

    let document = decoder.decode(bytes)?;
    let content = to_markup_with_options(&document, &options.markup)?;

    Ok(ConvertResult {
        content,
        mime_type: "text/plain; charset=utf-8",
        attachment_name: format!("{}.txt", name),
    })
}
