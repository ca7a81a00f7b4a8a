//! Integration tests for the conversion boundary.

use docflat::convert::{convert_upload, ConvertOptions, DocDecoder, ErrorResponse};
use docflat::error::{Error, Result};
use docflat::{Document, Justification, ParagraphRecord};

/// Decoder returning a canned document, standing in for the external
/// binary parser.
struct MockDecoder {
    document: Document,
}

impl MockDecoder {
    fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocDecoder for MockDecoder {
    fn decode(&self, _bytes: &[u8]) -> Result<Document> {
        Ok(self.document.clone())
    }
}

/// Decoder that always fails, simulating an unreadable container.
struct BrokenDecoder;

impl DocDecoder for BrokenDecoder {
    fn decode(&self, _bytes: &[u8]) -> Result<Document> {
        Err(Error::Decode("stream is truncated".into()))
    }
}

fn ole_bytes() -> Vec<u8> {
    let mut data = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    data.extend_from_slice(&[0u8; 16]);
    data
}

fn regulation_document() -> Document {
    Document::from_paragraphs(vec![
        ParagraphRecord::with_text("第一章 总则").justified(Justification::Center),
        ParagraphRecord::list_item("第一条 为规范管理", 0),
        ParagraphRecord::table_cell("条款"),
        ParagraphRecord::table_row_end("说明"),
    ])
}

#[test]
fn test_full_pipeline() {
    let decoder = MockDecoder::new(regulation_document());
    let result = convert_upload(
        Some("管理办法.doc"),
        &ole_bytes(),
        &decoder,
        &ConvertOptions::new(),
    )
    .unwrap();

    assert_eq!(result.attachment_name, "管理办法.doc.txt");
    assert!(result.content.starts_with(&"+".repeat(50)));
    assert!(result.content.contains(" Pnumber 1 第一条 为规范管理:"));
    assert!(result.content.contains("\nTable:||条款||说明"));
}

#[test]
fn test_empty_document_yields_empty_content() {
    let decoder = MockDecoder::new(Document::new());
    let result = convert_upload(
        Some("empty.doc"),
        &ole_bytes(),
        &decoder,
        &ConvertOptions::new(),
    )
    .unwrap();
    assert_eq!(result.content, "");
}

#[test]
fn test_decode_failure_is_distinct_from_empty() {
    let result = convert_upload(
        Some("broken.doc"),
        &ole_bytes(),
        &BrokenDecoder,
        &ConvertOptions::new(),
    );
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn test_rejects_wrong_extension_before_decoding() {
    let decoder = MockDecoder::new(regulation_document());
    let result = convert_upload(
        Some("notes.txt"),
        &ole_bytes(),
        &decoder,
        &ConvertOptions::new(),
    );
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_rejects_missing_name_before_decoding() {
    let result = convert_upload(None, &ole_bytes(), &BrokenDecoder, &ConvertOptions::new());
    // the broken decoder is never reached
    assert!(matches!(result, Err(Error::MissingFileName)));
}

#[test]
fn test_rejects_non_ole_bytes() {
    let decoder = MockDecoder::new(regulation_document());
    let result = convert_upload(
        Some("fake.doc"),
        b"<html>not a doc</html>",
        &decoder,
        &ConvertOptions::new(),
    );
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_malformed_list_level_aborts_conversion() {
    let decoder = MockDecoder::new(Document::from_paragraphs(vec![
        ParagraphRecord::list_item("too deep", 10),
    ]));
    let result = convert_upload(
        Some("deep.doc"),
        &ole_bytes(),
        &decoder,
        &ConvertOptions::new(),
    );
    assert!(matches!(result, Err(Error::MalformedInput(_))));
}

#[test]
fn test_error_response_serializes() {
    let err = Error::UnsupportedFormat("txt".into());
    let payload = ErrorResponse::from(&err);
    let json = serde_json::to_string(&payload).unwrap();

    assert!(json.contains("\"status\":\"error\""));
    assert!(json.contains("Unsupported file format"));
}
