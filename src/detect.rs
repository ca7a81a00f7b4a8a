//! Legacy `.doc` container detection.
//!
//! Word 97-2003 documents live in an OLE compound file; the container
//! starts with a fixed 8-byte signature. Detection only inspects that
//! signature, the actual binary decoding is the job of an external
//! parser.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// OLE compound file signature.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Validate that the bytes start with the OLE compound file signature.
///
/// # Returns
/// * `Ok(())` if the data looks like a legacy `.doc` container
/// * `Err(Error::UnknownFormat)` otherwise
pub fn check_legacy_doc_bytes(data: &[u8]) -> Result<()> {
    if data.len() < OLE_MAGIC.len() || !data.starts_with(OLE_MAGIC) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check whether bytes look like a legacy `.doc` container.
pub fn is_legacy_doc_bytes(data: &[u8]) -> bool {
    check_legacy_doc_bytes(data).is_ok()
}

/// Check whether a file on disk looks like a legacy `.doc` container.
pub fn is_legacy_doc<P: AsRef<Path>>(path: P) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 8];
    if reader.read_exact(&mut header).is_err() {
        return false;
    }
    is_legacy_doc_bytes(&header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ole_header() -> Vec<u8> {
        let mut data = OLE_MAGIC.to_vec();
        data.extend_from_slice(&[0u8; 8]);
        data
    }

    #[test]
    fn test_valid_ole_header() {
        assert!(is_legacy_doc_bytes(&ole_header()));
    }

    #[test]
    fn test_invalid_bytes() {
        assert!(!is_legacy_doc_bytes(b"PK\x03\x04 this is a zip"));
        assert!(!is_legacy_doc_bytes(b""));
        assert!(!is_legacy_doc_bytes(&OLE_MAGIC[..4]));
    }

    #[test]
    fn test_check_returns_unknown_format() {
        let result = check_legacy_doc_bytes(b"%PDF-1.7");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_legacy_doc_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&ole_header()).unwrap();
        assert!(is_legacy_doc(file.path()));

        let mut other = tempfile::NamedTempFile::new().unwrap();
        other.write_all(b"plain text").unwrap();
        assert!(!is_legacy_doc(other.path()));
    }
}
