use super::ExtractionError;

/// Decode a plain-text document as UTF-8, verbatim
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
