use std::panic;

use super::ExtractionError;

/// Extract text content from a PDF held in memory.
///
/// Pages are read in order and concatenated; a page with no extractable
/// text contributes an empty string. When lopdf cannot load the document, or
/// loads it but finds no text on any page, pdf_extract gets a second try.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    match lopdf::Document::load_mem(bytes) {
        Ok(doc) => or_fallback(extract_pages(&doc), || extract_with_pdf_extract(bytes)),
        Err(e) => {
            tracing::warn!("lopdf could not load PDF, trying pdf_extract: {}", e);
            extract_with_pdf_extract(bytes)
        }
    }
}

/// Keep lopdf's text unless it is blank, in which case use the fallback.
/// A failing fallback leaves the blank text for the caller to reject.
fn or_fallback<F>(text: String, fallback: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError>,
{
    if !text.trim().is_empty() {
        return Ok(text);
    }

    tracing::debug!("lopdf found no text, trying pdf_extract");
    match fallback() {
        Ok(recovered) => Ok(recovered),
        Err(e) => {
            tracing::debug!("pdf_extract found nothing either: {}", e);
            Ok(text)
        }
    }
}

fn extract_pages(doc: &lopdf::Document) -> String {
    let pages = doc.get_pages();

    pages
        .keys()
        .map(|&page_num| match doc.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(page = page_num, "no text on page: {}", e);
                String::new()
            }
        })
        .collect()
}

fn extract_with_pdf_extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf_extract can panic on malformed input
    let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Pdf(
            "pdf_extract crashed while reading the document".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    /// Build a PDF with one page per entry; `None` makes a page with no text.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn test_rejects_non_pdf() {
        assert!(matches!(extract(b"%PDF-garbage"), Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn test_pages_in_order() {
        let bytes = build_pdf(&[
            Some("The cat sat on the mat."),
            None,
            Some("The dog ran in the park."),
        ]);

        let text = extract(&bytes).unwrap();
        assert_eq!(
            lines(&text),
            vec!["The cat sat on the mat.", "The dog ran in the park."]
        );
    }

    #[test]
    fn test_textless_pdf_is_blank() {
        let bytes = build_pdf(&[None, None]);

        match extract(&bytes) {
            Ok(text) => assert!(text.trim().is_empty()),
            Err(e) => assert!(matches!(e, ExtractionError::Pdf(_))),
        }
    }

    #[test]
    fn test_blank_text_uses_fallback() {
        let mut called = false;
        let text = or_fallback("  \n".to_string(), || {
            called = true;
            Ok("Recovered text.".to_string())
        })
        .unwrap();

        assert!(called);
        assert_eq!(text, "Recovered text.");
    }

    #[test]
    fn test_fallback_skipped_when_text_found() {
        let text = or_fallback("Page one.".to_string(), || {
            panic!("fallback should not run")
        })
        .unwrap();

        assert_eq!(text, "Page one.");
    }

    #[test]
    fn test_failed_fallback_keeps_blank_text() {
        let text = or_fallback(String::new(), || Err(ExtractionError::Pdf("no text".into())))
            .unwrap();

        assert!(text.is_empty());
    }
}
