use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};

use super::ExtractionError;

/// Extract the text of every top-level paragraph, joined by single spaces
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(bytes).map_err(|e| ExtractionError::Docx(format!("{:?}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join(" "))
}

/// Paragraph -> Run -> Text; runs belong to the same line so no separator
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_spaces() {
        let bytes = build_docx(&["The cat sat on the mat.", "The dog ran in the park."]);
        assert_eq!(
            extract(&bytes).unwrap(),
            "The cat sat on the mat. The dog ran in the park."
        );
    }

    #[test]
    fn test_rejects_non_docx() {
        assert!(matches!(extract(b"plain bytes"), Err(ExtractionError::Docx(_))));
    }
}
