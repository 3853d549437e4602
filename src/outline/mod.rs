pub mod segment;
pub mod title;

use crate::model::DocumentResult;
use crate::source::DocumentSource;

/// Outline pipeline: heading candidates → filtered outline (label-scan
/// fallback for pure forms) → resolved title.
pub fn extract_structure(doc: &impl DocumentSource) -> DocumentResult {
    let mut outline = segment::segment(doc.heading_candidates());
    if outline.is_empty() {
        outline = segment::label_scan(doc.page_text(0));
    }

    let title = title::resolve_title(
        &outline,
        doc.metadata_title(),
        doc.title_candidates(),
        doc.page_text(0),
    );

    DocumentResult {
        title,
        outline,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::source::DumpFile;
    use std::path::Path;

    fn fixture(name: &str) -> DumpFile {
        DumpFile::load(Path::new(&format!("tests/fixtures/{}.json", name))).unwrap()
    }

    #[test]
    fn report_outline() {
        let doc = fixture("report");
        let result = extract_structure(&doc);
        assert_eq!(result.title, "Parsley Cultivation Handbook");
        let texts: Vec<&str> = result.outline.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Overview of Parsley Farming",
                "Introduction to Soil Preparation",
                "GROWTH STAGES",
            ]
        );
        assert_eq!(result.outline[0].level, Level::H1);
        assert_eq!(result.outline[2].level, Level::H2);
        assert!(result.error.is_none());
    }

    #[test]
    fn form_document_uses_label_fallback() {
        let doc = fixture("form");
        let result = extract_structure(&doc);
        let texts: Vec<&str> = result.outline.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Name", "Age", "Address"]);
        assert!(result
            .outline
            .iter()
            .all(|h| h.level == Level::H2 && h.page == 1));
    }

    #[test]
    fn outline_twice_is_byte_identical() {
        let doc = fixture("report");
        let a = serde_json::to_string_pretty(&extract_structure(&doc)).unwrap();
        let b = serde_json::to_string_pretty(&extract_structure(&doc)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_document_still_well_formed() {
        let doc = DumpFile::default();
        let result = extract_structure(&doc);
        assert_eq!(result.title, "Untitled Document");
        assert!(result.outline.is_empty());
    }
}
