use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One line the external extractor judged heading-like by font/position.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandidate {
    pub text: String,
    pub page: u32,
}

/// Title candidate ranked by the extractor's font-size/position heuristics.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleCandidate {
    pub text: String,
    #[serde(default)]
    pub score: f64,
}

/// What the core consumes from the external document extractor. The binary
/// parser itself (PDF or otherwise) stays outside this crate; anything that
/// can hand over pages, heading candidates and title metadata can feed the
/// pipelines.
pub trait DocumentSource {
    fn page_count(&self) -> usize;

    /// Text of one page, 0-based. Out-of-range indices yield empty text.
    fn page_text(&self, page: usize) -> &str;

    fn all_text(&self) -> String;

    fn heading_candidates(&self) -> &[RawCandidate];

    /// Declared title from document metadata, if the extractor found one.
    fn metadata_title(&self) -> Option<&str>;

    fn title_candidates(&self) -> &[TitleCandidate];
}

/// Extraction dump for one document, as serialized by the external
/// extractor: page texts in order, heading candidates in emission order,
/// and optional title metadata.
#[derive(Debug, Default, Deserialize)]
pub struct DumpFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub headings: Vec<RawCandidate>,
    #[serde(default)]
    pub title_candidates: Vec<TitleCandidate>,
}

impl DumpFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read extraction dump {:?}", path))?;
        let dump: DumpFile = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed extraction dump {:?}", path))?;
        Ok(dump)
    }
}

impl DocumentSource for DumpFile {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> &str {
        self.pages.get(page).map(String::as_str).unwrap_or("")
    }

    fn all_text(&self) -> String {
        self.pages.join("\n")
    }

    fn heading_candidates(&self) -> &[RawCandidate] {
        &self.headings
    }

    fn metadata_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn title_candidates(&self) -> &[TitleCandidate] {
        &self.title_candidates
    }
}
