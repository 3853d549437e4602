use serde::{Deserialize, Serialize};

/// Outline depth. The hierarchy is deliberately flat: structural headings
/// and prose headings land on H1/H2, form labels always on H2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    H1,
    H2,
}

/// One accepted heading. Text is trimmed and unique within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub level: Level,
    pub text: String,
    pub page: u32,
}

/// Per-document outline artifact.
#[derive(Debug, Serialize)]
pub struct DocumentResult {
    pub title: String,
    pub outline: Vec<HeadingRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentResult {
    /// Well-formed stand-in for a document that could not be loaded.
    pub fn load_error(reason: impl Into<String>) -> Self {
        DocumentResult {
            title: "Error".to_string(),
            outline: Vec::new(),
            error: Some(reason.into()),
        }
    }
}

/// Persona configuration, read from `persona_config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonaConfig {
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub job_to_be_done: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisMetadata {
    pub documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub timestamp: String,
}

/// Wire form of a ranked section. `importance_rank` is the 1-based position
/// after sorting the whole collection by relevance, not a per-document rank.
#[derive(Debug, Serialize)]
pub struct ExtractedSection {
    pub document: String,
    pub page: u32,
    pub section_title: String,
    pub importance_rank: usize,
}

/// Refinement record for one top-ranked section. `relevance_score` carries
/// the assigned rank, matching the artifact shape consumers already parse.
#[derive(Debug, Serialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub page: u32,
    pub section_title: String,
    pub refined_text: String,
    pub relevance_score: usize,
}

/// Aggregate artifact of the multi-document analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub metadata: AnalysisMetadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}
