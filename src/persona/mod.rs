pub mod content;
pub mod keywords;
pub mod score;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::model::{
    AnalysisMetadata, AnalysisResult, ExtractedSection, PersonaConfig, SubsectionAnalysis,
};
use crate::outline::segment;
use crate::source::{DocumentSource, DumpFile};

const RELEVANCE_THRESHOLD: f64 = 0.1;
const TOP_SECTIONS: usize = 10;

/// Immutable scoring context for one analysis run. Built once from the
/// persona config and threaded through every scoring call; nothing mutates
/// it after construction.
pub struct PersonaContext {
    pub persona: String,
    pub job_to_be_done: String,
    pub persona_lower: String,
    pub persona_keywords: HashSet<String>,
    pub job_keywords: HashSet<String>,
}

impl PersonaContext {
    pub fn new(config: &PersonaConfig) -> Self {
        PersonaContext {
            persona: config.persona.clone(),
            job_to_be_done: config.job_to_be_done.clone(),
            persona_lower: config.persona.to_lowercase(),
            persona_keywords: keywords::keywords(&config.persona),
            job_keywords: keywords::keywords(&config.job_to_be_done),
        }
    }
}

/// A section span plus its collection-wide relevance. `raw_score` stays
/// internal; only the ordinal `rank` is serialized.
#[derive(Debug, Clone)]
pub struct RankedSection {
    pub document: String,
    pub page: u32,
    pub section_title: String,
    pub content: String,
    pub raw_score: f64,
    pub rank: usize,
}

/// Relevance pipeline: load each dump sequentially (failures are logged and
/// skipped), expand its sections, score them against the persona context,
/// rank across the whole collection, and refine the top sections.
pub fn analyze_documents(paths: &[PathBuf], config: &PersonaConfig) -> AnalysisResult {
    let ctx = PersonaContext::new(config);
    let mut sections: Vec<RankedSection> = Vec::new();

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("=> "),
    );

    for path in paths {
        let name = file_name(path);
        match DumpFile::load(path) {
            Ok(doc) => sections.extend(collect_sections(&doc, &name, &ctx)),
            Err(e) => warn!("Skipping {}: {:#}", name, e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let ranked = rank(sections);

    let extracted_sections = ranked
        .iter()
        .map(|s| ExtractedSection {
            document: s.document.clone(),
            page: s.page,
            section_title: s.section_title.clone(),
            importance_rank: s.rank,
        })
        .collect();

    let subsection_analysis = ranked
        .iter()
        .take(TOP_SECTIONS)
        .map(|s| SubsectionAnalysis {
            document: s.document.clone(),
            page: s.page,
            section_title: s.section_title.clone(),
            refined_text: refine(s, &ctx),
            relevance_score: s.rank,
        })
        .collect();

    AnalysisResult {
        metadata: AnalysisMetadata {
            documents: paths.iter().map(|p| file_name(p)).collect(),
            persona: ctx.persona.clone(),
            job_to_be_done: ctx.job_to_be_done.clone(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        },
        extracted_sections,
        subsection_analysis,
    }
}

/// One document's scored section spans, in candidate order.
fn collect_sections(
    doc: &impl DocumentSource,
    filename: &str,
    ctx: &PersonaContext,
) -> Vec<RankedSection> {
    segment::filter_candidates(doc.heading_candidates())
        .into_iter()
        .map(|(title, page)| {
            let page_idx = (page as usize).saturating_sub(1);
            let body = content::expand(doc.page_text(page_idx), &title);
            let raw_score = score::relevance(&title, &body, ctx);
            RankedSection {
                document: filename.to_string(),
                page,
                section_title: title,
                content: body,
                raw_score,
                rank: 0,
            }
        })
        .collect()
}

/// Keep sections above the relevance threshold, order by score descending
/// (stable, so ties keep encounter order), and assign 1-based ranks.
fn rank(mut sections: Vec<RankedSection>) -> Vec<RankedSection> {
    sections.retain(|s| s.raw_score > RELEVANCE_THRESHOLD);
    sections.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(Ordering::Equal)
    });
    for (i, section) in sections.iter_mut().enumerate() {
        section.rank = i + 1;
    }
    sections
}

/// Templated refinement sentence. Not a summary; callers must not mistake
/// this for generated text.
fn refine(section: &RankedSection, ctx: &PersonaContext) -> String {
    format!(
        "Key insights from {} relevant to {} for {}",
        section.section_title, ctx.persona, ctx.job_to_be_done
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
