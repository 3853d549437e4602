use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{HeadingRecord, Level};
use crate::source::RawCandidate;

// Date-like noise: one or two digits, a space, 3+ uppercase letters ("12 JAN")
static DATE_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\s+[A-Z]{3,}").unwrap());

const NOISE_PREFIXES: &[&str] = &["page", "figure", "table", "ref", "www.", "http"];

/// Phrases that mark a line as a structural heading regardless of shape.
const STRUCTURAL_PHRASES: &[&str] = &[
    "revision history",
    "table of contents",
    "acknowledgements",
    "introduction",
    "overview",
    "syllabus",
];

/// Phrases that promote a heading to the top level.
const TOP_LEVEL_PHRASES: &[&str] = &["overview of", "introduction to", "references"];

const MAX_LABEL_WORDS: usize = 8;

/// A named reject rule. Rules run in order; the first hit rejects the
/// candidate and names why, which keeps each heuristic testable on its own.
struct RejectRule {
    name: &'static str,
    rejects: fn(&str) -> bool,
}

const REJECT_RULES: &[RejectRule] = &[
    RejectRule {
        name: "too_short",
        rejects: |t| t.len() < 3,
    },
    RejectRule {
        name: "too_long",
        rejects: |t| t.len() > 150,
    },
    RejectRule {
        name: "noise_prefix",
        rejects: |t| {
            let lower = t.to_lowercase();
            NOISE_PREFIXES.iter().any(|p| lower.starts_with(p))
        },
    },
    RejectRule {
        name: "date_like",
        rejects: |t| DATE_NOISE_RE.is_match(t),
    },
];

/// Hygiene pass shared by both pipelines: trim, drop duplicates (first
/// occurrence wins), and run the reject rules. Candidate order is preserved.
pub fn filter_candidates(candidates: &[RawCandidate]) -> Vec<(String, u32)> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::new();

    for cand in candidates {
        let text = cand.text.trim();
        if !seen.insert(text) {
            continue;
        }
        if reject(text).is_some() {
            continue;
        }
        kept.push((text.to_string(), cand.page));
    }

    kept
}

/// Filter raw heading candidates into an ordered outline: hygiene pass, then
/// the importance gate, then level assignment.
pub fn segment(candidates: &[RawCandidate]) -> Vec<HeadingRecord> {
    filter_candidates(candidates)
        .into_iter()
        .filter(|(text, _)| importance(text) > 0)
        .map(|(text, page)| HeadingRecord {
            level: level_of(&text),
            text,
            page,
        })
        .collect()
}

/// First reject rule the text trips, if any.
fn reject(text: &str) -> Option<&'static str> {
    REJECT_RULES
        .iter()
        .find(|rule| (rule.rejects)(text))
        .map(|rule| rule.name)
}

/// 2 = known structural phrase, 1 = form label or shouted line, 0 = body text.
fn importance(text: &str) -> u8 {
    let lower = text.to_lowercase();
    if STRUCTURAL_PHRASES.iter().any(|p| lower.contains(p)) {
        return 2;
    }
    if is_form_label(text) || is_shouted(text) {
        return 1;
    }
    0
}

/// "Label:" style line with at most 8 words.
fn is_form_label(text: &str) -> bool {
    text.ends_with(':') && text.split_whitespace().count() <= MAX_LABEL_WORDS
}

/// Fully uppercase line of plausible heading length.
fn is_shouted(text: &str) -> bool {
    text.len() > 5
        && text.len() < 60
        && text.chars().any(|c| c.is_alphabetic())
        && !text.chars().any(|c| c.is_lowercase())
}

fn level_of(text: &str) -> Level {
    let lower = text.to_lowercase();
    if TOP_LEVEL_PHRASES.iter().any(|p| lower.contains(p)) {
        Level::H1
    } else {
        Level::H2
    }
}

/// Fallback for documents where nothing survives filtering (pure forms):
/// every "Label:" line on page 1 becomes an H2 heading, colon stripped.
pub fn label_scan(first_page: &str) -> Vec<HeadingRecord> {
    first_page
        .lines()
        .map(str::trim)
        .filter(|line| is_form_label(line))
        .filter_map(|line| {
            let label = line.trim_end_matches(':').trim();
            if label.is_empty() {
                return None;
            }
            Some(HeadingRecord {
                level: Level::H2,
                text: label.to_string(),
                page: 1,
            })
        })
        .collect()
}
