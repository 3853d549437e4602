use crate::model::HeadingRecord;
use crate::source::TitleCandidate;

const FALLBACK_TITLE: &str = "Untitled Document";

/// Lines that never qualify as a title, whatever they score.
const SKIP_PREFIXES: &[&str] = &[
    "page",
    "abstract",
    "introduction",
    "table of contents",
    "www.",
    "http",
];

/// Cover-page and flyer wording that marks a line as title-like.
const PROMOTIONAL_WORDS: &[&str] = &[
    "welcome",
    "invited",
    "join",
    "celebrate",
    "party",
    "event",
    "special",
    "free",
    "exclusive",
    "announcing",
];

const SCAN_LINES: usize = 15;
const POSITION_BONUS_LINES: usize = 5;

/// Fixed-priority cascade: metadata title, then extractor candidates, then a
/// scored scan of page 1, then the first outline entry, then a placeholder.
pub fn resolve_title(
    outline: &[HeadingRecord],
    metadata_title: Option<&str>,
    candidates: &[TitleCandidate],
    first_page: &str,
) -> String {
    if let Some(meta) = metadata_title {
        let trimmed = meta.trim();
        if trimmed.len() > 3 {
            return trimmed.to_string();
        }
    }

    if !candidates.is_empty() {
        return candidates
            .iter()
            .take(2)
            .map(|c| c.text.trim())
            .collect::<Vec<_>>()
            .join("  ");
    }

    if let Some(scanned) = scan_first_page(first_page) {
        return scanned;
    }

    if let Some(first) = outline.first() {
        return first.text.clone();
    }

    FALLBACK_TITLE.to_string()
}

/// Score the first non-trivial lines of page 1: +3 for promotional wording,
/// +2 for an early position, +1 for title-ish length. Only a line that beats
/// the position+length maximum (3) wins, so pages without promotional
/// wording fall through to the next tier.
fn scan_first_page(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| l.len() >= 5 && l.len() <= 200)
        .take(SCAN_LINES)
        .collect();

    let mut best: Option<(u32, &str)> = None;
    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if SKIP_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            continue;
        }

        let mut score = 0;
        if PROMOTIONAL_WORDS.iter().any(|w| lower.contains(w)) {
            score += 3;
        }
        if i < POSITION_BONUS_LINES {
            score += 2;
        }
        if (10..=100).contains(&line.len()) {
            score += 1;
        }

        // Strict comparison keeps the earliest line on ties
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, line));
        }
    }

    best.filter(|(score, _)| *score > 3)
        .map(|(_, line)| line.to_string())
}
