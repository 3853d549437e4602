use std::sync::LazyLock;

use regex::Regex;

// End-boundary shapes: "3. Results", ALL CAPS, Title Case Words
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.?\s+[A-Z]").unwrap());
static ALL_CAPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]+$").unwrap());
static TITLE_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*$").unwrap());

/// Shape check for a section's end boundary.
pub fn looks_like_heading(line: &str) -> bool {
    line.len() > 3
        && (NUMBERED_RE.is_match(line)
            || ALL_CAPS_RE.is_match(line)
            || TITLE_CASE_RE.is_match(line))
}

/// Text between the section's heading line and the next heading-like line on
/// the same page (or page end). Empty when the title never appears on the
/// page.
pub fn expand(page_text: &str, section_title: &str) -> String {
    let lines: Vec<&str> = page_text.lines().collect();
    let needle = section_title.to_lowercase();

    let start = match lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle))
    {
        Some(i) => i,
        None => return String::new(),
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| looks_like_heading(line.trim()))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    lines[start + 1..end].join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_shapes() {
        assert!(looks_like_heading("3. Results"));
        assert!(looks_like_heading("12 Findings"));
        assert!(looks_like_heading("GROWTH STAGES"));
        assert!(looks_like_heading("Soil Preparation"));
        assert!(!looks_like_heading("plain body text here"));
        assert!(!looks_like_heading("Mixed CASE line with, punctuation"));
        // Short lines never count as boundaries
        assert!(!looks_like_heading("ABC"));
    }

    #[test]
    fn content_runs_to_next_heading() {
        let page = "Methodology\nwe sampled twelve plots\nover two seasons\nResults Overview\nmore text\n";
        let content = expand(page, "Methodology");
        assert_eq!(content, "we sampled twelve plots\nover two seasons");
    }

    #[test]
    fn content_runs_to_page_end() {
        let page = "Methodology\nfirst line\nsecond line";
        assert_eq!(expand(page, "Methodology"), "first line\nsecond line");
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let page = "2.1 METHODOLOGY AND SCOPE\ndetails follow here\n";
        assert_eq!(expand(page, "Methodology"), "details follow here");
    }

    #[test]
    fn missing_title_yields_empty_content() {
        assert_eq!(expand("nothing relevant on this page", "Methodology"), "");
    }

    #[test]
    fn heading_line_itself_excluded() {
        let page = "Introduction\nbody\n";
        let content = expand(page, "Introduction");
        assert!(!content.contains("Introduction"));
        assert_eq!(content, "body");
    }
}
