use super::keywords::keywords;
use super::PersonaContext;

/// One persona category: any trigger word appearing in the persona text
/// unlocks a term list that earns a per-match bonus. New personas are table
/// rows, not code.
struct DomainBonus {
    triggers: &'static [&'static str],
    terms: &'static [&'static str],
}

const BONUS_PER_TERM: f64 = 0.05;
const MAX_DOMAIN_BONUS: f64 = 0.3;

const DOMAIN_BONUSES: &[DomainBonus] = &[
    // Academic / research
    DomainBonus {
        triggers: &["researcher", "phd", "academic", "student"],
        terms: &[
            "methodology", "analysis", "results", "conclusion", "abstract",
            "literature", "experiment", "data", "findings", "hypothesis",
        ],
    },
    // Business / investment
    DomainBonus {
        triggers: &["analyst", "investment", "business"],
        terms: &[
            "revenue", "profit", "growth", "market", "financial", "strategy",
            "competitive", "performance", "roi", "analysis",
        ],
    },
    // Educational
    DomainBonus {
        triggers: &["student", "learner", "education"],
        terms: &[
            "concept", "principle", "theory", "example", "definition",
            "explanation", "practice", "exercise", "summary",
        ],
    },
];

/// Lexical relevance of one section for the persona/job pair, in [0, 1].
/// Keyword overlap carries the base score (job weighted over persona);
/// domain bonuses reward sections speaking the persona's vocabulary.
pub fn relevance(section_title: &str, content: &str, ctx: &PersonaContext) -> f64 {
    let combined = format!("{} {}", section_title, content).to_lowercase();
    let section_kw = keywords(&combined);

    let persona_overlap = ctx.persona_keywords.intersection(&section_kw).count() as f64;
    let persona_score = persona_overlap / ctx.persona_keywords.len().max(1) as f64;

    let job_overlap = ctx.job_keywords.intersection(&section_kw).count() as f64;
    let job_score = job_overlap / ctx.job_keywords.len().max(1) as f64;

    let base = 0.6 * job_score + 0.4 * persona_score;
    (base + domain_bonus(&combined, &ctx.persona_lower)).min(1.0)
}

fn domain_bonus(text: &str, persona_lower: &str) -> f64 {
    let mut bonus = 0.0;
    for category in DOMAIN_BONUSES {
        if !category.triggers.iter().any(|t| persona_lower.contains(t)) {
            continue;
        }
        let matches = category.terms.iter().filter(|term| text.contains(*term)).count();
        bonus += matches as f64 * BONUS_PER_TERM;
    }
    bonus.min(MAX_DOMAIN_BONUS)
}
