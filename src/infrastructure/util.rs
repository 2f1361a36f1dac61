use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid disallowed-char regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HYPHEN_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

const SUFFIX_LEN: usize = 6;

/// Lower-cases, drops everything outside `[a-z0-9]`, whitespace and `-`,
/// turns whitespace runs into single hyphens and collapses hyphen runs.
/// Leading and trailing hyphens are trimmed.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }

    fn collision_suffix(&self) -> String {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(SUFFIX_LEN);
        hex
    }
}
