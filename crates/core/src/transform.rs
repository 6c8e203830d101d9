use regex::{NoExpand, Regex};

/// The name the provider uses in every joke.
pub const CANONICAL_SUBJECT: &str = "Chuck Norris";

/// Replace every whole-word, case-sensitive occurrence of `canonical_subject`
/// in `raw_text` with `mascot_name`.
///
/// Text without a match is returned unchanged. An empty `canonical_subject`
/// matches nothing.
pub fn apply(raw_text: &str, canonical_subject: &str, mascot_name: &str) -> String {
    if canonical_subject.is_empty() || !raw_text.contains(canonical_subject) {
        return raw_text.to_string();
    }

    let pattern = format!(r"\b{}\b", regex::escape(canonical_subject));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return raw_text.to_string(),
    };

    re.replace_all(raw_text, NoExpand(mascot_name)).into_owned()
}

/// Rewrite provider text for the given mascot.
///
/// Substitutes the title-case, lowercase and uppercase forms of
/// [`CANONICAL_SUBJECT`], each with the matching form of the mascot name.
pub fn transform_joke_text(raw_text: &str, mascot_name: &str) -> String {
    if raw_text.is_empty() {
        return String::new();
    }

    let variants = [
        (CANONICAL_SUBJECT.to_string(), mascot_name.to_string()),
        (CANONICAL_SUBJECT.to_lowercase(), mascot_name.to_lowercase()),
        (CANONICAL_SUBJECT.to_uppercase(), mascot_name.to_uppercase()),
    ];

    variants
        .iter()
        .fold(raw_text.to_string(), |text, (subject, mascot)| {
            apply(&text, subject, mascot)
        })
}
