//! String helpers shared by the analyzer and the report renderer.

/// Title-case a string: uppercase every letter that starts a word, lowercase
/// the rest. Word boundaries are non-alphabetic characters, so `"usa"`
/// becomes `"Usa"` and `"age range"` becomes `"Age Range"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Humanize a snake_case field key for report display:
/// underscores become spaces, then title case (`"age_range"` → `"Age Range"`).
pub fn humanize_key(key: &str) -> String {
    title_case(&key.replace('_', " "))
}
