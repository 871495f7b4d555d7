/// Count non-overlapping occurrences of `keyword` in an already-lowercased line.
pub fn count_keyword_hits(lowered: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    lowered.matches(keyword).count()
}

/// Case-insensitive check for any keyword anywhere in `text`.
pub fn contains_any_keyword<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|kw| {
        let kw = kw.as_ref().to_lowercase();
        !kw.is_empty() && lowered.contains(&kw)
    })
}
