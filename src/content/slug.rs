use unicode_normalization::UnicodeNormalization as _;

/// Combining diacritical marks block stripped after canonical decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Convert a title into a URL path segment.
///
/// Lowercases, decomposes (NFD) and drops combining diacritics, collapses every run of
/// characters outside `[a-z0-9]` into one `-`, and trims leading/trailing hyphens. Total over
/// all strings; the empty string maps to itself.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.to_lowercase().nfd() {
        if COMBINING_MARKS.contains(&c) {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}

/// First pair of titles (by position) that map to the same slug, if any.
pub fn find_collision<'a, I>(titles: I) -> Option<(usize, usize, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashMap::new();
    for (i, title) in titles.into_iter().enumerate() {
        let slug = slugify(title);
        if let Some(&first) = seen.get(&slug) {
            return Some((first, i, slug));
        }
        seen.insert(slug, i);
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/content/slug.rs"]
mod tests;
