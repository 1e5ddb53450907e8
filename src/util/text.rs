// src/util/text.rs

/// One-line summary of note content for listings.
///
/// Takes the first non-blank line, trims it and cuts it to `max_chars`
/// characters, marking the cut with an ellipsis.
///
/// # Examples
///
/// ```
/// use stickynotes::util::text::summarize;
///
/// assert_eq!(summarize("\n  Buy milk  \nand eggs", 40), "Buy milk");
/// assert_eq!(summarize("abcdef", 4), "abc…");
/// ```
pub fn summarize(content: &str, max_chars: usize) -> String {
    let line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }

    let kept: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Number of lines in the note beyond the summarized one
pub fn extra_line_count(content: &str) -> usize {
    content.trim().lines().count().saturating_sub(1)
}
