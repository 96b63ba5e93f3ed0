//! Word and sentence segmentation shared by the detectors.
//!
//! Segmentation is deliberately simple: words are runs of alphanumerics
//! (apostrophes and inner hyphens kept), sentences end at `.`, `!` or `?`
//! followed by whitespace, or at the end of a line. A terminator inside a
//! token ("2.5", "$1.2M") does not end a sentence. Markdown heading lines are
//! not sentences.

/// Split text into words.
pub fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’' || c == '-'))
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '’' || c == '-'))
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    words(text).len()
}

/// Split prose into sentences, skipping markdown headings and empty fragments.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.extend(
            split_terminated(trimmed)
                .into_iter()
                .map(str::trim)
                .filter(|s| s.chars().any(char::is_alphanumeric)),
        );
    }
    out
}

/// Cut a line after every terminator that is followed by whitespace or ends the line.
fn split_terminated(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = line.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if at_boundary {
            let end = idx + c.len_utf8();
            out.push(&line[start..end]);
            start = end;
        }
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

/// The first `limit` characters, cut on a char boundary.
pub fn prefix(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Strip list bullets, heading markers and emphasis from the start of a line.
pub fn strip_line_markup(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '#' | '-' | '*' | '+' | '•' | '>' | '_')
    })
}

/// The first prose line of the document, with markup removed.
pub fn first_prose_line(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(strip_line_markup)
        .find(|line| !line.is_empty())
}
