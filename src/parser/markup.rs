//! Tolerant markup handling.
//!
//! The editor produces HTML fragments, but nothing here assumes well-formed
//! input: plain text, unterminated tags and arbitrary bytes all pass through
//! without error. Worst case for a broken tag is dropped characters.

/// Level-1/2/3 heading start markers found in the raw markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

impl HeadingCounts {
    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3
    }
}

/// Strip tags and collapse whitespace runs to single spaces.
///
/// Idempotent on already-plain text (modulo whitespace collapsing). A tag
/// boundary becomes a space so adjacent block elements don't glue words
/// together.
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count `<h1`/`<h2`/`<h3` start markers, case-insensitively.
pub fn count_headings(markup: &str) -> HeadingCounts {
    let lower = markup.to_lowercase();
    HeadingCounts {
        h1: lower.matches("<h1").count(),
        h2: lower.matches("<h2").count(),
        h3: lower.matches("<h3").count(),
    }
}

/// True when the markup contains an ordered or unordered list start marker
pub fn has_list_markup(markup: &str) -> bool {
    let lower = markup.to_lowercase();
    lower.contains("<ul") || lower.contains("<ol")
}

/// True when the markup contains a bold/strong start marker
pub fn has_emphasis_markup(markup: &str) -> bool {
    let lower = markup.to_lowercase();
    lower.contains("<strong") || lower.contains("<b>") || lower.contains("<b ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_tags() {
        assert_eq!(strip_markup("<p>Olá <strong>mundo</strong></p>"), "Olá mundo");
    }

    #[test]
    fn test_strip_separates_block_elements() {
        assert_eq!(strip_markup("<p>um</p><p>dois</p>"), "um dois");
    }

    #[test]
    fn test_strip_is_idempotent_on_plain_text() {
        let plain = "texto simples sem marcação";
        assert_eq!(strip_markup(plain), plain);
        assert_eq!(strip_markup(&strip_markup(plain)), plain);
    }

    #[test]
    fn test_strip_collapses_whitespace() {
        assert_eq!(strip_markup("um   dois\n\ttrês"), "um dois três");
    }

    #[test]
    fn test_strip_unterminated_tag_drops_tail() {
        // Never panics; the open tag swallows the rest of the input
        assert_eq!(strip_markup("antes <h2 class=x"), "antes");
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn test_strip_keeps_stray_gt() {
        assert_eq!(strip_markup("2 > 1"), "2 > 1");
    }

    #[test]
    fn test_count_headings_mixed_case() {
        let counts = count_headings("<H1>a</H1><h2>b</h2><h2 id=\"x\">c</h2><h3>d</h3>");
        assert_eq!(counts, HeadingCounts { h1: 1, h2: 2, h3: 1 });
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_count_headings_none() {
        assert_eq!(count_headings("<p>sem títulos</p>"), HeadingCounts::default());
    }

    #[test]
    fn test_list_and_emphasis_markers() {
        assert!(has_list_markup("<ul><li>a</li></ul>"));
        assert!(has_list_markup("<OL><li>a</li></OL>"));
        assert!(!has_list_markup("<p>li</p>"));
        assert!(has_emphasis_markup("<strong>x</strong>"));
        assert!(has_emphasis_markup("<b>x</b>"));
        assert!(!has_emphasis_markup("<br><body>"));
    }
}
