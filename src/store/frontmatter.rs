//! Splitting of `---`-fenced YAML frontmatter from markdown sources.

/// Split a markdown source into `(frontmatter, body)`.
///
/// A source that does not open with a `---` fence line has no frontmatter and
/// is returned whole as the body. Trailing whitespace after either fence is
/// ignored. Returns `None` when the opening fence is never closed.
pub fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let rest = match source.split_inclusive('\n').next() {
        Some(opening) if opening.ends_with('\n') && opening.trim_end() == "---" => {
            &source[opening.len()..]
        }
        _ => return Some(("", source)),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let source = "---\ntitle: A\n---\n# Heading\n\nBody text\n";
        let (fm, body) = split_frontmatter(source).unwrap();
        assert_eq!(fm, "title: A\n");
        assert_eq!(body, "# Heading\n\nBody text\n");
    }

    #[test]
    fn test_split_crlf() {
        let source = "---\r\ntitle: A\r\n---\r\nBody";
        let (fm, body) = split_frontmatter(source).unwrap();
        assert_eq!(fm, "title: A\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_fences_with_trailing_whitespace() {
        let source = "--- \ntitle: A\n---\t\nBody";
        let (fm, body) = split_frontmatter(source).unwrap();
        assert_eq!(fm, "title: A\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let (fm, body) = split_frontmatter("Just text").unwrap();
        assert_eq!(fm, "");
        assert_eq!(body, "Just text");
    }

    #[test]
    fn test_split_empty_body() {
        let (fm, body) = split_frontmatter("---\ntitle: A\n---").unwrap();
        assert_eq!(fm, "title: A\n");
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_strips_bom() {
        let (fm, _) = split_frontmatter("\u{feff}---\ntitle: A\n---\n").unwrap();
        assert_eq!(fm, "title: A\n");
    }

    #[test]
    fn test_horizontal_rule_in_body_is_kept() {
        let source = "---\ntitle: A\n---\nabove\n---\nbelow\n";
        let (_, body) = split_frontmatter(source).unwrap();
        assert_eq!(body, "above\n---\nbelow\n");
    }

    #[test]
    fn test_unterminated_frontmatter() {
        assert!(split_frontmatter("---\ntitle: A\nno closing fence").is_none());
    }
}
