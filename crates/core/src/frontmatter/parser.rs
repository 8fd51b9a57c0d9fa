//! Frontmatter parsing from markdown documents.

use serde_yaml::Mapping;
use thiserror::Error;

use super::types::{Frontmatter, ParsedDocument};

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// A document without an opening delimiter, or without a closing one, has no
/// frontmatter and parses successfully. A delimited block that is not valid
/// YAML (or not a mapping) is an error; callers scanning a whole vault
/// downgrade it to an empty mapping plus a warning.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let trimmed = content.trim_start();

    if !trimmed.starts_with("---") {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    }

    let after_first = &trimmed[3..];

    // Skip the newline after the opening ---
    let after_newline = after_first
        .strip_prefix('\n')
        .or_else(|| after_first.strip_prefix("\r\n"))
        .unwrap_or(after_first);

    let Some(end_pos) = find_closing_delimiter(after_newline) else {
        // No closing ---, treat as no frontmatter
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    };

    let yaml_content = &after_newline[..end_pos];

    // Body starts after the closing --- and its newline
    let after_closing = &after_newline[end_pos + 3..];
    let body = after_closing
        .strip_prefix('\n')
        .or_else(|| after_closing.strip_prefix("\r\n"))
        .unwrap_or(after_closing)
        .to_string();

    let frontmatter = if yaml_content.trim().is_empty() {
        Frontmatter::default()
    } else {
        let fields: Mapping = serde_yaml::from_str(yaml_content)?;
        Frontmatter { fields }
    };

    Ok(ParsedDocument { frontmatter: Some(frontmatter), body })
}

/// Find the position of the closing `---` delimiter.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    // Look for --- at the start of a line
    for (i, line) in content.lines().enumerate() {
        if line.trim() == "---" {
            let pos: usize = content
                .lines()
                .take(i)
                .map(|l| l.len() + 1) // +1 for newline
                .sum();
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn parse_simple_frontmatter() {
        let content = "---\ntitle: Hello\n---\n# Content";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.get_str("title"), Some("Hello"));
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn parse_preserves_field_order() {
        let content = "---\nzeta: 1\nalpha: 2\nmiddle: 3\n---\nBody";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        let keys: Vec<&str> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "middle"]);
    }

    #[test]
    fn parse_frontmatter_with_list_field() {
        let content = "---\ntitle: Test\ntags:\n  - rust\n  - cli\n---\n\nBody";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        assert!(fm.get("tags").unwrap().as_sequence().is_some());
        assert_eq!(result.body, "\nBody");
    }

    #[test]
    fn parse_empty_frontmatter() {
        let content = "---\n---\n# Content";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.unwrap().is_empty());
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn parse_unterminated_block_is_body() {
        let content = "---\ntitle: Dangling\nno closing delimiter";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn parse_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        assert!(parse(content).is_err());
    }

    #[test]
    fn parse_non_mapping_block_is_an_error() {
        let content = "---\n- just\n- a list\n---\nBody";
        assert!(parse(content).is_err());
    }
}
