//! Reference-tree rendering.

use std::collections::HashMap;

use super::forest::Forest;
use crate::vault::NoteRecord;

/// Render the whole forest as a markdown outline.
///
/// Roots sit at column 0 as `[[name]]`; a child at depth `d` is indented with
/// `d - 1` tabs and a `- ` bullet. A note whose `title` differs from its stem
/// uses the aliased form `[[name|title]]`, which displays the title while
/// still linking by name.
#[must_use]
pub fn render(forest: &Forest, notes: &[NoteRecord]) -> String {
    let titles = title_index(notes);
    let mut out = String::new();
    for root in forest.roots() {
        render_node(forest, &titles, root, 0, &mut out);
    }
    out
}

/// Render only the subtree under `name`, with `name` at column 0.
#[must_use]
pub fn render_subtree(forest: &Forest, notes: &[NoteRecord], name: &str) -> String {
    let titles = title_index(notes);
    let mut out = String::new();
    render_node(forest, &titles, name, 0, &mut out);
    out
}

fn title_index(notes: &[NoteRecord]) -> HashMap<&str, &str> {
    let mut titles = HashMap::new();
    for note in notes {
        if let Some(title) = note.title.as_deref() {
            // First record wins, consistent with forest construction
            titles.entry(note.name.as_str()).or_insert(title);
        }
    }
    titles
}

fn render_node(
    forest: &Forest,
    titles: &HashMap<&str, &str>,
    name: &str,
    depth: usize,
    out: &mut String,
) {
    if depth > 0 {
        for _ in 0..depth - 1 {
            out.push('\t');
        }
        out.push_str("- ");
    }

    match titles.get(name) {
        Some(title) if *title != name => {
            out.push_str(&format!("[[{name}|{title}]]"));
        }
        _ => {
            out.push_str(&format!("[[{name}]]"));
        }
    }
    out.push('\n');

    for child in forest.children(name) {
        render_node(forest, titles, child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::Frontmatter;
    use std::path::PathBuf;

    fn record(name: &str, parent: Option<&str>, title: Option<&str>) -> NoteRecord {
        NoteRecord {
            name: name.to_string(),
            relative_path: PathBuf::from(format!("{name}.md")),
            title: title.map(ToString::to_string),
            parent: parent.map(ToString::to_string),
            fields: Frontmatter::default(),
        }
    }

    #[test]
    fn renders_flat_children() {
        let notes = vec![
            record("exercise", None, None),
            record("agility", Some("exercise"), None),
            record("cardio", Some("exercise"), None),
        ];
        let (forest, _) = Forest::build(&notes);

        insta::assert_snapshot!(render(&forest, &notes), @r"
        [[exercise]]
        - [[agility]]
        - [[cardio]]
        ");
    }

    #[test]
    fn deeper_levels_indent_with_tabs() {
        let notes = vec![
            record("a", None, None),
            record("b", Some("a"), None),
            record("c", Some("b"), None),
            record("d", Some("c"), None),
        ];
        let (forest, _) = Forest::build(&notes);

        assert_eq!(render(&forest, &notes), "[[a]]\n- [[b]]\n\t- [[c]]\n\t\t- [[d]]\n");
    }

    #[test]
    fn titled_notes_use_aliased_links() {
        let notes = vec![
            record("gtd", None, Some("Getting Things Done")),
            record("inbox", Some("gtd"), None),
        ];
        let (forest, _) = Forest::build(&notes);

        assert_eq!(
            render(&forest, &notes),
            "[[gtd|Getting Things Done]]\n- [[inbox]]\n"
        );
    }

    #[test]
    fn title_equal_to_name_stays_bare() {
        let notes = vec![record("inbox", None, Some("inbox"))];
        let (forest, _) = Forest::build(&notes);

        assert_eq!(render(&forest, &notes), "[[inbox]]\n");
    }

    #[test]
    fn multiple_roots_render_in_order() {
        let notes = vec![
            record("Zebra", None, None),
            record("apple", None, None),
            record("Mango", None, None),
        ];
        let (forest, _) = Forest::build(&notes);

        assert_eq!(render(&forest, &notes), "[[apple]]\n[[Mango]]\n[[Zebra]]\n");
    }

    #[test]
    fn subtree_starts_at_column_zero() {
        let notes = vec![
            record("a", None, None),
            record("b", Some("a"), None),
            record("c", Some("b"), None),
        ];
        let (forest, _) = Forest::build(&notes);

        assert_eq!(render_subtree(&forest, &notes, "b"), "[[b]]\n- [[c]]\n");
    }
}
