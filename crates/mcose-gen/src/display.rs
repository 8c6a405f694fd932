//! Ascii/UTF-8 pretty-printing of an ordered forest, in the same
//! box-drawing style as `networkx`'s `graph_str`.

use mcose_core::Forest;
use std::fmt::Display;

/// Render `forest` as a multi-line UTF-8 tree diagram, one line per node.
#[must_use]
pub fn forest_str<L: Display>(forest: &Forest<L>) -> String {
    let mut out = String::new();
    let roots = forest.roots();
    let last_root = roots.len().saturating_sub(1);
    for (i, &root) in roots.iter().enumerate() {
        write_node(forest, root, "", i == last_root, true, &mut out);
    }
    out
}

fn write_node<L: Display>(
    forest: &Forest<L>,
    node: u32,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    out: &mut String,
) {
    let connector = match (is_root, is_last) {
        (true, true) => "\u{2559}\u{2500}\u{2500} ",
        (true, false) => "\u{255f}\u{2500}\u{2500} ",
        (false, true) => "\u{2514}\u{2500}\u{2500} ",
        (false, false) => "\u{251c}\u{2500}\u{2500} ",
    };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&forest.label(node).to_string());
    out.push('\n');

    let continuation = match (is_root, is_last) {
        (true, true) => "    ",
        (true, false) => "\u{254e}   ",
        (false, true) => "    ",
        (false, false) => "\u{2502}   ",
    };
    let child_prefix = format!("{prefix}{continuation}");

    let children = forest.children(node);
    let last_child = children.len().saturating_sub(1);
    for (i, &child) in children.iter().enumerate() {
        write_node(forest, child, &child_prefix, i == last_child, false, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_node() {
        let mut f: Forest<&'static str> = Forest::new();
        let r = f.add_root("root");
        f.add_child(r, "a");
        f.add_child(r, "b");

        let text = forest_str(&f);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("root"));
        assert!(text.contains("a"));
        assert!(text.contains("b"));
    }
}
