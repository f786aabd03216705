//! Parse-tree walker utilities shared by every language profile.
//!
//! These are the only operations the rest of the analyzer set may assume
//! about the tree representation; everything else is per-language.

use tree_sitter::Node;

/// Walk a subtree iteratively, calling the visitor for each node.
///
/// Pre-order traversal rooted at `root`, confined to the subtree: the
/// walk terminates once the root's descendants are exhausted and never
/// escapes to siblings or ancestors. An explicit stack avoids overflow on
/// deeply nested trees.
pub fn walk<'a, F>(root: Node<'a>, visit: &mut F)
where
    F: FnMut(Node<'a>),
{
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        visit(current);
        // Push children in reverse order so they're processed left-to-right
        let mut cursor = current.walk();
        let children: Vec<_> = current.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
}

/// Truncate a code snippet to `max` bytes, appending an ellipsis marker
/// when truncation occurred. Cuts on a char boundary so the result stays
/// valid UTF-8.
pub fn truncate_snippet(code: &str, max: usize) -> String {
    if code.len() <= max {
        return code.to_string();
    }

    let mut cut = max;
    while cut > 0 && !code.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &code[..cut])
}

/// Find an immediate child node of the given kind.
pub fn find_child_by_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find(|child| child.kind() == kind)
}

/// Find an immediate child whose kind matches any of the given kinds.
pub fn find_child_by_kinds<'a>(node: Node<'a>, kinds: &[&str]) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find(|child| kinds.contains(&child.kind()))
}

/// Extract the UTF-8 source text represented by a node. Returns an empty
/// string if the node points outside the provided source.
pub fn node_text<'a>(node: Node<'a>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}
