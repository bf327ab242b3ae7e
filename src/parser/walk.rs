//! Depth-tracking pre-order walk over XML elements.

use roxmltree::Node;

/// Iterator over `root` and all of its descendant elements in document
/// order, paired with their depth. `root` itself is yielded at depth 1.
///
/// Uses an explicit stack instead of recursion, so deeply nested dumps
/// cannot overflow the call stack.
pub struct DepthWalk<'a, 'input: 'a> {
    stack: Vec<(Node<'a, 'input>, usize)>,
}

impl<'a, 'input: 'a> Iterator for DepthWalk<'a, 'input> {
    type Item = (Node<'a, 'input>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;

        // Reverse so the first child is popped next
        let children: Vec<_> = node.children().filter(Node::is_element).collect();
        self.stack
            .extend(children.into_iter().rev().map(|child| (child, depth + 1)));

        Some((node, depth))
    }
}

/// Walk every element under (and including) `root`
pub fn depth_walk<'a, 'input: 'a>(root: Node<'a, 'input>) -> DepthWalk<'a, 'input> {
    DepthWalk {
        stack: vec![(root, 1)],
    }
}

/// Walk only elements with the given tag name; other elements still count
/// toward the depth of their descendants
pub fn depth_walk_tagged<'a, 'input: 'a>(
    root: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = (Node<'a, 'input>, usize)> + 'a {
    depth_walk(root).filter(move |(node, _)| node.has_tag_name(tag))
}
