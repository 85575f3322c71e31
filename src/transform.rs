use crate::TreeNode;
use derive_more::{Display, Error};

/// Marker label given to internal nodes by [strip_internal_labels].
///
/// Parsers emit ASCII category labels and sentence tokens, so the middle
/// dot cannot collide with a real label, and it is itself a valid token
/// under the bracket codec.
pub const ELIDED_LABEL: &str = "·";

/// Erases grammatical category names so that two trees can be compared by
/// bracket shape and terminal tokens alone.
///
/// Internal labels are replaced with [ELIDED_LABEL]; leaves keep their
/// token. A node whose single child is a leaf collapses into that leaf, so
/// a part-of-speech tag and its token count as one node, not two.
pub fn strip_internal_labels(tree: &TreeNode) -> TreeNode {
    match tree.children() {
        [] => tree.clone(),
        [token] if token.is_leaf() => token.clone(),
        children => TreeNode::from_parts(
            ELIDED_LABEL.to_owned(),
            children.iter().map(strip_internal_labels).collect(),
        ),
    }
}

/// Copies `tree` down to `max_depth`; nodes at exactly `max_depth` keep
/// their label but lose their children. `max_depth` of zero yields a lone
/// root.
pub fn truncate_to_depth(tree: &TreeNode, max_depth: usize) -> TreeNode {
    let children = match max_depth {
        0 => Vec::new(),
        _ => tree
            .children()
            .iter()
            .map(|c| truncate_to_depth(c, max_depth - 1))
            .collect(),
    };

    TreeNode::from_parts(tree.label().to_owned(), children)
}

/// How deep into the constituency trees a comparison should look.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Depth {
    /// Compare whole trees.
    Full,
    /// Truncate both trees to this depth first.
    Limited(usize),
}

impl Depth {
    /// Applies this depth limit to a tree.
    pub fn apply(self, tree: &TreeNode) -> TreeNode {
        match self {
            Depth::Full => tree.clone(),
            Depth::Limited(d) => truncate_to_depth(tree, d),
        }
    }
}

/// A negative depth was requested.
#[derive(Debug, Display, Error, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "invalid depth {}: must be non-negative", requested)]
pub struct InvalidDepthError {
    #[error(not(source))]
    pub requested: i64,
}

impl TryFrom<i64> for Depth {
    type Error = InvalidDepthError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        usize::try_from(requested)
            .map(Depth::Limited)
            .map_err(|_| InvalidDepthError { requested })
    }
}
