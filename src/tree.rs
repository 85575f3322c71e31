/// A node of a finite, rooted, labeled ordered tree.
///
/// Children order is significant and preserved by every transform in this
/// crate. Labels are guaranteed non-empty; the constructors return `None`
/// instead of producing a malformed node.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Constructs a node, or `None` if `label` is empty.
    pub fn new(label: impl Into<String>, children: Vec<TreeNode>) -> Option<Self> {
        let label = label.into();
        if label.is_empty() {
            None
        } else {
            Some(TreeNode { label, children })
        }
    }

    /// Constructs a node with no children, or `None` if `label` is empty.
    pub fn leaf(label: impl Into<String>) -> Option<Self> {
        Self::new(label, Vec::new())
    }

    /// Invariant: `label` is non-empty, checked by the caller.
    pub(crate) fn from_parts(label: String, children: Vec<TreeNode>) -> Self {
        debug_assert!(!label.is_empty());
        TreeNode { label, children }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in the subtree rooted at this node.
    pub fn node_count(&self) -> usize {
        self.pre_order().count()
    }

    /// Distance from this node to its deepest descendant; `0` for a leaf.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Visits this node before its children, left to right.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Visits children left to right before this node.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder {
            stack: vec![(self, 0)],
        }
    }
}

/// Explicit-stack traversal, so stack use does not grow with tree depth.
#[derive(Debug, Clone)]
pub struct PreOrder<'t> {
    stack: Vec<&'t TreeNode>,
}

impl<'t> Iterator for PreOrder<'t> {
    type Item = &'t TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[derive(Debug, Clone)]
pub struct PostOrder<'t> {
    stack: Vec<(&'t TreeNode, usize)>,
}

impl<'t> Iterator for PostOrder<'t> {
    type Item = &'t TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &mut (node, ref mut next) = self.stack.last_mut()?;
            if let Some(child) = node.children.get(*next) {
                *next += 1;
                self.stack.push((child, 0));
            } else {
                self.stack.pop();
                return Some(node);
            }
        }
    }
}


#[cfg(test)]
pub(crate) use tests::small_tree;
