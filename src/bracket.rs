use crate::TreeNode;
use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt;

/// What went wrong while parsing a bracketed tree string.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// A group was opened but never closed.
    #[display(fmt = "unbalanced parentheses")]
    UnexpectedEnd,
    /// A `)` with no matching `(`.
    #[display(fmt = "unexpected closing parenthesis")]
    UnexpectedClose,
    /// A group with no label, such as `()` or `( )`.
    #[display(fmt = "empty label")]
    EmptyLabel,
    /// Input continues after the root group closed.
    #[display(fmt = "trailing input after the root")]
    TrailingInput,
}

/// Malformed bracketed text, along with the byte offset of the offense.
#[derive(Debug, Display, Error, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{} at byte {}", kind, position)]
pub struct ParseError {
    #[error(not(source))]
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    fn new(kind: ParseErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }
}

fn is_atom_char(c: char) -> bool {
    c != '(' && c != ')' && !c.is_whitespace()
}

/// Parses the bracketed notation `(label child…)` into a [TreeNode].
///
/// A leaf may be written either as a bare token or as `(label)`; whitespace
/// between tokens is insignificant. The parser keeps its own stack, so
/// arbitrarily deep input cannot overflow the call stack.
///
/// ```
/// use treedist::parse_bracket;
///
/// let tree = parse_bracket("(NP (DT a) (NN test))")?;
/// assert_eq!(tree.label(), "NP");
/// assert_eq!(tree.children().len(), 2);
/// # Ok::<(), treedist::ParseError>(())
/// ```
pub fn parse_bracket(text: &str) -> Result<TreeNode, ParseError> {
    use ParseErrorKind::*;

    let mut stack: Vec<(String, Vec<TreeNode>)> = Vec::new();
    let mut root: Option<TreeNode> = None;
    let mut rest = text.char_indices().peekable();

    while let Some(&(at, c)) = rest.peek() {
        if c.is_whitespace() {
            rest.next();
            continue;
        }

        if root.is_some() {
            return Err(ParseError::new(TrailingInput, at));
        }

        let node = match c {
            '(' => {
                rest.next();
                while rest.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
                let mut label = String::new();
                while let Some((_, c)) = rest.next_if(|&(_, c)| is_atom_char(c)) {
                    label.push(c);
                }
                if label.is_empty() {
                    return Err(ParseError::new(EmptyLabel, at));
                }
                stack.push((label, Vec::new()));
                continue;
            }
            ')' => {
                rest.next();
                match stack.pop() {
                    Some((label, children)) => TreeNode::from_parts(label, children),
                    None => return Err(ParseError::new(UnexpectedClose, at)),
                }
            }
            _ => {
                let mut label = String::new();
                while let Some((_, c)) = rest.next_if(|&(_, c)| is_atom_char(c)) {
                    label.push(c);
                }
                TreeNode::from_parts(label, Vec::new())
            }
        };

        match stack.last_mut() {
            Some((_, siblings)) => siblings.push(node),
            None => root = Some(node),
        }
    }

    if !stack.is_empty() {
        return Err(ParseError::new(UnexpectedEnd, text.len()));
    }

    root.ok_or_else(|| ParseError::new(UnexpectedEnd, text.len()))
}

/// Serializes a [TreeNode] to its canonical bracketed form, the
/// deterministic inverse of [parse_bracket].
///
/// Internal nodes render as `(label child…)`; a leaf renders as its bare
/// label.
pub fn to_bracket(tree: &TreeNode) -> String {
    if tree.is_leaf() {
        tree.label().to_owned()
    } else {
        format!(
            "({} {})",
            tree.label(),
            tree.children().iter().map(to_bracket).join(" ")
        )
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_bracket(self))
    }
}
