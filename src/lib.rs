//! # Overview
//!
//! This crate measures the structural similarity of two sentences as the
//! [tree edit distance][ted] between their constituency parse trees: the
//! minimum total cost of the node insertions, deletions, and renames that
//! turn one tree into the other, minimized over every one-to-one mapping
//! that preserves ancestor and sibling order. The distance is exact, never
//! an approximation, and is computed by a path-decomposition dynamic
//! program that stays cubic in the combined tree size.
//!
//! Trees travel as the bracketed notation constituency parsers emit,
//! `(label child…)`, and can be compared whole, truncated to a fixed
//! depth, or with grammatical category labels stripped so that only
//! bracket shape and tokens count.
//!
//! [ted]: https://en.wikipedia.org/wiki/Edit_distance
//!
//! # Example
//!
//! ```rust
//! use treedist::*;
//!
//! let a = parse_bracket("(S (NP (DT This)) (VP (VBZ is) (NP (DT a) (NN test))))")?;
//! let b = parse_bracket("(S (NP (DT This)) (VP (VBZ is) (RB only) (NP (DT a) (NN test))))")?;
//!
//! // `(RB only)` parses to two nodes, so two inserts separate the trees.
//! assert_eq!(tree_edit_distance(&a, &b), 2);
//!
//! // Stripped of category labels, the tag and its token count as one.
//! let (a, b) = (strip_internal_labels(&a), strip_internal_labels(&b));
//! assert_eq!(tree_edit_distance(&a, &b), 1);
//!
//! // Near the root the two sentences agree entirely.
//! let (a, b) = (truncate_to_depth(&a, 1), truncate_to_depth(&b, 1));
//! assert_eq!(tree_edit_distance(&a, &b), 0);
//! # Ok::<(), treedist::ParseError>(())
//! ```
//!
//! Sentence-level scoring composes with an external parser through the
//! [ConstituencyParser] trait; see [TedCalculator].

mod bracket;
mod cost;
mod distance;
mod pipeline;
mod transform;
mod tree;

pub use bracket::*;
pub use cost::*;
pub use distance::*;
pub use pipeline::*;
pub use transform::*;
pub use tree::*;

#[cfg(test)]
pub(crate) use tree::small_tree;
