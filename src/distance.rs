use crate::{parse_bracket, CostModel, ParseError, TreeNode, UnitCost};
use derive_more::{Display, Error, From};
use tracing::debug;

/// Post-order decomposition of a tree, precomputed once per input.
///
/// `lld[i]` is the post-order index of the leftmost leaf descendant of node
/// `i`; a node shares it with every node on its leftmost path. The
/// `keyroots` are the nodes where a fresh decomposition path starts, i.e.
/// the highest node of each distinct leftmost path, in ascending post-order
/// so inner subtree distances are always available before they are needed.
struct Decomposition<'t> {
    nodes: Vec<&'t TreeNode>,
    lld: Vec<usize>,
    keyroots: Vec<usize>,
}

impl<'t> Decomposition<'t> {
    fn index(root: &'t TreeNode) -> Self {
        let mut nodes = Vec::new();
        let mut lld = Vec::new();

        // Post-order with an explicit stack; each frame carries the lld of
        // its first child once that child has been emitted.
        let mut stack: Vec<(&TreeNode, usize, Option<usize>)> = vec![(root, 0, None)];
        while let Some(&mut (node, ref mut next, leftmost)) = stack.last_mut() {
            if let Some(child) = node.children().get(*next) {
                *next += 1;
                stack.push((child, 0, None));
            } else {
                stack.pop();
                let left = leftmost.unwrap_or(nodes.len());
                nodes.push(node);
                lld.push(left);
                if let Some((_, _, first)) = stack.last_mut() {
                    first.get_or_insert(left);
                }
            }
        }

        let mut keyroots = Vec::new();
        let mut claimed = vec![false; nodes.len()];
        for i in (0..nodes.len()).rev() {
            if !claimed[lld[i]] {
                claimed[lld[i]] = true;
                keyroots.push(i);
            }
        }
        keyroots.reverse();

        Decomposition {
            nodes,
            lld,
            keyroots,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Fills in `dist[i][j]`, the subtree distance rooted at `i`/`j`, for every
/// pair of nodes on the decomposition paths starting at keyroots `i` and
/// `j`, by growing one forest-distance table left to right along both
/// paths. Distances for subtrees hanging off the paths were computed by
/// earlier keyroot pairs and are reused, never recomputed.
fn forest_distance<C: CostModel>(
    a: &Decomposition,
    b: &Decomposition,
    i: usize,
    j: usize,
    costs: &C,
    dist: &mut [Vec<u64>],
) {
    let (li, lj) = (a.lld[i], b.lld[j]);
    let rows = i - li + 2;
    let cols = j - lj + 2;

    let mut fd = vec![vec![0; cols]; rows];
    for x in 1..rows {
        fd[x][0] = fd[x - 1][0] + costs.delete(a.nodes[li + x - 1]);
    }
    for y in 1..cols {
        fd[0][y] = fd[0][y - 1] + costs.insert(b.nodes[lj + y - 1]);
    }

    for x in 1..rows {
        for y in 1..cols {
            let (na, nb) = (li + x - 1, lj + y - 1);
            let delete = fd[x - 1][y] + costs.delete(a.nodes[na]);
            let insert = fd[x][y - 1] + costs.insert(b.nodes[nb]);

            fd[x][y] = if a.lld[na] == li && b.lld[nb] == lj {
                // Both prefixes are whole subtrees, so this entry doubles
                // as their subtree distance.
                let rename = fd[x - 1][y - 1] + costs.rename(a.nodes[na], b.nodes[nb]);
                let best = delete.min(insert).min(rename);
                dist[na][nb] = best;
                best
            } else {
                let detach = fd[a.lld[na] - li][b.lld[nb] - lj] + dist[na][nb];
                delete.min(insert).min(detach)
            };
        }
    }
}

/// Exact minimum cost of transforming `a` into `b` by inserting, deleting,
/// and renaming nodes, under `costs`.
///
/// The minimum ranges over every one-to-one node mapping that preserves
/// ancestor and sibling order. Runs in time cubic in the combined tree
/// size at worst, with memory bounded by the product of the two sizes; the
/// call owns all of its tables, so independent comparisons can run in
/// parallel freely.
pub fn tree_edit_distance_with<C: CostModel>(a: &TreeNode, b: &TreeNode, costs: &C) -> u64 {
    let da = Decomposition::index(a);
    let db = Decomposition::index(b);

    let mut dist = vec![vec![0; db.len()]; da.len()];
    for &i in &da.keyroots {
        for &j in &db.keyroots {
            forest_distance(&da, &db, i, j, costs, &mut dist);
        }
    }

    let distance = dist[da.len() - 1][db.len() - 1];
    debug!(size_a = da.len(), size_b = db.len(), distance, "computed tree edit distance");
    distance
}

/// [tree_edit_distance_with] under the default [UnitCost] model.
pub fn tree_edit_distance(a: &TreeNode, b: &TreeNode) -> u64 {
    tree_edit_distance_with(a, b, &UnitCost)
}

/// Why a distance between two bracketed strings could not be computed.
#[derive(Debug, Display, Error, From, Clone, Eq, PartialEq)]
pub enum DistanceError {
    /// An input holds no tree at all.
    #[display(fmt = "input holds no tree")]
    EmptyTree,
    /// An input is not a well-formed bracketed string.
    #[display(fmt = "{}", _0)]
    Parse(ParseError),
}

/// Parses two bracketed strings and returns their edit distance under the
/// default cost model. Blank input is rejected up front as
/// [DistanceError::EmptyTree] rather than as a parse failure.
pub fn bracket_distance(a: &str, b: &str) -> Result<u64, DistanceError> {
    if a.trim().is_empty() || b.trim().is_empty() {
        return Err(DistanceError::EmptyTree);
    }

    Ok(tree_edit_distance(&parse_bracket(a)?, &parse_bracket(b)?))
}
