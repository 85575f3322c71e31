use crate::TreeNode;

/// Assigns a non-negative cost to each elementary tree edit.
///
/// Costs may depend on the node being touched, e.g. to weigh terminal
/// tokens differently from phrase categories.
pub trait CostModel {
    /// Cost of inserting `node` into the target tree.
    fn insert(&self, node: &TreeNode) -> u64;

    /// Cost of deleting `node` from the source tree.
    fn delete(&self, node: &TreeNode) -> u64;

    /// Cost of mapping `from` onto `to`; must be zero when the labels are
    /// equal for the distance to be a metric.
    fn rename(&self, from: &TreeNode, to: &TreeNode) -> u64;
}

/// The default model: one per insert or delete, one per rename between
/// differing labels, zero otherwise.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UnitCost;

impl CostModel for UnitCost {
    fn insert(&self, _: &TreeNode) -> u64 {
        1
    }

    fn delete(&self, _: &TreeNode) -> u64 {
        1
    }

    fn rename(&self, from: &TreeNode, to: &TreeNode) -> u64 {
        u64::from(from.label() != to.label())
    }
}
