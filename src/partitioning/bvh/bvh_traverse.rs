use super::{BoundingVolumeTree, BvhNode, TRAVERSAL_STACK_SIZE};
use smallvec::SmallVec;

/// Iterator over the leaves of a [`BoundingVolumeTree`] whose ancestors all pass a check.
///
/// Created by [`BoundingVolumeTree::leaves`].
pub struct Leaves<'a, Check: Fn(&BvhNode) -> bool> {
    tree: &'a BoundingVolumeTree,
    next: Option<&'a BvhNode>,
    stack: SmallVec<[&'a BvhNode; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode) -> bool> Leaves<'a, Check> {
    /// Starts a traversal of `tree` from its root.
    pub fn new(tree: &'a BoundingVolumeTree, check: Check) -> Leaves<'a, Check> {
        let next = tree.nodes.first().filter(|root| check(*root));

        Leaves {
            tree,
            next,
            stack: SmallVec::default(),
            check,
        }
    }
}

impl<'a, Check: Fn(&BvhNode) -> bool> Iterator for Leaves<'a, Check> {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.next.is_none() {
                self.next = self.stack.pop();
            }

            let node = self.next.take()?;

            if node.is_leaf() {
                return Some(node.children);
            }

            let left = &self.tree.nodes[node.children as usize];
            let right = &self.tree.nodes[node.children as usize + 1];

            if (self.check)(left) {
                self.next = Some(left);
            }

            if (self.check)(right) {
                if self.next.is_none() {
                    self.next = Some(right);
                } else {
                    self.stack.push(right);
                }
            }
        }
    }
}

impl BoundingVolumeTree {
    /// Iterates through the leaves, in depth-first order.
    ///
    /// The `check_node` closure is called on every traversed node. If it returns `false` then the
    /// node and all its descendants won’t be iterated on. This is useful for pruning whole
    /// sub-trees based on a geometric predicate on the node’s AABB.
    pub fn leaves<F: Fn(&BvhNode) -> bool>(&self, check_node: F) -> Leaves<'_, F> {
        Leaves::new(self, check_node)
    }
}
