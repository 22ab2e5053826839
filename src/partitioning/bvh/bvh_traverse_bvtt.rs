use super::{BoundingVolumeTree, BvhNode, TRAVERSAL_STACK_SIZE};
use crate::error::PreconditionError;
use smallvec::SmallVec;

impl BoundingVolumeTree {
    /// Performs a simultaneous traversal of the trees `self` and `other`, and yields the pairs
    /// of leaves it reached.
    ///
    /// Any node pairs failing the given `check` will be excluded from the traversal. When
    /// only one node of a pair is a leaf, the traversal descends into the other one only.
    pub fn leaf_pairs<'a, F: Fn(&BvhNode, &BvhNode) -> bool>(
        &'a self,
        other: &'a Self,
        check: F,
    ) -> LeafPairs<'a, F> {
        let next = match (self.nodes.first(), other.nodes.first()) {
            (Some(root1), Some(root2)) if check(root1, root2) => Some((root1, root2)),
            _ => None,
        };

        LeafPairs {
            tree1: self,
            tree2: other,
            next,
            stack: SmallVec::default(),
            check,
        }
    }

    /// Finds every pair of faces, one from each tree, whose AABBs overlap.
    ///
    /// Each pair `(face of self, face of other)` is reported exactly once. The order of the
    /// pairs is the depth-first order of the traversal.
    pub fn collides_with_tree(&self, other: &Self) -> Result<Vec<(u32, u32)>, PreconditionError> {
        if self.is_empty() || other.is_empty() {
            return Err(PreconditionError::EmptyTree);
        }

        Ok(self.leaf_pairs(other, |a, b| a.intersects(b)).collect())
    }

    /// Calls `f` on every pair of faces, one from each tree, whose AABBs overlap.
    ///
    /// Same as [`Self::collides_with_tree`] without collecting the pairs. Does nothing if either
    /// tree is empty.
    pub fn traverse_bvtt(&self, other: &Self, mut f: impl FnMut(u32, u32)) {
        for (a, b) in self.leaf_pairs(other, |a, b| a.intersects(b)) {
            f(a, b)
        }
    }
}

/// Iterator over the pairs of leaves reached by a simultaneous traversal of two trees.
///
/// Created by [`BoundingVolumeTree::leaf_pairs`].
pub struct LeafPairs<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> {
    tree1: &'a BoundingVolumeTree,
    tree2: &'a BoundingVolumeTree,
    next: Option<(&'a BvhNode, &'a BvhNode)>,
    stack: SmallVec<[(&'a BvhNode, &'a BvhNode); TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> LeafPairs<'a, Check> {
    #[inline]
    fn children(tree: &'a BoundingVolumeTree, node: &BvhNode) -> [&'a BvhNode; 2] {
        [
            &tree.nodes[node.children as usize],
            &tree.nodes[node.children as usize + 1],
        ]
    }

    #[inline]
    fn schedule(&mut self, node1: &'a BvhNode, node2: &'a BvhNode) {
        if (self.check)(node1, node2) {
            if self.next.is_none() {
                self.next = Some((node1, node2));
            } else {
                self.stack.push((node1, node2));
            }
        }
    }
}

impl<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> Iterator for LeafPairs<'a, Check> {
    type Item = (u32, u32);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.next.is_none() {
                self.next = self.stack.pop();
            }

            let (node1, node2) = self.next.take()?;

            match (node1.is_leaf(), node2.is_leaf()) {
                (true, true) => return Some((node1.children, node2.children)),
                (true, false) => {
                    for child2 in Self::children(self.tree2, node2) {
                        self.schedule(node1, child2);
                    }
                }
                (false, true) => {
                    for child1 in Self::children(self.tree1, node1) {
                        self.schedule(child1, node2);
                    }
                }
                (false, false) => {
                    for child1 in Self::children(self.tree1, node1) {
                        for child2 in Self::children(self.tree2, node2) {
                            self.schedule(child1, child2);
                        }
                    }
                }
            }
        }
    }
}
