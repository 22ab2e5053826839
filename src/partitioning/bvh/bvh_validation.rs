use super::BoundingVolumeTree;
use crate::utils::hashmap::HashMap;

impl BoundingVolumeTree {
    /// Counts the number of leaves that can be reached from the node at index `id`.
    ///
    /// This is mostly a utility for debugging.
    pub fn reachable_leaf_count(&self, id: u32) -> u32 {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut stack = vec![id];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];
            if node.is_leaf() {
                count += 1;
            } else {
                stack.push(node.children);
                stack.push(node.children + 1);
            }
        }

        count
    }

    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (every node is reached exactly
    /// once, every face appears in exactly one leaf, children are stored after their parent)
    /// and geometrically correct (the AABB of a parent bounds the ones of its children).
    pub fn assert_well_formed(&self) {
        if self.is_empty() {
            return;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut faces = HashMap::default();
        let mut stack = vec![0u32];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];

            if core::mem::replace(&mut visited[id as usize], true) {
                panic!("Detected loop. Node {} visited twice.", id);
            }

            if node.is_leaf() {
                if let Some(other) = faces.insert(node.children, id) {
                    panic!(
                        "Face {} is referenced by both leaves {} and {}.",
                        node.children, other, id
                    );
                }
                continue;
            }

            assert!(node.children > id, "Children must be stored after their parent.");
            let left = &self.nodes[node.children as usize];
            let right = &self.nodes[node.children as usize + 1];
            assert!(node.contains(left));
            assert!(node.contains(right));
            assert_eq!(node.leaf_count, left.leaf_count + right.leaf_count);

            stack.push(node.children);
            stack.push(node.children + 1);
        }

        assert!(visited.iter().all(|v| *v), "Unreachable nodes in the arena.");
        assert_eq!(faces.len(), self.leaf_count() as usize);
        assert_eq!(self.nodes.len(), 2 * faces.len() - 1);
    }
}
