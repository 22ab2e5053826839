pub use bvh_traverse::Leaves;
pub use bvh_traverse_bvtt::LeafPairs;
pub use bvh_tree::{BoundingVolumeTree, BvhNode};

/// Inline capacity of the stacks used by tree traversals.
///
/// Deeper traversals spill to the heap.
pub const TRAVERSAL_STACK_SIZE: usize = 32;

mod bvh_build;
mod bvh_queries;
mod bvh_refit;
mod bvh_traverse;
mod bvh_traverse_bvtt;
mod bvh_tree;
mod bvh_validation;
