//! Spatial partitioning tools.

pub use self::bvh::{BoundingVolumeTree, BvhNode, LeafPairs, Leaves, TRAVERSAL_STACK_SIZE};

mod bvh;
