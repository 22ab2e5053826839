/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. They usually have constant time
/// intersection and inclusion tests. Two bounding volumes must also be mergeable into a bigger
/// bounding volume.
pub trait BoundingVolume {
    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;
}
