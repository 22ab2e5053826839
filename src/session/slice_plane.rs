use crate::error::PreconditionError;
use crate::math::{Point, Real, Vector, DIM};

/// The three anatomical orientations of a slice plane.
///
/// Each orientation is orthogonal to one coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Orthogonal to the `x` axis.
    Sagittal = 0,
    /// Orthogonal to the `y` axis.
    Coronal = 1,
    /// Orthogonal to the `z` axis.
    Axial = 2,
}

impl Orientation {
    /// All the orientations, in axis order.
    pub const ALL: [Orientation; 3] = [
        Orientation::Sagittal,
        Orientation::Coronal,
        Orientation::Axial,
    ];

    /// The index of the axis orthogonal to planes with this orientation.
    #[inline]
    pub fn axis(self) -> usize {
        self as usize
    }

    /// The orientation of planes orthogonal to the `axis`-th coordinate axis.
    pub fn from_axis(axis: usize) -> Result<Self, PreconditionError> {
        if axis < DIM {
            Ok(Self::ALL[axis])
        } else {
            Err(PreconditionError::InvalidAxis(axis))
        }
    }
}

/// An axis-aligned cutting plane that can only slide along its own axis.
///
/// The plane slides along the line parallel to its axis through its origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SlicePlane {
    orientation: Orientation,
    position: Real,
    origin: Point<Real>,
    moved: bool,
}

impl SlicePlane {
    /// Creates a plane with the given orientation, `position` units along its axis.
    ///
    /// A new plane counts as moved, so the first refresh computes its contours. Its track
    /// goes through the world origin.
    pub fn new(orientation: Orientation, position: Real) -> Self {
        Self {
            orientation,
            position,
            origin: Point::origin(),
            moved: true,
        }
    }

    /// Makes this plane slide along the line through `origin`.
    ///
    /// Only the coordinates of `origin` on the other two axes matter.
    pub fn with_origin(mut self, origin: Point<Real>) -> Self {
        self.origin = origin;
        self
    }

    /// The point the track of this plane goes through.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The orientation of this plane.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The index of the axis this plane is orthogonal to.
    #[inline]
    pub fn axis(&self) -> usize {
        self.orientation.axis()
    }

    /// The location of this plane along its axis.
    #[inline]
    pub fn position(&self) -> Real {
        self.position
    }

    /// The unit normal of this plane.
    pub fn normal(&self) -> Vector<Real> {
        Vector::ith(self.axis(), 1.0)
    }

    /// The point where the track of this plane crosses it.
    pub fn center(&self) -> Point<Real> {
        let mut center = self.origin;
        center[self.axis()] = self.position;
        center
    }

    /// Has this plane moved since the last call to [`Self::clear_moved`]?
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Resets the moved flag.
    #[inline]
    pub fn clear_moved(&mut self) {
        self.moved = false;
    }

    /// Moves this plane along its axis.
    ///
    /// Returns `true` if the position actually changed.
    pub fn set_position(&mut self, position: Real) -> bool {
        if position != self.position {
            self.position = position;
            self.moved = true;
            true
        } else {
            false
        }
    }

    /// Projects `location` onto the track this plane slides along.
    ///
    /// Only the coordinate along the plane's axis is kept; the others are taken from the
    /// origin.
    pub fn constrain(&self, location: &Point<Real>) -> Point<Real> {
        let axis = self.axis();
        let mut constrained = self.origin;
        constrained[axis] = location[axis];
        constrained
    }

    /// Moves this plane to the constrained projection of `location`.
    ///
    /// Returns `true` if the position actually changed.
    pub fn move_to(&mut self, location: &Point<Real>) -> bool {
        let constrained = self.constrain(location);
        self.set_position(constrained[self.axis()])
    }
}
