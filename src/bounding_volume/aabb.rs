//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Used to measure the extents of a point lattice along each axis before it gets
/// rescaled into the canonical display volume.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use relief3d::bounding_volume::Aabb;
/// use relief3d::math::Point;
///
/// let aabb = Aabb::from_points([
///     Point::new(-1.0, 0.0, 2.0),
///     Point::new(1.0, 4.0, 5.0),
/// ])
/// .unwrap();
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
/// assert_eq!(aabb.extents().y, 4.0);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Computes the AABB enclosing all the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut it = pts.into_iter();
        let p0 = it.next()?;
        let mut result = Aabb::new(p0, p0);

        for pt in it {
            result.take_point(pt);
        }

        Some(result)
    }

    /// Computes the AABB enclosing all the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points_ref<'a, I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// The extents (`maxs - mins`) of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The largest extent of this AABB over all axes.
    #[inline]
    pub fn max_extent(&self) -> Real {
        self.extents().max()
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }
}
