use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::HeightField;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
/// A flat, row-major sequence of 3D points laid out on a `width × height` grid.
///
/// The point at `(row, col)` is stored at index `row * width + col`. Edge indices
/// (see [`EdgeSet`](crate::shape::EdgeSet)) rely on this layout.
pub struct PointLattice {
    points: Vec<Point<Real>>,
    width: usize,
    height: usize,
}

impl PointLattice {
    /// Creates a lattice from already laid-out points.
    ///
    /// # Panics
    ///
    /// Panics if `points.len() != width * height`.
    pub fn new(points: Vec<Point<Real>>, width: usize, height: usize) -> Self {
        assert_eq!(
            points.len(),
            width * height,
            "A point lattice must contain exactly `width * height` points."
        );
        Self {
            points,
            width,
            height,
        }
    }

    /// Builds the raw (non-normalized) lattice of a height field.
    ///
    /// The cell `(row, col)` becomes the point
    /// `(col - width / 2, -(row - height / 2), elevation)`: the grid is centered on the
    /// origin with a unit spacing, and the first row ends up at the top of the model.
    pub fn from_height_field(field: &HeightField) -> Self {
        let width = field.width();
        let height = field.height();
        let half_width = width as Real / 2.0;
        let half_height = height as Real / 2.0;

        let mut points = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                points.push(Point::new(
                    col as Real - half_width,
                    -(row as Real - half_height),
                    field.get(row, col),
                ));
            }
        }

        Self::new(points, width, height)
    }

    /// The number of columns of the lattice.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows of the lattice.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of points of the lattice.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this lattice contain no point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All the points, in row-major order.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The index of the point at the given row and column.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// The point at the given row and column.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> &Point<Real> {
        &self.points[self.index(row, col)]
    }

    /// The Z coordinate of each point, in lattice order.
    pub fn z_values(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        self.points.iter().map(|pt| pt.z)
    }

    /// The AABB of all the points, or `None` if the lattice is empty.
    pub fn local_aabb(&self) -> Option<Aabb> {
        Aabb::from_points_ref(&self.points)
    }

    /// Mutable access to the points. The lattice dimensions cannot be changed.
    pub(crate) fn points_mut(&mut self) -> &mut [Point<Real>] {
        &mut self.points
    }
}
