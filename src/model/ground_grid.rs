use crate::math::{Point, Real};
use crate::shape::PointLattice;

/// Parameters of [`GroundGrid::build`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundGridParameters {
    /// Lattices with more points than this get no overlay at all.
    pub max_points: usize,
    /// The approximate number of grid cells along each axis.
    pub target_divisions: usize,
    /// How far below the lattice the overlay is drawn.
    pub depth_offset: Real,
}

impl Default for GroundGridParameters {
    fn default() -> Self {
        Self {
            max_points: 10_000,
            target_divisions: 20,
            depth_offset: 0.1,
        }
    }
}

/// A coarse reference grid drawn slightly below a lattice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GroundGrid {
    segments: Vec<[Point<Real>; 2]>,
}

impl GroundGrid {
    /// Builds the overlay of `lattice`.
    ///
    /// The lattice is sampled every `max(1, width / target_divisions)` columns and
    /// every `max(1, height / target_divisions)` rows. From each sample, one segment
    /// goes to the next sampled column and one to the next sampled row (when they
    /// exist). Both endpoints of a segment sit at the Z of the sample minus
    /// `depth_offset`.
    pub fn build(lattice: &PointLattice, params: &GroundGridParameters) -> Self {
        let (width, height) = (lattice.width(), lattice.height());

        if lattice.is_empty() {
            return Self::default();
        }

        if width * height > params.max_points {
            log::warn!(
                "Ground grid disabled: {} points exceed the overlay limit of {}.",
                width * height,
                params.max_points
            );
            return Self::default();
        }

        let divisions = params.target_divisions.max(1);
        let step_x = (width / divisions).max(1);
        let step_y = (height / divisions).max(1);
        let mut segments = Vec::new();

        for row in (0..height).step_by(step_y) {
            for col in (0..width).step_by(step_x) {
                let p1 = lattice.point(row, col);
                let z = p1.z - params.depth_offset;
                let start = Point::new(p1.x, p1.y, z);

                if col + step_x < width {
                    let p2 = lattice.point(row, col + step_x);
                    segments.push([start, Point::new(p2.x, p2.y, z)]);
                }

                if row + step_y < height {
                    let p2 = lattice.point(row + step_y, col);
                    segments.push([start, Point::new(p2.x, p2.y, z)]);
                }
            }
        }

        Self { segments }
    }

    /// The segments of the overlay.
    #[inline]
    pub fn segments(&self) -> &[[Point<Real>; 2]] {
        &self.segments
    }

    /// The number of segments.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.segments.len()
    }

    /// Does this overlay contain no segment?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
