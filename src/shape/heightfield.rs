use crate::math::{DMatrix, Real};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// A 2D grid of elevation samples.
///
/// Row `0` is the first row of the source (the first line of a text grid, or the top
/// row of pixels of an image). The underlying matrix has one matrix row per grid row
/// and one matrix column per grid column, so `width == ncols` and `height == nrows`.
pub struct HeightField {
    heights: DMatrix<Real>,
}

impl HeightField {
    /// Initializes a new height field from the given elevation matrix.
    pub fn new(heights: DMatrix<Real>) -> Self {
        HeightField { heights }
    }

    /// Initializes a new height field from a row-major buffer of `width * height` samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len() != width * height`.
    pub fn from_row_major(width: usize, height: usize, samples: &[Real]) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "A height field needs exactly `width * height` samples."
        );
        Self::new(DMatrix::from_row_slice(height, width, samples))
    }

    /// Initializes a height field where every sample has the same elevation.
    pub fn flat(width: usize, height: usize, elevation: Real) -> Self {
        Self::new(DMatrix::repeat(height, width, elevation))
    }

    /// The number of columns of this height field.
    #[inline]
    pub fn width(&self) -> usize {
        self.heights.ncols()
    }

    /// The number of rows of this height field.
    #[inline]
    pub fn height(&self) -> usize {
        self.heights.nrows()
    }

    /// The total number of samples, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Does this height field contain no sample at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// The elevation matrix of this height field.
    #[inline]
    pub fn heights(&self) -> &DMatrix<Real> {
        &self.heights
    }

    /// The elevation at the given row and column.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Real {
        self.heights[(row, col)]
    }

    /// Iterates through all the samples, row after row.
    pub fn iter_row_major(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        let width = self.width();
        (0..self.len()).map(move |k| self.heights[(k / width, k % width)])
    }

    /// The smallest and largest elevations of this height field.
    ///
    /// Returns `None` if the height field is empty.
    pub fn elevation_range(&self) -> Option<(Real, Real)> {
        if self.is_empty() {
            return None;
        }

        Some((self.heights.min(), self.heights.max()))
    }
}
