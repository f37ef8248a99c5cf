use crate::color::{GradientPreset, Rgb};
use crate::math::Real;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Indicates an invalid gradient definition.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GradientError {
    /// A gradient must contain at least one stop.
    #[error("a gradient must contain at least one stop")]
    Empty,
    /// Explicit positions were given, but not one per color.
    #[error("{colors} colors were given with {positions} positions")]
    PositionCountMismatch {
        /// The number of colors.
        colors: usize,
        /// The number of positions.
        positions: usize,
    },
    /// The stop at this index has a smaller position than the previous one.
    #[error("the position of the stop {index} is smaller than the position of the previous stop")]
    UnorderedPositions {
        /// The index of the offending stop.
        index: usize,
    },
    /// The stop at this index has a position outside of `[0, 1]`.
    #[error("the position of the stop {index} is not in [0, 1]")]
    PositionOutOfRange {
        /// The index of the offending stop.
        index: usize,
    },
}

/// A color pinned at a position of the normalized `[0, 1]` elevation range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// The position of this stop, in `[0, 1]`.
    pub position: Real,
    /// The color at this position.
    pub color: Rgb,
}

impl GradientStop {
    /// Creates a new gradient stop.
    #[inline]
    pub const fn new(position: Real, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// A piecewise-linear map from normalized elevations to colors.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use relief3d::color::{Gradient, Rgb};
///
/// let gradient = Gradient::from_colors(vec![Rgb::BLACK, Rgb::WHITE], None).unwrap();
/// assert_eq!(gradient.color_of_one(5.0, 0.0, 10.0), Rgb::new(0.5, 0.5, 0.5));
/// // Flat domains always map to the first color.
/// assert_eq!(gradient.color_of_one(5.0, 3.0, 3.0), Rgb::BLACK);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::preset(GradientPreset::Default)
    }
}

impl Gradient {
    /// Creates a gradient from explicit stops.
    ///
    /// Positions must be in `[0, 1]` and non-decreasing.
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::Empty);
        }

        for (index, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(GradientError::PositionOutOfRange { index });
            }

            if index > 0 && stop.position < stops[index - 1].position {
                return Err(GradientError::UnorderedPositions { index });
            }
        }

        Ok(Self { stops })
    }

    /// Creates a gradient from colors and optional positions.
    ///
    /// Without positions, the `n` colors are spread evenly: the `i`-th color is placed
    /// at `i / (n - 1)` (a single color is placed at `0`).
    pub fn from_colors(
        colors: Vec<Rgb>,
        positions: Option<Vec<Real>>,
    ) -> Result<Self, GradientError> {
        let positions = match positions {
            Some(positions) => {
                if positions.len() != colors.len() {
                    return Err(GradientError::PositionCountMismatch {
                        colors: colors.len(),
                        positions: positions.len(),
                    });
                }
                positions
            }
            None => evenly_spaced_positions(colors.len()),
        };

        Self::new(
            positions
                .into_iter()
                .zip(colors)
                .map(|(position, color)| GradientStop::new(position, color))
                .collect(),
        )
    }

    /// One of the built-in gradients.
    pub fn preset(preset: GradientPreset) -> Self {
        let colors = preset.colors();
        let positions = evenly_spaced_positions(colors.len());
        Self {
            stops: positions
                .into_iter()
                .zip(colors)
                .map(|(position, color)| GradientStop::new(position, color))
                .collect(),
        }
    }

    /// The stops of this gradient, by increasing position.
    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The color of the first stop.
    #[inline]
    pub fn first_color(&self) -> Rgb {
        self.stops[0].color
    }

    /// The color of the last stop.
    #[inline]
    pub fn last_color(&self) -> Rgb {
        self.stops[self.stops.len() - 1].color
    }

    /// The color at the normalized position `t`.
    ///
    /// Stop pairs are searched in order and the first pair with
    /// `pos[i] <= t <= pos[i + 1]` is interpolated, so a `t` on a shared boundary
    /// resolves to the earlier interval. A `t` below the first stop maps to the first
    /// color; any other `t` covered by no interval (above the last stop, or NaN) maps to
    /// the last color.
    pub fn sample(&self, t: Real) -> Rgb {
        if t < self.stops[0].position {
            return self.first_color();
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);

            if a.position <= t && t <= b.position {
                let width = b.position - a.position;
                let frac = if width > 0.0 {
                    (t - a.position) / width
                } else {
                    0.0
                };
                return a.color.lerp(&b.color, frac);
            }
        }

        self.last_color()
    }

    /// The color of the elevation `z` given the elevation domain
    /// `[domain_min, domain_max]`.
    ///
    /// A degenerate domain (`domain_min == domain_max`) maps every elevation to the
    /// first color.
    pub fn color_of_one(&self, z: Real, domain_min: Real, domain_max: Real) -> Rgb {
        if domain_min == domain_max {
            return self.first_color();
        }

        self.sample((z - domain_min) / (domain_max - domain_min))
    }

    /// The colors of several elevations, see [`Gradient::color_of_one`].
    pub fn color_of_many(&self, zs: &[Real], domain_min: Real, domain_max: Real) -> Vec<Rgb> {
        #[cfg(feature = "parallel")]
        let zs = zs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let zs = zs.iter();

        zs.map(|z| self.color_of_one(*z, domain_min, domain_max))
            .collect()
    }
}

fn evenly_spaced_positions(n: usize) -> Vec<Real> {
    if n == 1 {
        return vec![0.0];
    }

    (0..n).map(|i| i as Real / (n - 1) as Real).collect()
}
