use crate::color::{Gradient, Rgb};
use crate::math::{Point, Real};
use crate::model::Model;

/// The reference maximum number of lines handed to the renderer.
pub const DEFAULT_MAX_RENDER_LINES: usize = 10_000;

/// Parameters of [`Wireframe::build`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WireframeParameters {
    /// Edge sets larger than this are thinned before being turned into lines.
    pub max_render_lines: usize,
}

impl Default for WireframeParameters {
    fn default() -> Self {
        Self {
            max_render_lines: DEFAULT_MAX_RENDER_LINES,
        }
    }
}

/// Line-list render buffers of a model: two vertices and two colors per line.
///
/// Colors are computed once, when the wireframe is built, so changing the gradient
/// means building a new wireframe.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Wireframe {
    vertices: Vec<Point<Real>>,
    colors: Vec<Rgb>,
}

impl Wireframe {
    /// A wireframe without any line.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the line buffers of `model`, colored with `gradient` over the model's
    /// color domain.
    pub fn build(model: &Model, gradient: &Gradient, params: &WireframeParameters) -> Self {
        let points = model.points();
        let edges = model.edges().thinned(params.max_render_lines);

        if points.is_empty() || edges.is_empty() {
            return Self::empty();
        }

        let vertices: Vec<_> = edges
            .iter()
            .flat_map(|[a, b]| [points[*a as usize], points[*b as usize]])
            .collect();
        let zs: Vec<_> = vertices.iter().map(|pt| pt.z).collect();
        let (min, max) = model.color_domain();
        let colors = gradient.color_of_many(&zs, min, max);

        Self { vertices, colors }
    }

    /// The number of lines.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Does this wireframe contain no line?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The line endpoints: the `i`-th line goes from `vertices[2 * i]` to
    /// `vertices[2 * i + 1]`.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The color of each line endpoint.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The line endpoints as a flat `[x0, y0, z0, x1, y1, z1, ...]` buffer.
    pub fn flat_vertices(&self) -> Vec<Real> {
        self.vertices
            .iter()
            .flat_map(|pt| [pt.x, pt.y, pt.z])
            .collect()
    }

    /// The endpoint colors as a flat `[r0, g0, b0, r1, g1, b1, ...]` buffer.
    pub fn flat_colors(&self) -> Vec<Real> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }
}
