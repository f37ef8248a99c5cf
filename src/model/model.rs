use std::path::Path;

use crate::color::{Gradient, Rgb};
use crate::io::{LoadError, LoadedField, SourceKind};
use crate::math::{Point, Real};
use crate::model::BuildParameters;
use crate::shape::{EdgeSet, HeightField, PointLattice, TopologyMode};
use crate::transformation::{normalize, NormalizationState};

/// Everything derived from one height field file.
///
/// A model is immutable once built: loading another file produces another model,
/// so a lattice can never be observed together with the edges or normalization of a
/// different file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    field: HeightField,
    kind: SourceKind,
    lattice: PointLattice,
    edges: EdgeSet,
    normalization: NormalizationState,
}

impl Model {
    /// Loads the file at `path` and builds its model.
    pub fn load(path: impl AsRef<Path>, params: &BuildParameters) -> Result<Self, LoadError> {
        let loaded = crate::io::load(path, &params.loader)?;
        Ok(Self::from_loaded(loaded, params))
    }

    /// Builds the model of an already loaded height field.
    pub fn from_loaded(loaded: LoadedField, params: &BuildParameters) -> Self {
        Self::from_height_field(loaded.field, loaded.kind, params)
    }

    /// Builds the model of a height field.
    ///
    /// Text grids always get the full topology. Rasters get a decimated topology when
    /// the full one would exceed `params.topology.max_structural_edges`.
    pub fn from_height_field(
        field: HeightField,
        kind: SourceKind,
        params: &BuildParameters,
    ) -> Self {
        let (width, height) = (field.width(), field.height());
        let (min_z, max_z) = field.elevation_range().unwrap_or((0.0, 0.0));
        let raw = PointLattice::from_height_field(&field);

        let mode = match kind {
            SourceKind::Text => TopologyMode::Full,
            SourceKind::Raster => {
                TopologyMode::select(width, height, params.topology.max_structural_edges)
            }
        };
        let edges = EdgeSet::build(width, height, mode);
        log::info!("Created {} edges ({:?} topology).", edges.len(), mode);

        let (lattice, normalization) =
            normalize(&raw, min_z, max_z, kind.relief_factor(&params.relief));

        Self {
            field,
            kind,
            lattice,
            edges,
            normalization,
        }
    }

    /// The raw height field.
    #[inline]
    pub fn height_field(&self) -> &HeightField {
        &self.field
    }

    /// The kind of file this model was built from.
    #[inline]
    pub fn source_kind(&self) -> SourceKind {
        self.kind
    }

    /// Was this model built from a raster image?
    #[inline]
    pub fn is_raster(&self) -> bool {
        self.kind.is_raster()
    }

    /// The number of lattice columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.lattice.width()
    }

    /// The number of lattice rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.lattice.height()
    }

    /// The normalized lattice.
    #[inline]
    pub fn lattice(&self) -> &PointLattice {
        &self.lattice
    }

    /// The normalized points, in row-major order.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        self.lattice.points()
    }

    /// The wireframe edges.
    #[inline]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// The raw and normalized elevation ranges.
    #[inline]
    pub fn normalization(&self) -> &NormalizationState {
        &self.normalization
    }

    /// The `(min, max)` domain to be used for color lookups of this model's points.
    #[inline]
    pub fn color_domain(&self) -> (Real, Real) {
        self.normalization.color_domain()
    }

    /// The color of each lattice point.
    pub fn vertex_colors(&self, gradient: &Gradient) -> Vec<Rgb> {
        let zs: Vec<_> = self.lattice.z_values().collect();
        let (min, max) = self.color_domain();
        gradient.color_of_many(&zs, min, max)
    }
}
