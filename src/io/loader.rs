use std::path::Path;

use crate::io::{load_raster, load_text_grid, LoadError, SourceKind};
use crate::shape::HeightField;

/// The reference number of samples a raster is downsampled to.
pub const DEFAULT_RASTER_POINT_BUDGET: usize = 5000;

/// Parameters of [`load`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoaderParameters {
    /// Rasters with more pixels than this are downsampled to fit.
    pub raster_point_budget: usize,
}

impl Default for LoaderParameters {
    fn default() -> Self {
        Self {
            raster_point_budget: DEFAULT_RASTER_POINT_BUDGET,
        }
    }
}

/// A height field together with the kind of file it was read from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedField {
    /// The elevation samples.
    pub field: HeightField,
    /// The kind of file the samples were read from.
    pub kind: SourceKind,
}

impl LoadedField {
    /// Was this height field read from a raster image?
    #[inline]
    pub fn is_raster(&self) -> bool {
        self.kind.is_raster()
    }
}

/// Reads a height field from a text grid or a raster image.
///
/// The parser is selected from the file extension (see [`SourceKind::from_path`]).
pub fn load(path: impl AsRef<Path>, params: &LoaderParameters) -> Result<LoadedField, LoadError> {
    let path = path.as_ref();
    let kind = SourceKind::from_path(path)?;

    let field = match kind {
        SourceKind::Text => load_text_grid(path)?,
        SourceKind::Raster => load_raster(path, params.raster_point_budget)?,
    };

    if let Some((min_z, max_z)) = field.elevation_range() {
        log::info!(
            "Loaded {:?} height field {}: {}x{} ({} points), elevations {:.1} to {:.1}.",
            kind,
            path.display(),
            field.width(),
            field.height(),
            field.len(),
            min_z,
            max_z
        );
    }

    Ok(LoadedField { field, kind })
}
