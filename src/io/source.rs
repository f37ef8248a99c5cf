use std::path::Path;

use crate::io::LoadError;
use crate::math::Real;
use crate::transformation::ReliefParameters;

/// File extensions (lowercase) read as whitespace-separated integer grids.
pub const TEXT_GRID_EXTENSIONS: [&str; 2] = ["fdf", "txt"];

/// The kind of file a height field was read from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A text file of whitespace-separated integers.
    Text,
    /// A raster image whose inverted luminance is the elevation.
    Raster,
}

impl SourceKind {
    /// Classifies a file from its extension.
    ///
    /// `.fdf` and `.txt` (in any case) are text grids; any extension the `image` crate
    /// associates with a raster format is a raster. Anything else, including a missing
    /// extension, is rejected with [`LoadError::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some(ext) if TEXT_GRID_EXTENSIONS.contains(&ext) => Ok(SourceKind::Text),
            Some(ext) if image::ImageFormat::from_extension(ext).is_some() => {
                Ok(SourceKind::Raster)
            }
            _ => Err(LoadError::UnsupportedFormat { extension }),
        }
    }

    /// Is this a raster source?
    #[inline]
    pub fn is_raster(self) -> bool {
        self == SourceKind::Raster
    }

    /// The relief exaggeration applied to height fields of this kind.
    pub fn relief_factor(self, params: &ReliefParameters) -> Real {
        match self {
            SourceKind::Text => params.text_relief,
            SourceKind::Raster => params.raster_relief,
        }
    }
}
