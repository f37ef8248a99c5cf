//! Reading height fields from text grids and raster images.

pub use self::error::{LoadError, ParseError};
pub use self::loader::{load, LoadedField, LoaderParameters, DEFAULT_RASTER_POINT_BUDGET};
pub use self::raster::{
    load_raster, luma_601, luminance, raster_height_field, resampled_dimensions, MAX_LUMINANCE,
};
pub use self::source::{SourceKind, TEXT_GRID_EXTENSIONS};
pub use self::text_grid::{load_text_grid, parse_text_grid};

mod error;
mod loader;
mod raster;
mod source;
mod text_grid;
