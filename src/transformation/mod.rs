//! Transformations of point lattices.

pub use self::normalization::{
    normalize, normalize_lattice, NormalizationState, ReliefParameters, CANONICAL_EXTENT,
    RASTER_RELIEF_FACTOR, TEXT_RELIEF_FACTOR,
};

mod normalization;
