use crate::math::Real;
use crate::shape::PointLattice;

/// The relief exaggeration of text grids.
pub const TEXT_RELIEF_FACTOR: Real = 0.5;
/// The relief exaggeration of raster images.
pub const RASTER_RELIEF_FACTOR: Real = 1.0;
/// The size of the largest axis of a lattice after normalization.
pub const CANONICAL_EXTENT: Real = 2.0;

/// Per-source relief exaggeration used by [`normalize`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReliefParameters {
    /// Height of the normalized relief of text grids.
    pub text_relief: Real,
    /// Height of the normalized relief of raster images.
    pub raster_relief: Real,
}

impl Default for ReliefParameters {
    fn default() -> Self {
        Self {
            text_relief: TEXT_RELIEF_FACTOR,
            raster_relief: RASTER_RELIEF_FACTOR,
        }
    }
}

/// The elevation ranges of a lattice before and after normalization.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct NormalizationState {
    /// The smallest raw elevation.
    pub min_z: Real,
    /// The largest raw elevation.
    pub max_z: Real,
    /// The smallest Z after the uniform rescaling, before relief exaggeration.
    pub norm_min_z: Real,
    /// The largest Z after the uniform rescaling, before relief exaggeration.
    pub norm_max_z: Real,
}

impl NormalizationState {
    /// The `(min, max)` domain used to map Z values to gradient colors.
    ///
    /// This domain does not depend on the relief exaggeration of the displayed Z.
    #[inline]
    pub fn color_domain(&self) -> (Real, Real) {
        (self.norm_min_z, self.norm_max_z)
    }

    /// Are all the raw elevations equal?
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.min_z == self.max_z
    }
}

/// Rescales a raw lattice into the canonical display volume.
///
/// 1. All three coordinates are multiplied by `2 / max(x_extent, y_extent, z_extent)`
///    (or `1` if the lattice is a single point).
/// 2. The Z extremes after this uniform rescaling become the color domain
///    (`norm_min_z`, `norm_max_z`).
/// 3. The displayed Z of each point is then replaced by
///    `(raw_z - min_z) * relief_factor / (max_z - min_z)`, computed from the raw input
///    elevations.
///
/// If `max_z == min_z` the field is flat: the uniformly rescaled Z is kept and the
/// color domain degenerates to `(min_z, min_z)`.
pub fn normalize(
    lattice: &PointLattice,
    min_z: Real,
    max_z: Real,
    relief_factor: Real,
) -> (PointLattice, NormalizationState) {
    let mut state = NormalizationState {
        min_z,
        max_z,
        norm_min_z: min_z,
        norm_max_z: max_z,
    };

    let Some(aabb) = lattice.local_aabb() else {
        return (lattice.clone(), state);
    };

    let max_extent = aabb.max_extent();
    let scale = if max_extent > 0.0 {
        CANONICAL_EXTENT / max_extent
    } else {
        1.0
    };

    let mut result = lattice.clone();
    for pt in result.points_mut() {
        pt.coords *= scale;
    }

    if max_z > min_z {
        let z_scale = relief_factor / (max_z - min_z);
        log::debug!(
            "Normalization scale: {}, relief factor: {}, relief scale: {}.",
            scale,
            relief_factor,
            z_scale
        );

        let (norm_min_z, norm_max_z) = z_range(&result);
        state.norm_min_z = norm_min_z;
        state.norm_max_z = norm_max_z;

        for (pt, raw) in result.points_mut().iter_mut().zip(lattice.points()) {
            pt.z = (raw.z - min_z) * z_scale;
        }
    } else {
        log::debug!("Normalization scale: {}, flat height field.", scale);
    }

    (result, state)
}

/// Normalizes a lattice using its own Z range as the raw elevation range.
pub fn normalize_lattice(
    lattice: &PointLattice,
    relief_factor: Real,
) -> (PointLattice, NormalizationState) {
    let (min_z, max_z) = z_range(lattice);
    normalize(lattice, min_z, max_z, relief_factor)
}

fn z_range(lattice: &PointLattice) -> (Real, Real) {
    lattice
        .local_aabb()
        .map(|aabb| (aabb.mins.z, aabb.maxs.z))
        .unwrap_or((0.0, 0.0))
}
