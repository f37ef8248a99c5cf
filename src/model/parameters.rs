use crate::io::LoaderParameters;
use crate::model::{GroundGridParameters, WireframeParameters};
use crate::transformation::ReliefParameters;

/// The reference structural edge budget of raster topologies.
pub const DEFAULT_MAX_STRUCTURAL_EDGES: usize = 20_000;

/// Parameters of the wireframe topology.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TopologyParameters {
    /// Raster lattices whose full topology would exceed this number of edges get a
    /// decimated topology instead.
    pub max_structural_edges: usize,
}

impl Default for TopologyParameters {
    fn default() -> Self {
        Self {
            max_structural_edges: DEFAULT_MAX_STRUCTURAL_EDGES,
        }
    }
}

/// All the tunable constants involved in turning a file into renderable buffers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct BuildParameters {
    /// File loading.
    pub loader: LoaderParameters,
    /// Edge topology.
    pub topology: TopologyParameters,
    /// Relief exaggeration.
    pub relief: ReliefParameters,
    /// Wireframe render buffers.
    pub wireframe: WireframeParameters,
    /// Ground grid overlay.
    pub ground_grid: GroundGridParameters,
}
