//! Height fields and the point lattices and wireframe topologies derived from them.

pub use self::edge_set::{
    decimation_stride, full_edge_count, strided_edge_count, EdgeSet, TopologyMode,
};
pub use self::heightfield::HeightField;
pub use self::lattice::PointLattice;

mod edge_set;
mod heightfield;
mod lattice;
