/// Strategy used to derive the wireframe edges of a `width × height` lattice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyMode {
    /// Every horizontal and vertical neighbor pair.
    Full,
    /// Only the neighbor pairs whose row and column indices are both multiples of
    /// a stride chosen so that roughly `max_edges` edges are emitted.
    Decimated {
        /// The structural edge budget.
        max_edges: usize,
    },
}

impl TopologyMode {
    /// Selects [`TopologyMode::Decimated`] if the full edge set of a `width × height`
    /// lattice (estimated as `width * height * 2`) would exceed `max_edges`, and
    /// [`TopologyMode::Full`] otherwise.
    pub fn select(width: usize, height: usize, max_edges: usize) -> Self {
        if width * height * 2 > max_edges {
            TopologyMode::Decimated { max_edges }
        } else {
            TopologyMode::Full
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// The wireframe connectivity of a point lattice.
///
/// Each edge is a pair of row-major lattice indices of two 4-neighbors. Horizontal
/// edges always come before vertical edges.
pub struct EdgeSet {
    edges: Vec<[u32; 2]>,
}

impl EdgeSet {
    /// Creates an edge set from raw index pairs.
    pub fn new(edges: Vec<[u32; 2]>) -> Self {
        Self { edges }
    }

    /// Derives the edges of a `width × height` lattice with the given strategy.
    pub fn build(width: usize, height: usize, mode: TopologyMode) -> Self {
        match mode {
            TopologyMode::Full => Self::full(width, height),
            TopologyMode::Decimated { max_edges } => Self::decimated(width, height, max_edges),
        }
    }

    /// Every horizontal neighbor pair (row by row), then every vertical neighbor pair
    /// (row by row).
    pub fn full(width: usize, height: usize) -> Self {
        let num_edges = full_edge_count(width, height);
        let mut edges = Vec::with_capacity(num_edges);

        for r in 0..height {
            for c in 0..width.saturating_sub(1) {
                let i = (r * width + c) as u32;
                edges.push([i, i + 1]);
            }
        }

        for r in 0..height.saturating_sub(1) {
            for c in 0..width {
                let i = r * width + c;
                edges.push([i as u32, (i + width) as u32]);
            }
        }

        Self { edges }
    }

    /// The neighbor pairs anchored on rows and columns that are multiples of the
    /// stride returned by [`decimation_stride`].
    ///
    /// Lattice points that are not on the stride grid are left unconnected but are
    /// never removed from the lattice.
    pub fn decimated(width: usize, height: usize, max_edges: usize) -> Self {
        let stride = decimation_stride(width, height, max_edges);
        log::debug!(
            "Decimating the topology of a {}x{} lattice with a stride of {}.",
            width,
            height,
            stride
        );
        Self::strided(width, height, stride)
    }

    /// The neighbor pairs anchored on rows and columns that are multiples of `stride`.
    ///
    /// Horizontal pairs are emitted row by row, vertical pairs column by column.
    pub fn strided(width: usize, height: usize, stride: usize) -> Self {
        let stride = stride.max(1);
        let mut edges = Vec::with_capacity(strided_edge_count(width, height, stride));

        for y in (0..height).step_by(stride) {
            for x in (0..width.saturating_sub(1)).step_by(stride) {
                let i = (y * width + x) as u32;
                edges.push([i, i + 1]);
            }
        }

        for x in (0..width).step_by(stride) {
            for y in (0..height.saturating_sub(1)).step_by(stride) {
                let i = y * width + x;
                edges.push([i as u32, (i + width) as u32]);
            }
        }

        Self { edges }
    }

    /// Keeps every `N`-th edge, with `N = len / max_lines + 1`, if this set contains more
    /// than `max_lines` edges.
    ///
    /// This thins an already-built set for display purpose: edge order is preserved and
    /// indices are not renumbered.
    pub fn thinned(&self, max_lines: usize) -> EdgeSet {
        if self.edges.len() <= max_lines {
            return self.clone();
        }

        let step = self.edges.len() / max_lines.max(1) + 1;
        let edges: Vec<_> = self.edges.iter().copied().step_by(step).collect();
        log::info!(
            "Edges thinned for display: {} -> {} (every {}th edge kept).",
            self.edges.len(),
            edges.len(),
            step
        );

        Self { edges }
    }

    /// The edges as pairs of lattice indices.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// The number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Is this edge set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates through the edges.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u32; 2]> {
        self.edges.iter()
    }
}

/// The number of edges of the full topology of a `width × height` lattice.
pub fn full_edge_count(width: usize, height: usize) -> usize {
    height * width.saturating_sub(1) + height.saturating_sub(1) * width
}

/// The number of edges emitted by [`EdgeSet::strided`].
pub fn strided_edge_count(width: usize, height: usize, stride: usize) -> usize {
    let stride = stride.max(1);
    height.div_ceil(stride) * width.saturating_sub(1).div_ceil(stride)
        + width.div_ceil(stride) * height.saturating_sub(1).div_ceil(stride)
}

/// The row/column stride used by [`EdgeSet::decimated`].
///
/// Starts at `floor(sqrt(width * height * 2 / max_edges))` (at least 1) and grows until
/// the strided edge count exceeds `max_edges` by at most one stride row plus one stride
/// column.
pub fn decimation_stride(width: usize, height: usize, max_edges: usize) -> usize {
    let max_edges = max_edges.max(1);
    let ratio = (width * height * 2) as f64 / max_edges as f64;
    let mut stride = (ratio.sqrt().floor() as usize).max(1);

    while strided_edge_count(width, height, stride)
        > max_edges + width.div_ceil(stride) + height.div_ceil(stride)
    {
        stride += 1;
    }

    stride
}
