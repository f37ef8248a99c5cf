use relief3d::shape::{decimation_stride, full_edge_count, strided_edge_count, EdgeSet};

#[test]
fn full_topology_connects_direct_neighbors() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let width = rng.rand_range(1..40) as usize;
        let height = rng.rand_range(1..40) as usize;
        let edges = EdgeSet::full(width, height);

        assert_eq!(edges.len(), full_edge_count(width, height));
        assert_eq!(edges.len(), height * (width - 1) + (height - 1) * width);

        for [a, b] in edges.iter() {
            let (a, b) = (*a as usize, *b as usize);
            assert!(a < b && b < width * height);
            assert!(b - a == 1 && a / width == b / width || b - a == width);
        }
    }
}

#[test]
fn decimated_topology_respects_the_edge_budget() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..200 {
        let width = rng.rand_range(1..300) as usize;
        let height = rng.rand_range(1..300) as usize;
        let max_edges = rng.rand_range(1..5000) as usize;

        let stride = decimation_stride(width, height, max_edges);
        let edges = EdgeSet::decimated(width, height, max_edges);

        assert!(stride >= 1);
        assert_eq!(edges.len(), strided_edge_count(width, height, stride));
        assert!(
            edges.len() <= max_edges + width.div_ceil(stride) + height.div_ceil(stride),
            "{}x{} with budget {} and stride {}: {} edges",
            width,
            height,
            max_edges,
            stride,
            edges.len()
        );

        for [a, b] in edges.iter() {
            let (a, b) = (*a as usize, *b as usize);
            assert!(a < width * height && b < width * height);
            let (ra, ca) = (a / width, a % width);
            let (rb, cb) = (b / width, b % width);
            assert!(ra % stride == 0 && ca % stride == 0);
            assert!(ra == rb && cb == ca + 1 || ca == cb && rb == ra + 1);
        }
    }
}

#[test]
fn thinning_keeps_every_nth_edge() {
    let edges = EdgeSet::full(120, 120);
    let thinned = edges.thinned(10_000);
    let step = edges.len() / 10_000 + 1;

    assert_eq!(thinned.len(), edges.len().div_ceil(step));
    assert_eq!(thinned.edges()[1], edges.edges()[step]);
    assert_eq!(edges.thinned(edges.len()), edges);
}
