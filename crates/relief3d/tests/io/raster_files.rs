use std::fs;

use relief3d::image::{GrayAlphaImage, GrayImage, Luma, LumaA, Rgba, RgbaImage};
use relief3d::io::{load, LoadError, LoaderParameters, SourceKind};
use relief3d::model::{BuildParameters, Model};
use relief3d::shape::{decimation_stride, TopologyMode};

/// An uncompressed 8-bit paletted BMP of a single row. `palette` holds RGB colors.
fn paletted_bmp_row(palette: &[[u8; 3]], indices: &[u8]) -> Vec<u8> {
    let row_len = indices.len().div_ceil(4) * 4;
    let pixels_offset = 14 + 40 + 4 * palette.len();
    let file_len = pixels_offset + row_len;

    let mut bytes = Vec::with_capacity(file_len);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&(file_len as u32).to_le_bytes());
    bytes.extend_from_slice(&[0; 4]);
    bytes.extend_from_slice(&(pixels_offset as u32).to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(indices.len() as i32).to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&8u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    bytes.extend_from_slice(&(row_len as u32).to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&(palette.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    for [r, g, b] in palette {
        bytes.extend_from_slice(&[*b, *g, *r, 0]);
    }

    bytes.extend_from_slice(indices);
    bytes.resize(file_len, 0);
    bytes
}

fn gradient_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]))
}

#[test]
fn dark_pixels_are_high() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.png");
    GrayImage::from_raw(3, 1, vec![0, 55, 255])
        .unwrap()
        .save(&path)
        .unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert_eq!(loaded.kind, SourceKind::Raster);
    assert_eq!(loaded.field.iter_row_major().collect::<Vec<_>>(), [255.0, 200.0, 0.0]);
}

#[test]
fn uniform_gray_image_is_flat() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    GrayImage::from_pixel(12, 8, Luma([100])).save(&path).unwrap();

    let model = Model::load(&path, &BuildParameters::default()).unwrap();
    let state = model.normalization();

    assert!(model.is_raster());
    assert!(state.is_flat());
    assert_eq!(state.norm_min_z, state.norm_max_z);

    let z0 = model.points()[0].z;
    assert!(model.points().iter().all(|pt| pt.z == z0));
}

#[test]
fn large_image_is_resampled_under_budget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large.png");
    gradient_image(200, 150).save(&path).unwrap();

    let params = LoaderParameters::default();
    let loaded = load(&path, &params).unwrap();
    let field = loaded.field;

    assert_eq!((field.width(), field.height()), (81, 61));
    assert!(field.len() <= params.raster_point_budget);
    assert!(field.len() < 200 * 150);
}

#[test]
fn small_image_is_not_resampled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    gradient_image(50, 40).save(&path).unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert_eq!((loaded.field.width(), loaded.field.height()), (50, 40));
    assert_eq!(loaded.field.get(3, 4), 255.0 - 7.0);
}

#[test]
fn transparent_pixels_read_as_white() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    let img = RgbaImage::from_raw(
        3,
        1,
        vec![0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255],
    )
    .unwrap();
    img.save(&path).unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert_eq!(loaded.field.iter_row_major().collect::<Vec<_>>(), [0.0, 255.0, 0.0]);
}

#[test]
fn half_transparent_black_is_mid_gray() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("half.png");
    RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]))
        .save(&path)
        .unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    let z = loaded.field.get(0, 0);
    assert!(z > 120.0 && z < 135.0, "unexpected elevation {}", z);
}

#[test]
fn high_resolution_raster_is_decimated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dense.png");
    gradient_image(150, 150).save(&path).unwrap();

    let mut params = BuildParameters::default();
    params.loader.raster_point_budget = 100_000;
    let max_edges = params.topology.max_structural_edges;

    let model = Model::load(&path, &params).unwrap();
    assert_eq!(model.points().len(), 150 * 150);
    assert!(matches!(
        TopologyMode::select(150, 150, max_edges),
        TopologyMode::Decimated { .. }
    ));

    let stride = decimation_stride(150, 150, max_edges);
    let slack = 2 * 150usize.div_ceil(stride);
    assert!(stride > 1);
    assert!(model.edges().len() <= max_edges + slack);
}

#[test]
fn paletted_image_is_expanded_before_luminance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("indexed.bmp");
    let palette = [[255, 0, 0], [255, 255, 255], [0, 0, 0], [0, 255, 0]];
    fs::write(&path, paletted_bmp_row(&palette, &[0, 1, 2, 3, 0])).unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert_eq!((loaded.field.width(), loaded.field.height()), (5, 1));
    // Red and green use the 299/587/114 luma weights: 76 and 150.
    assert_eq!(
        loaded.field.iter_row_major().collect::<Vec<_>>(),
        [179.0, 0.0, 255.0, 105.0, 179.0]
    );
}

#[test]
fn gray_alpha_image_is_composited_over_white() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray_alpha.png");
    let mut img = GrayAlphaImage::new(4, 1);
    img.put_pixel(0, 0, LumaA([0, 255]));
    img.put_pixel(1, 0, LumaA([0, 0]));
    img.put_pixel(2, 0, LumaA([100, 255]));
    img.put_pixel(3, 0, LumaA([0, 128]));
    img.save(&path).unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert_eq!(
        loaded.field.iter_row_major().collect::<Vec<_>>(),
        [255.0, 0.0, 155.0, 128.0]
    );
}

#[test]
fn color_image_uses_601_luma() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red.png");
    RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert!(loaded.field.iter_row_major().all(|z| z == 179.0));
}

#[test]
fn corrupt_image_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.png");
    fs::write(&path, b"definitely not a png").unwrap();

    assert!(matches!(
        load(&path, &LoaderParameters::default()),
        Err(LoadError::Decode(_))
    ));
}
