use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

use crate::io::LoadError;
use crate::math::Real;
use crate::shape::HeightField;

/// The luminance (and thus elevation) range of an 8-bit raster.
pub const MAX_LUMINANCE: Real = 255.0;

/// Reads the image at `path` and converts it to a height field.
///
/// See [`raster_height_field`] for the conversion rules.
pub fn load_raster(path: &Path, point_budget: usize) -> Result<HeightField, LoadError> {
    let img = image::open(path)?;
    Ok(raster_height_field(&img, point_budget))
}

/// Converts an image to a height field of at most `point_budget` samples (unless the
/// image is so elongated that a 1-pixel-wide result still exceeds it).
///
/// The image is converted to luminance (see [`luminance`]), downsampled with a bilinear
/// filter if it has more than `point_budget` pixels (see [`resampled_dimensions`]), and
/// every sample gets the elevation `255 - luminance`: dark pixels are high, bright
/// pixels are low.
pub fn raster_height_field(img: &DynamicImage, point_budget: usize) -> HeightField {
    let gray = luminance(img);
    let (width, height) = gray.dimensions();
    let (new_width, new_height) = resampled_dimensions(width, height, point_budget);

    let gray = if (new_width, new_height) != (width, height) {
        log::info!(
            "Image resampled: {}x{} -> {}x{} ({} points).",
            width,
            height,
            new_width,
            new_height,
            new_width as usize * new_height as usize
        );
        image::imageops::resize(&gray, new_width, new_height, FilterType::Triangle)
    } else {
        gray
    };

    let samples: Vec<Real> = gray
        .pixels()
        .map(|Luma([l])| MAX_LUMINANCE - *l as Real)
        .collect();

    HeightField::from_row_major(new_width as usize, new_height as usize, &samples)
}

/// Converts an image to single-channel luminance.
///
/// Images with an alpha channel are first composited onto an opaque white background,
/// so fully transparent pixels read as white (i.e. the lowest elevation). Paletted
/// images are expanded to full color by the decoder. The luminance itself uses the
/// ITU-R 601-2 weights, see [`luma_601`].
pub fn luminance(img: &DynamicImage) -> GrayImage {
    let rgb = if img.color().has_alpha() {
        composite_over_white(img)
    } else {
        img.to_rgb8()
    };

    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        Luma([luma_601(rgb.get_pixel(x, y).0)])
    })
}

/// The ITU-R 601-2 luma `L = R * 299/1000 + G * 587/1000 + B * 114/1000`, computed in
/// 16.16 fixed point and rounded.
///
/// Gray pixels (`R == G == B`) keep their value.
#[inline]
pub fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

fn composite_over_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());

    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let alpha = src[3] as u32;
        let over_white = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        *dst = Rgb([over_white(src[0]), over_white(src[1]), over_white(src[2])]);
    }

    rgb
}

/// The dimensions a `width × height` raster is resampled to so it has at most
/// `point_budget` pixels.
///
/// Both dimensions are multiplied by `sqrt(point_budget / (width * height))` and
/// rounded down independently. Each dimension is kept at least 1; if that alone breaks
/// the budget, the longer side is shrunk further. Rasters already within the budget are
/// left untouched.
pub fn resampled_dimensions(width: u32, height: u32, point_budget: usize) -> (u32, u32) {
    let point_budget = point_budget.max(1);
    let total = width as usize * height as usize;

    if total <= point_budget {
        return (width, height);
    }

    let scale = (point_budget as f64 / total as f64).sqrt();
    let mut new_width = ((width as f64 * scale).floor() as u32).max(1);
    let mut new_height = ((height as f64 * scale).floor() as u32).max(1);

    if new_width as usize * new_height as usize > point_budget {
        if new_width >= new_height {
            new_width = ((point_budget / new_height as usize) as u32).max(1);
        } else {
            new_height = ((point_budget / new_width as usize) as u32).max(1);
        }
    }

    (new_width, new_height)
}
