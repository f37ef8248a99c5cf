//! Height-to-color gradients.

pub use self::gradient::{Gradient, GradientError, GradientStop};
pub use self::preset::GradientPreset;
pub use self::rgb::Rgb;

mod gradient;
mod preset;
mod rgb;
