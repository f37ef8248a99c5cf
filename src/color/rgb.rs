use crate::math::Real;

/// An RGB color with channels in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Rgb {
    /// The red channel.
    pub r: Real,
    /// The green channel.
    pub g: Real,
    /// The blue channel.
    pub b: Real,
}

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: Real, g: Real, b: Real) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`), each
    /// channel independently.
    ///
    /// Both endpoints are reproduced exactly.
    #[inline]
    pub fn lerp(&self, other: &Rgb, t: Real) -> Rgb {
        let mix = |a: Real, b: Real| a * (1.0 - t) + b * t;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// The channels of this color as an array.
    #[inline]
    pub fn to_array(self) -> [Real; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[Real; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [Real; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [Real; 3] {
    #[inline]
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}
