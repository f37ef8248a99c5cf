use crate::color::Rgb;

/// The built-in gradients.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum GradientPreset {
    /// Blue, cyan, green, yellow, red.
    #[default]
    Default,
    /// Dark green lowlands to white peaks.
    EarthMountains,
    /// Black, dark red, orange, yellow, white.
    Fire,
    /// Deep blue to white.
    IceSnow,
}

impl GradientPreset {
    /// All the presets, in menu order.
    pub const ALL: [GradientPreset; 4] = [
        GradientPreset::Default,
        GradientPreset::EarthMountains,
        GradientPreset::Fire,
        GradientPreset::IceSnow,
    ];

    /// The colors of this preset, from the lowest to the highest elevation. They are
    /// meant to be evenly spaced.
    pub fn colors(self) -> [Rgb; 5] {
        match self {
            GradientPreset::Default => [
                Rgb::new(0.0, 0.0, 1.0),
                Rgb::new(0.0, 1.0, 1.0),
                Rgb::new(0.0, 1.0, 0.0),
                Rgb::new(1.0, 1.0, 0.0),
                Rgb::new(1.0, 0.0, 0.0),
            ],
            GradientPreset::EarthMountains => [
                Rgb::new(0.2, 0.6, 0.2),
                Rgb::new(0.5, 0.8, 0.3),
                Rgb::new(0.7, 0.6, 0.4),
                Rgb::new(0.8, 0.7, 0.6),
                Rgb::WHITE,
            ],
            GradientPreset::Fire => [
                Rgb::BLACK,
                Rgb::new(0.5, 0.0, 0.0),
                Rgb::new(1.0, 0.5, 0.0),
                Rgb::new(1.0, 1.0, 0.0),
                Rgb::WHITE,
            ],
            GradientPreset::IceSnow => [
                Rgb::new(0.0, 0.2, 0.8),
                Rgb::new(0.3, 0.5, 1.0),
                Rgb::new(0.6, 0.8, 1.0),
                Rgb::new(0.8, 0.9, 1.0),
                Rgb::WHITE,
            ],
        }
    }

    /// A human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            GradientPreset::Default => "Default",
            GradientPreset::EarthMountains => "Earth/Mountains",
            GradientPreset::Fire => "Fire",
            GradientPreset::IceSnow => "Ice/Snow",
        }
    }
}
