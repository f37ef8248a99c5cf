use std::path::Path;

use crate::color::{Gradient, GradientError, GradientPreset, Rgb};
use crate::io::LoadError;
use crate::math::Real;
use crate::model::{BuildParameters, GroundGrid, Model, Wireframe};

/// The currently displayed model, its gradient, and the render buffers derived from
/// both.
///
/// The (model, wireframe, ground grid) triple is always replaced as a whole: a failed
/// reload leaves the previous triple untouched, and a gradient change recomputes the
/// wireframe colors of the current model.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    params: BuildParameters,
    gradient: Gradient,
    model: Option<Model>,
    wireframe: Wireframe,
    ground_grid: GroundGrid,
}

impl Scene {
    /// An empty scene using the default gradient.
    pub fn new(params: BuildParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Loads the file at `path` and, on success, makes it the displayed model.
    ///
    /// On failure the error is returned and the previously displayed model, if any,
    /// stays in place.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<&Model, LoadError> {
        let path = path.as_ref();

        match Model::load(path, &self.params) {
            Ok(model) => {
                log::info!(
                    "Displaying {}: {} points, {} edges.",
                    path.display(),
                    model.points().len(),
                    model.edges().len()
                );
                Ok(self.set_model(model))
            }
            Err(err) => {
                log::warn!(
                    "Failed to load {}: {}. Keeping the current model.",
                    path.display(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Makes `model` the displayed model and rebuilds the render buffers.
    pub fn set_model(&mut self, model: Model) -> &Model {
        let wireframe = Wireframe::build(&model, &self.gradient, &self.params.wireframe);
        let ground_grid = GroundGrid::build(model.lattice(), &self.params.ground_grid);

        self.wireframe = wireframe;
        self.ground_grid = ground_grid;
        self.model.insert(model)
    }

    /// Replaces the gradient by one built from `colors` and optional `positions` (see
    /// [`Gradient::from_colors`]), then recolors the wireframe.
    ///
    /// On error the current gradient is kept.
    pub fn set_gradient(
        &mut self,
        colors: Vec<Rgb>,
        positions: Option<Vec<Real>>,
    ) -> Result<(), GradientError> {
        let gradient = Gradient::from_colors(colors, positions)?;
        self.replace_gradient(gradient);
        Ok(())
    }

    /// Switches to a built-in gradient, then recolors the wireframe.
    pub fn set_preset(&mut self, preset: GradientPreset) {
        log::info!("Switching to the \"{}\" gradient.", preset.name());
        self.replace_gradient(Gradient::preset(preset));
    }

    /// Replaces the gradient, then recolors the wireframe.
    pub fn replace_gradient(&mut self, gradient: Gradient) {
        self.gradient = gradient;

        if let Some(model) = &self.model {
            self.wireframe = Wireframe::build(model, &self.gradient, &self.params.wireframe);
        }
    }

    /// The parameters used to build models and render buffers.
    #[inline]
    pub fn params(&self) -> &BuildParameters {
        &self.params
    }

    /// The active gradient.
    #[inline]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// The displayed model, if any file was successfully loaded.
    #[inline]
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// The wireframe render buffers of the displayed model.
    #[inline]
    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    /// The ground grid overlay of the displayed model.
    #[inline]
    pub fn ground_grid(&self) -> &GroundGrid {
        &self.ground_grid
    }
}
