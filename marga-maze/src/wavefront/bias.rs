//! Per-cell additive offsets for the wavefront.

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::core::GridCoord;

/// Rejected stochastic bias parameters.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum BiasError {
    /// Factor is not finite, or `2·factor` overflows
    #[error("bias factor must be finite, got {0}")]
    InvalidFactor(f32),

    /// Decay outside `(0, 1]`
    #[error("bias decay must be in (0, 1], got {0}")]
    InvalidDecay(f32),
}

/// Parameters of the decaying random perturbation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StochasticBias {
    /// Initial perturbation half-width `f`
    pub factor: f32,
    /// Multiplier applied to `f` after every cell
    pub decay: f32,
    /// Add the Euclidean goal distance underneath the perturbation
    pub euclidean_base: bool,
}

impl Default for StochasticBias {
    fn default() -> Self {
        Self {
            factor: 0.1,
            decay: 0.998,
            euclidean_base: false,
        }
    }
}

impl StochasticBias {
    /// Set the perturbation half-width
    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    /// Set the per-cell decay
    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    /// Layer the Euclidean goal distance under the perturbation
    pub fn with_euclidean_base(mut self, enabled: bool) -> Self {
        self.euclidean_base = enabled;
        self
    }

    /// Check that sampling stays within finite ranges.
    ///
    /// A decay above 1 grows the factor cell by cell until it overflows.
    pub fn validate(&self) -> Result<(), BiasError> {
        if !(2.0 * self.factor).is_finite() {
            return Err(BiasError::InvalidFactor(self.factor));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(BiasError::InvalidDecay(self.decay));
        }
        Ok(())
    }
}

/// Which bias an episode applies to its wavefront.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum BiasMode {
    /// Plain breadth-first layers
    #[default]
    None,
    /// Straight-line distance to the goal
    Euclidean,
    /// Decaying random perturbation
    Stochastic(StochasticBias),
}

impl BiasMode {
    /// Resolve the two user toggles. Euclidean wins when both are set.
    pub fn from_flags(euclidean: bool, stochastic: Option<StochasticBias>) -> Self {
        match (euclidean, stochastic) {
            (true, _) => BiasMode::Euclidean,
            (false, Some(params)) => BiasMode::Stochastic(params),
            (false, None) => BiasMode::None,
        }
    }

    /// Whether repeated attempts can differ.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, BiasMode::Stochastic(_))
    }

    /// Build the field for one episode.
    ///
    /// Returns `None` for [`BiasMode::None`]. The random generator is only
    /// consumed in stochastic mode.
    ///
    /// # Errors
    ///
    /// Stochastic parameters rejected by [`StochasticBias::validate`].
    pub fn build<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        goal: GridCoord,
        rng: &mut R,
    ) -> Result<Option<BiasField>, BiasError> {
        Ok(match self {
            BiasMode::None => None,
            BiasMode::Euclidean => Some(BiasField::euclidean(width, height, goal)),
            BiasMode::Stochastic(params) => {
                Some(BiasField::stochastic(width, height, goal, params, rng)?)
            }
        })
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BiasMode::None => "none",
            BiasMode::Euclidean => "euclidean",
            BiasMode::Stochastic(_) => "stochastic",
        }
    }
}

/// Dense per-cell offsets, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct BiasField {
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl BiasField {
    /// All-zero field.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            values: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Straight-line distance from every cell to `goal`.
    pub fn euclidean(width: usize, height: usize, goal: GridCoord) -> Self {
        let mut field = Self::zeros(width, height);
        for (i, value) in field.values.iter_mut().enumerate() {
            let cell = GridCoord::new((i % width) as i32, (i / width) as i32);
            *value = cell.euclidean_distance(&goal);
        }
        field
    }

    /// Decaying uniform perturbation, drawn cell by cell in row-major order.
    ///
    /// Each cell receives `2·U(-f, f)` and `f` is then multiplied by the
    /// decay, so later cells are perturbed less.
    pub fn stochastic<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        goal: GridCoord,
        params: &StochasticBias,
        rng: &mut R,
    ) -> Result<Self, BiasError> {
        params.validate()?;
        let mut field = if params.euclidean_base {
            Self::euclidean(width, height, goal)
        } else {
            Self::zeros(width, height)
        };

        let mut factor = params.factor.abs();
        for value in field.values.iter_mut() {
            let noise = if factor > 0.0 {
                rng.random_range(-factor..=factor)
            } else {
                0.0
            };
            *value += 2.0 * noise;
            factor *= params.decay;
        }
        debug!(
            "[Bias] stochastic field {}x{}: factor {:.3} -> {:.3}",
            width, height, params.factor, factor
        );
        Ok(field)
    }

    /// Field width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Offset for a cell (0 outside the field)
    #[inline]
    pub fn get(&self, coord: GridCoord) -> f32 {
        if coord.x < 0 || coord.y < 0 {
            return 0.0;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.values[y * self.width + x]
    }

    /// Raw offsets, row-major
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
