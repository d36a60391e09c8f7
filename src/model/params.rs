//! Physical constants of the fiber model.

use serde::{Deserialize, Serialize};

/// Speed of light in vacuum used by the model, m/s.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Fiber parameters applied to every link of a topology.
///
/// `Default` reproduces the reference model: light travels at 2/3 of
/// 3×10⁸ m/s and each metre adds `1e-9 × signal_power` of noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiberParams {
    pub speed_of_light: f64,
    /// Fraction of `speed_of_light` at which the signal travels in the fiber.
    pub velocity_factor: f64,
    /// Noise added per metre, relative to the injected signal power.
    pub noise_coefficient: f64,
}

impl Default for FiberParams {
    fn default() -> Self {
        Self {
            speed_of_light: SPEED_OF_LIGHT,
            velocity_factor: 2.0 / 3.0,
            noise_coefficient: 1e-9,
        }
    }
}

impl FiberParams {
    /// Signal speed inside the fiber, m/s.
    pub fn propagation_speed(&self) -> f64 {
        self.velocity_factor * self.speed_of_light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed() {
        assert_eq!(FiberParams::default().propagation_speed(), 2.0 / 3.0 * 3e8);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let params: FiberParams = serde_json::from_str(r#"{"noise_coefficient": 2e-9}"#).unwrap();
        assert_eq!(params.noise_coefficient, 2e-9);
        assert_eq!(params.speed_of_light, SPEED_OF_LIGHT);
        assert_eq!(params.velocity_factor, 2.0 / 3.0);
    }
}
