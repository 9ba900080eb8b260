use serde::{Deserialize, Serialize};

use crate::errors::{EulerError, Result};

/// Settings for turning rotation matrices back into Euler angles.
///
/// ```rust
/// use eulerangles::DecompositionConfig;
///
/// let config = DecompositionConfig::default();
/// assert_eq!(config.gimbal_tolerance, 1e-4);
///
/// let strict = DecompositionConfig::new(1e-8);
/// assert!(strict.validate().is_ok());
/// assert!(DecompositionConfig::new(-1.0).validate().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DecompositionConfig {
    /// Below this coupling magnitude (|sin| of the middle angle for proper Euler
    /// sequences, |cos| for Tait-Bryan sequences) a matrix is treated as gimbal locked.
    #[serde(default = "DecompositionConfig::default_gimbal_tolerance")]
    pub gimbal_tolerance: f64,
}

impl DecompositionConfig {
    pub const DEFAULT_GIMBAL_TOLERANCE: f64 = 1e-4;

    pub fn new(gimbal_tolerance: f64) -> Self {
        Self { gimbal_tolerance }
    }

    fn default_gimbal_tolerance() -> f64 {
        Self::DEFAULT_GIMBAL_TOLERANCE
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gimbal_tolerance.is_finite() {
            return Err(EulerError::Config("Gimbal tolerance must be finite.".to_string()));
        }
        if self.gimbal_tolerance < 0.0 {
            return Err(EulerError::Config("Gimbal tolerance cannot be negative.".to_string()));
        }
        if self.gimbal_tolerance >= 1.0 {
            return Err(EulerError::Config(
                "Gimbal tolerance must be below 1, every matrix would be gimbal locked.".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            gimbal_tolerance: Self::DEFAULT_GIMBAL_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(DecompositionConfig::default().validate().is_ok());
        assert!(DecompositionConfig::new(0.0).validate().is_ok());
        assert!(DecompositionConfig::new(f64::NAN).validate().is_err());
        assert!(DecompositionConfig::new(1.0).validate().is_err());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: DecompositionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecompositionConfig::default());

        let config: DecompositionConfig = serde_json::from_str(r#"{"gimbal_tolerance": 1e-6}"#).unwrap();
        assert_eq!(config.gimbal_tolerance, 1e-6);
    }
}
