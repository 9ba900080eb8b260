use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a conversion can fail.
///
/// All variants are raised at the point of detection; nothing in this crate
/// retries or returns a partially filled batch.
#[derive(Error, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum EulerError {
    /// Axis label is not one of `x`, `y` or `z`.
    #[error("axis '{0}' could not be parsed as 'x', 'y' or 'z'")]
    InvalidAxis(String),

    /// Three-axis sequence is not one of the twelve valid Euler sequences.
    #[error("axes '{0}' are not a valid set of euler angle axes")]
    InvalidAxisSequence(String),

    /// Composition mode is unknown, or both/neither of intrinsic and extrinsic were requested.
    #[error("invalid composition mode: {0}")]
    InvalidCompositionMode(String),

    /// Angle rows are not length 3, matrices are not 3x3, or batch lengths disagree.
    #[error("shape error: {0}")]
    ShapeError(String),

    /// No convention with this name is registered.
    #[error("convention '{0}' is not implemented, build a ConventionDescriptor instead")]
    UnknownConvention(String),

    #[error("reference frame '{0}' could not be parsed as 'rotate reference' or 'rotate particle'")]
    InvalidReferenceFrame(String),

    /// Invalid decomposition settings or an unreadable convention file.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EulerError>;

impl EulerError {
    /// Short machine-friendly tag, used by the CLI when reporting failures as JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            EulerError::InvalidAxis(_) => "InvalidAxis",
            EulerError::InvalidAxisSequence(_) => "InvalidAxisSequence",
            EulerError::InvalidCompositionMode(_) => "InvalidCompositionMode",
            EulerError::ShapeError(_) => "ShapeError",
            EulerError::UnknownConvention(_) => "UnknownConvention",
            EulerError::InvalidReferenceFrame(_) => "InvalidReferenceFrame",
            EulerError::Config(_) => "Config",
        }
    }
}

impl From<serde_json::Error> for EulerError {
    fn from(err: serde_json::Error) -> Self {
        EulerError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EulerError::InvalidAxisSequence("xxy".to_string());
        assert_eq!(err.to_string(), "axes 'xxy' are not a valid set of euler angle axes");

        let err = EulerError::UnknownConvention("frealign".to_string());
        assert!(err.to_string().contains("frealign"));
    }

    #[test]
    fn test_error_serializes_with_variant_name() {
        let err = EulerError::ShapeError("expected 3 columns, got 4".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"ShapeError":"expected 3 columns, got 4"}"#);
        assert_eq!(err.kind(), "ShapeError");
    }
}
