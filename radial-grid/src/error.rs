//! Error types for the radial layout.

use crate::layout::RadialShape;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The shape has no circumference formula yet.
    #[error("radial shape {0:?} is not supported yet")]
    UnsupportedShape(RadialShape),

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("invalid child list: {0}")]
    InvalidChildren(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
