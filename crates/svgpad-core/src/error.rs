//! Error types for document operations.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Errors returned by fallible document operations.
///
/// Pointer-driven interactions never produce these; out-of-range or
/// degenerate pointer input is clamped or ignored instead. They only
/// surface from explicit host requests (selecting by id, resizing the
/// canvas, editing a shape).
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    /// Canvas dimensions must be finite and at least 1x1.
    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: f64, height: f64 },

    /// The requested shape does not exist in the document.
    #[error("no shape with id {0}")]
    ShapeNotFound(ShapeId),

    /// The requested shape exists but is not a text shape.
    #[error("shape {0} is not a text shape")]
    NotAText(ShapeId),
}
