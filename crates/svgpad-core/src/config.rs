//! Tunable distances for hit-testing and handle activation.

use serde::{Deserialize, Serialize};

/// Half-width of the boundary band around a shape's outline, in canvas
/// pixels. The stroke itself is drawn thinner; the band is what makes a
/// 2px outline clickable.
pub const DEFAULT_STROKE_TOLERANCE: f64 = 5.0;

/// Activation radius of a resize handle around a corner or endpoint.
pub const DEFAULT_HANDLE_RADIUS: f64 = 10.0;

/// Inner radius of the rotation ring around each corner. Points closer
/// than this belong to the resize handle.
pub const DEFAULT_ROTATION_INNER_RADIUS: f64 = 10.0;

/// Outer radius of the rotation ring around each corner.
pub const DEFAULT_ROTATION_OUTER_RADIUS: f64 = 30.0;

/// Distance thresholds for pointer interactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitConfig {
    /// Boundary-band half-width for outline hit-testing.
    pub stroke_tolerance: f64,
    /// Resize-handle activation radius.
    pub handle_radius: f64,
    /// Inner edge of the rotation ring (exclusive).
    pub rotation_inner_radius: f64,
    /// Outer edge of the rotation ring (exclusive).
    pub rotation_outer_radius: f64,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            stroke_tolerance: DEFAULT_STROKE_TOLERANCE,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            rotation_inner_radius: DEFAULT_ROTATION_INNER_RADIUS,
            rotation_outer_radius: DEFAULT_ROTATION_OUTER_RADIUS,
        }
    }
}
