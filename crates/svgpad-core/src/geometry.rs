//! Rotation and distance helpers shared by hit-testing and resizing.
//!
//! Rotation angles are in degrees throughout, matching the SVG
//! `rotate(angle cx cy)` transform the host renders with.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Corner positions of a shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in handle-lookup order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner, which stays fixed while this one
    /// is dragged during a resize.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// True for the two corners on the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// True for the two corners on the left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }
}

/// The four bounding-box corners of a shape, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Corners {
    /// Corners of an axis-aligned rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top_left: Point::new(rect.x0, rect.y0),
            top_right: Point::new(rect.x1, rect.y0),
            bottom_left: Point::new(rect.x0, rect.y1),
            bottom_right: Point::new(rect.x1, rect.y1),
        }
    }

    /// Get a corner position by name.
    pub fn get(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Rotate all four corners around a center.
    pub fn rotated(&self, center: Point, degrees: f64) -> Self {
        if degrees == 0.0 {
            return *self;
        }
        Self {
            top_left: rotate_point(self.top_left, center, degrees),
            top_right: rotate_point(self.top_right, center, degrees),
            bottom_left: rotate_point(self.bottom_left, center, degrees),
            bottom_right: rotate_point(self.bottom_right, center, degrees),
        }
    }
}

/// Rotate a point around a center by an angle in degrees.
pub fn rotate_point(point: Point, center: Point, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    let cos = radians.cos();
    let sin = radians.sin();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Map a world point into a shape's local frame: the shape center becomes
/// the origin and the shape's rotation is undone.
pub fn to_local(point: Point, center: Point, degrees: f64) -> Point {
    let unrotated = rotate_point(point, center, -degrees);
    Point::new(unrotated.x - center.x, unrotated.y - center.y)
}

/// Inverse of [`to_local`]: map a center-relative local point back into
/// world coordinates.
pub fn to_global(local: Point, center: Point, degrees: f64) -> Point {
    rotate_point(Point::new(center.x + local.x, center.y + local.y), center, degrees)
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Angle in degrees from a center to a point (atan2 convention, y-down).
pub fn point_angle(center: Point, point: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x).to_degrees()
}

/// Normalize an angle in degrees into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
