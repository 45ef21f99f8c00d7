//! Shape definitions for the drawing canvas.

mod ellipse;
mod line;
mod rectangle;
mod text;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::geometry::{self, Corners};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

/// Style properties for shapes.
///
/// Shapes are drawn outline-only; the interior is transparent and does not
/// respond to pointer input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the axis-aligned bounding box, ignoring rotation.
    fn bounds(&self) -> Rect;

    /// Check if a point (in the shape's unrotated frame) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Move the shape by a delta.
    fn translate(&mut self, delta: Vec2);

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Line(Line),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    /// Rotation center, used for hit-testing and handle placement.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Check if a point (in world coordinates) hits this shape.
    ///
    /// Rotated shapes are tested by mapping the point back into the
    /// shape's unrotated frame first.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let rotation = self.rotation();
        let point = if rotation == 0.0 {
            point
        } else {
            geometry::rotate_point(point, self.center(), -rotation)
        };
        match self {
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Ellipse(s) => s.hit_test(point, tolerance),
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Ellipse(s) => s.translate(delta),
            Shape::Line(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
            Shape::Line(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
        }
    }

    /// Get the rotation angle in degrees (0 for shapes that don't rotate).
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.rotation,
            Shape::Ellipse(s) => s.rotation,
            Shape::Line(s) => s.rotation,
            Shape::Text(_) => 0.0,
        }
    }

    /// Set the rotation angle in degrees.
    pub fn set_rotation(&mut self, rotation: f64) {
        match self {
            Shape::Rectangle(s) => s.rotation = rotation,
            Shape::Ellipse(s) => s.rotation = rotation,
            Shape::Line(s) => s.rotation = rotation,
            Shape::Text(_) => {}
        }
    }

    /// Check if this shape supports rotation.
    pub fn supports_rotation(&self) -> bool {
        !matches!(self, Shape::Text(_))
    }

    /// Bounding-box corners in the shape's unrotated frame.
    ///
    /// For lines the corners are anchored to the raw endpoints, so the
    /// top-left corner is always the start point and the bottom-right
    /// corner is always the end point, whatever direction the line runs.
    /// Text shapes expose no corners.
    pub fn corners(&self) -> Option<Corners> {
        match self {
            Shape::Rectangle(s) => Some(Corners::from_rect(s.as_rect())),
            Shape::Ellipse(s) => Some(Corners::from_rect(s.bounds())),
            Shape::Line(s) => Some(Corners {
                top_left: s.start,
                top_right: Point::new(s.end.x, s.start.y),
                bottom_left: Point::new(s.start.x, s.end.y),
                bottom_right: s.end,
            }),
            Shape::Text(_) => None,
        }
    }

    /// Bounding-box corners with the shape's rotation applied.
    pub fn rotated_corners(&self) -> Option<Corners> {
        let corners = self.corners()?;
        let rotation = self.rotation();
        if rotation == 0.0 {
            Some(corners)
        } else {
            Some(corners.rotated(self.center(), rotation))
        }
    }

    /// Shape type name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Line(_) => "line",
            Shape::Text(_) => "text",
        }
    }
}
