//! Manipulation handles and corner-resize geometry.

use crate::config::HitConfig;
use crate::geometry::{self, Corner};
use crate::shapes::{Shape, ShapeTrait};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which end of a line a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineEnd {
    Start,
    End,
}

/// Type of manipulation handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Corner resize handle for rectangles and ellipses.
    Corner(Corner),
    /// Endpoint handle for lines.
    Endpoint(LineEnd),
}

/// A manipulation handle with its position.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in world coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point is within the handle's activation radius.
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= radius * radius
    }
}

/// Get the resize handles for a shape, at their rotated positions.
///
/// Rectangles and ellipses get one handle per bounding-box corner. Lines
/// get a handle per endpoint. Text has no resize handles.
pub fn resize_handles(shape: &Shape) -> Vec<Handle> {
    let Some(corners) = shape.rotated_corners() else {
        return Vec::new();
    };
    match shape {
        Shape::Line(_) => vec![
            Handle::new(corners.top_left, HandleKind::Endpoint(LineEnd::Start)),
            Handle::new(corners.bottom_right, HandleKind::Endpoint(LineEnd::End)),
        ],
        _ => Corner::ALL
            .iter()
            .map(|&corner| Handle::new(corners.get(corner), HandleKind::Corner(corner)))
            .collect(),
    }
}

/// Find the resize handle at a point, if any.
pub fn resize_handle_at(shape: &Shape, point: Point, config: &HitConfig) -> Option<HandleKind> {
    resize_handles(shape)
        .into_iter()
        .find(|handle| handle.hit_test(point, config.handle_radius))
        .map(|handle| handle.kind)
}

/// Find the rotation zone at a point, if any.
///
/// Each corner is surrounded by an invisible ring, strictly outside the
/// resize handle radius and strictly inside the outer radius. Lines only
/// expose the rings around their endpoints; text cannot rotate.
pub fn rotation_corner_at(shape: &Shape, point: Point, config: &HitConfig) -> Option<Corner> {
    if !shape.supports_rotation() {
        return None;
    }
    let corners = shape.rotated_corners()?;
    let candidates: &[Corner] = match shape {
        Shape::Line(_) => &[Corner::TopLeft, Corner::BottomRight],
        _ => &Corner::ALL,
    };
    let inner_sq = config.rotation_inner_radius * config.rotation_inner_radius;
    let outer_sq = config.rotation_outer_radius * config.rotation_outer_radius;
    candidates.iter().copied().find(|&corner| {
        let pos = corners.get(corner);
        let dx = point.x - pos.x;
        let dy = point.y - pos.y;
        let dist_sq = dx * dx + dy * dy;
        inner_sq < dist_sq && dist_sq < outer_sq
    })
}

/// Resize a shape by dragging one of its handles to a pointer position.
///
/// `original` is the shape as it was when the resize began. Each call
/// recomputes the geometry from that snapshot, so a drag never
/// accumulates rounding error. The dragged corner follows the pointer
/// while the opposite corner stays fixed; when the pointer crosses past
/// the fixed corner the bounds are flipped, keeping width and height
/// non-negative. With `preserve_aspect` the dominant axis drives the
/// other.
pub fn apply_resize(
    shape: &mut Shape,
    original: &Shape,
    handle: HandleKind,
    pointer: Point,
    preserve_aspect: bool,
) {
    match handle {
        HandleKind::Endpoint(end) => {
            if let Shape::Line(line) = shape {
                match end {
                    LineEnd::Start => line.start = pointer,
                    LineEnd::End => line.end = pointer,
                }
            }
        }
        HandleKind::Corner(corner) => {
            let initial = original.bounds();
            let center = initial.center();
            let rotation = original.rotation();

            // Work in the initial shape's local frame, with the center at
            // the origin and rotation undone.
            let local = geometry::to_local(pointer, center, rotation);
            let mut left = -initial.width() / 2.0;
            let mut top = -initial.height() / 2.0;
            let mut right = initial.width() / 2.0;
            let mut bottom = initial.height() / 2.0;

            match corner {
                Corner::TopLeft => {
                    left = local.x;
                    top = local.y;
                }
                Corner::TopRight => {
                    right = local.x;
                    top = local.y;
                }
                Corner::BottomRight => {
                    right = local.x;
                    bottom = local.y;
                }
                Corner::BottomLeft => {
                    left = local.x;
                    bottom = local.y;
                }
            }

            if preserve_aspect
                && initial.width() > f64::EPSILON
                && initial.height() > f64::EPSILON
            {
                let aspect = initial.width() / initial.height();
                let new_width = (right - left).abs();
                let new_height = (bottom - top).abs();
                if new_width / aspect > new_height {
                    // Width is the driver, adjust height.
                    let target_height = new_width / aspect;
                    if corner.is_top() {
                        top = bottom - target_height;
                    } else {
                        bottom = top + target_height;
                    }
                } else {
                    // Height is the driver, adjust width.
                    let target_width = new_height * aspect;
                    if corner.is_left() {
                        left = right - target_width;
                    } else {
                        right = left + target_width;
                    }
                }
            }

            if left > right {
                std::mem::swap(&mut left, &mut right);
            }
            if top > bottom {
                std::mem::swap(&mut top, &mut bottom);
            }

            let new_width = right - left;
            let new_height = bottom - top;
            let local_center = Point::new((left + right) / 2.0, (top + bottom) / 2.0);
            let new_center = geometry::to_global(local_center, center, rotation);

            match shape {
                Shape::Rectangle(rect) => {
                    rect.position = Point::new(
                        new_center.x - new_width / 2.0,
                        new_center.y - new_height / 2.0,
                    );
                    rect.width = new_width;
                    rect.height = new_height;
                }
                Shape::Ellipse(ellipse) => {
                    ellipse.center = new_center;
                    ellipse.radius_x = new_width / 2.0;
                    ellipse.radius_y = new_height / 2.0;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Ellipse, Line, Rectangle, Text};
    use kurbo::Rect;

    fn config() -> HitConfig {
        HitConfig::default()
    }

    #[test]
    fn test_rectangle_handles() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0);
        let handles = resize_handles(&Shape::Rectangle(rect));

        assert_eq!(handles.len(), 4);
        assert!(matches!(handles[0].kind, HandleKind::Corner(Corner::TopLeft)));
        assert_eq!(handles[0].position, Point::new(100.0, 100.0));
        assert!(matches!(
            handles[3].kind,
            HandleKind::Corner(Corner::BottomRight)
        ));
        assert_eq!(handles[3].position, Point::new(200.0, 200.0));
    }

    #[test]
    fn test_line_handles_follow_endpoints() {
        let line = Line::new(Point::new(200.0, 100.0), Point::new(100.0, 200.0));
        let handles = resize_handles(&Shape::Line(line));

        assert_eq!(handles.len(), 2);
        assert!(matches!(
            handles[0].kind,
            HandleKind::Endpoint(LineEnd::Start)
        ));
        assert_eq!(handles[0].position, Point::new(200.0, 100.0));
        assert!(matches!(handles[1].kind, HandleKind::Endpoint(LineEnd::End)));
        assert_eq!(handles[1].position, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_text_has_no_handles() {
        let text = Text::new(Point::new(50.0, 50.0), "note".to_string());
        assert!(resize_handles(&Shape::Text(text)).is_empty());
    }

    #[test]
    fn test_resize_handle_at_corner() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0);
        let shape = Shape::Rectangle(rect);

        assert_eq!(
            resize_handle_at(&shape, Point::new(105.0, 105.0), &config()),
            Some(HandleKind::Corner(Corner::TopLeft))
        );
        assert_eq!(
            resize_handle_at(&shape, Point::new(205.0, 205.0), &config()),
            Some(HandleKind::Corner(Corner::BottomRight))
        );
        assert_eq!(
            resize_handle_at(&shape, Point::new(500.0, 500.0), &config()),
            None
        );
        // Just outside the activation radius.
        assert_eq!(
            resize_handle_at(&shape, Point::new(100.0, 111.0), &config()),
            None
        );
    }

    #[test]
    fn test_resize_handle_at_line_endpoints() {
        let line = Line::new(Point::new(100.0, 100.0), Point::new(200.0, 200.0));
        let shape = Shape::Line(line);

        assert_eq!(
            resize_handle_at(&shape, Point::new(105.0, 105.0), &config()),
            Some(HandleKind::Endpoint(LineEnd::Start))
        );
        assert_eq!(
            resize_handle_at(&shape, Point::new(205.0, 205.0), &config()),
            Some(HandleKind::Endpoint(LineEnd::End))
        );
        // The unused bounding-box corners are not handles.
        assert_eq!(
            resize_handle_at(&shape, Point::new(200.0, 100.0), &config()),
            None
        );
    }

    #[test]
    fn test_rotated_handles() {
        let mut rect = Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0);
        rect.rotation = 90.0;
        let shape = Shape::Rectangle(rect);

        // A quarter turn carries the top-left handle to where the
        // top-right corner was (y grows downward).
        assert_eq!(
            resize_handle_at(&shape, Point::new(200.0, 100.0), &config()),
            Some(HandleKind::Corner(Corner::TopLeft))
        );
        assert_eq!(
            resize_handle_at(&shape, Point::new(100.0, 200.0), &config()),
            Some(HandleKind::Corner(Corner::BottomRight))
        );
    }

    #[test]
    fn test_rotation_ring() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0);
        let shape = Shape::Rectangle(rect);

        // Inside the ring around the top-left corner.
        assert_eq!(
            rotation_corner_at(&shape, Point::new(115.0, 115.0), &config()),
            Some(Corner::TopLeft)
        );
        // Within the resize radius, the ring does not respond.
        assert_eq!(
            rotation_corner_at(&shape, Point::new(101.0, 101.0), &config()),
            None
        );
        // Beyond the outer radius.
        assert_eq!(
            rotation_corner_at(&shape, Point::new(130.0, 130.0), &config()),
            None
        );
        assert_eq!(rotation_corner_at(&shape, Point::new(0.0, 0.0), &config()), None);
    }

    #[test]
    fn test_rotation_ring_line_endpoints_only() {
        let line = Line::new(Point::new(100.0, 100.0), Point::new(200.0, 200.0));
        let shape = Shape::Line(line);

        assert_eq!(
            rotation_corner_at(&shape, Point::new(115.0, 115.0), &config()),
            Some(Corner::TopLeft)
        );
        // The bounding-box top-right corner carries no ring for lines.
        assert_eq!(
            rotation_corner_at(&shape, Point::new(215.0, 115.0), &config()),
            None
        );
    }

    #[test]
    fn test_rotation_ring_ignores_text() {
        let text = Text::new(Point::new(100.0, 100.0), "hi".to_string());
        assert_eq!(
            rotation_corner_at(&Shape::Text(text), Point::new(115.0, 115.0), &config()),
            None
        );
    }

    #[test]
    fn test_resize_rect_bottom_right() {
        let original = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(150.0, 150.0),
            false,
        );

        let bounds = shape.bounds();
        assert!((bounds.x0).abs() < 1e-9);
        assert!((bounds.y0).abs() < 1e-9);
        assert!((bounds.width() - 150.0).abs() < 1e-9);
        assert!((bounds.height() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_rect_top_left() {
        let original = Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::TopLeft),
            Point::new(50.0, 50.0),
            false,
        );

        let bounds = shape.bounds();
        assert!((bounds.x0 - 50.0).abs() < 1e-9);
        assert!((bounds.y0 - 50.0).abs() < 1e-9);
        assert!((bounds.width() - 150.0).abs() < 1e-9);
        assert!((bounds.height() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_flips_when_crossing_fixed_corner() {
        let original = Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(0.0, 0.0),
            false,
        );

        let bounds = shape.bounds();
        assert!((bounds.width() - 100.0).abs() < 1e-9);
        assert!((bounds.height() - 100.0).abs() < 1e-9);
        assert!((bounds.x0).abs() < 1e-9);
        assert!((bounds.y0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_rotated_rect() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        rect.rotation = 45.0;
        let original = Shape::Rectangle(rect);
        let mut shape = original.clone();

        // Drag the bottom-right handle so the local corner moves from
        // (50, 50) to (60, 50).
        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(57.071_067_8, 127.781_745_9),
            false,
        );

        let Shape::Rectangle(resized) = &shape else {
            panic!("expected rectangle");
        };
        assert!((resized.width - 110.0).abs() < 1e-6);
        assert!((resized.height - 100.0).abs() < 1e-6);
        let center = shape.center();
        assert!((center.x - 53.5355).abs() < 1e-3);
        assert!((center.y - 53.5355).abs() < 1e-3);
    }

    #[test]
    fn test_resize_ellipse_bottom_right() {
        let original = Shape::Ellipse(Ellipse::new(Point::new(100.0, 100.0), 50.0, 50.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(180.0, 160.0),
            false,
        );

        let Shape::Ellipse(resized) = &shape else {
            panic!("expected ellipse");
        };
        assert!((resized.radius_x - 65.0).abs() < 1e-9);
        assert!((resized.radius_y - 55.0).abs() < 1e-9);
        assert!((resized.center.x - 115.0).abs() < 1e-9);
        assert!((resized.center.y - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_line_endpoints() {
        let original = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Endpoint(LineEnd::Start),
            Point::new(-10.0, -20.0),
            false,
        );
        apply_resize(
            &mut shape,
            &original,
            HandleKind::Endpoint(LineEnd::End),
            Point::new(150.0, 150.0),
            false,
        );

        let Shape::Line(line) = &shape else {
            panic!("expected line");
        };
        assert_eq!(line.start, Point::new(-10.0, -20.0));
        assert_eq!(line.end, Point::new(150.0, 150.0));
    }

    #[test]
    fn test_resize_preserve_aspect_height_driver() {
        // 2:1 rectangle dragged to a square target: height wins, width follows.
        let original = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 100.0, 50.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(200.0, 200.0),
            true,
        );

        let bounds = shape.bounds();
        assert!((bounds.width() - 400.0).abs() < 1e-9);
        assert!((bounds.height() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_preserve_aspect_width_driver() {
        let original = Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::TopLeft),
            Point::new(50.0, 80.0),
            true,
        );

        let bounds = shape.bounds();
        assert_eq!(bounds, Rect::new(50.0, 50.0, 200.0, 200.0));
    }

    #[test]
    fn test_resize_preserve_aspect_bottom_left() {
        let original = Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 100.0, 50.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomLeft),
            Point::new(0.0, 160.0),
            true,
        );

        let bounds = shape.bounds();
        assert!((bounds.width() - 200.0).abs() < 1e-9);
        assert!((bounds.height() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_degenerate_keeps_dimensions_finite() {
        let original = Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 100.0, 0.0));
        let mut shape = original.clone();

        apply_resize(
            &mut shape,
            &original,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(250.0, 140.0),
            true,
        );

        let bounds = shape.bounds();
        assert!(bounds.width().is_finite());
        assert!(bounds.height().is_finite());
        assert!(bounds.width() >= 0.0);
        assert!(bounds.height() >= 0.0);
    }
}
