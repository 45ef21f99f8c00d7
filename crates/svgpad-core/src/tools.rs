//! Tool system for the drawing canvas.

use crate::shapes::{Ellipse, Line, Rectangle, Shape, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Available tools. Selection is not a tool: pressing a shape's outline
/// selects and drags it whichever tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Rectangle,
    Ellipse,
    Line,
    Text,
}

impl ToolKind {
    /// Tools that create a shape by dragging across the canvas.
    pub fn is_drawing(&self) -> bool {
        matches!(self, ToolKind::Rectangle | ToolKind::Ellipse | ToolKind::Line)
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// Tool is actively being used (e.g. drawing a shape).
    Active {
        /// Starting point of the interaction.
        start: Point,
        /// Current point of the interaction.
        current: Point,
    },
}

/// Manages the current tool and its drag state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Style applied to new shapes.
    pub current_style: ShapeStyle,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool, resetting any in-progress interaction.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = ToolState::Idle;
    }

    /// Begin a tool interaction.
    pub fn begin(&mut self, point: Point) {
        self.state = ToolState::Active {
            start: point,
            current: point,
        };
    }

    /// Update the current interaction.
    pub fn update(&mut self, point: Point) {
        if let ToolState::Active { current, .. } = &mut self.state {
            *current = point;
        }
    }

    /// End the current interaction and return any created shape.
    ///
    /// A drag that never left its starting point produces nothing.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        if let ToolState::Active { start, .. } = self.state {
            self.state = ToolState::Idle;
            if start == point {
                return None;
            }
            self.create_shape(start, point)
        } else {
            None
        }
    }

    /// Cancel the current interaction.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Check if a tool interaction is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// Get the preview shape for the current interaction.
    pub fn preview_shape(&self) -> Option<Shape> {
        if let ToolState::Active { start, current } = self.state {
            self.create_shape(start, current)
        } else {
            None
        }
    }

    /// Create a shape from start and end points.
    fn create_shape(&self, start: Point, end: Point) -> Option<Shape> {
        let mut shape = match self.current_tool {
            ToolKind::Rectangle => Some(Shape::Rectangle(Rectangle::from_corners(start, end))),
            ToolKind::Ellipse => {
                let rect = Rect::new(
                    start.x.min(end.x),
                    start.y.min(end.y),
                    start.x.max(end.x),
                    start.y.max(end.y),
                );
                Some(Shape::Ellipse(Ellipse::from_rect(rect)))
            }
            // Lines keep their drag direction, start to end.
            ToolKind::Line => Some(Shape::Line(Line::new(start, end))),
            ToolKind::Text => None,
        };

        if let Some(ref mut s) = shape {
            *s.style_mut() = self.current_style.clone();
        }

        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeTrait;

    #[test]
    fn test_tool_selection() {
        let mut tm = ToolManager::new();
        assert_eq!(tm.current_tool, ToolKind::Rectangle);

        tm.set_tool(ToolKind::Ellipse);
        assert_eq!(tm.current_tool, ToolKind::Ellipse);
    }

    #[test]
    fn test_tool_interaction() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle);

        assert!(!tm.is_active());

        tm.begin(Point::new(0.0, 0.0));
        assert!(tm.is_active());

        tm.update(Point::new(50.0, 50.0));
        assert!(tm.preview_shape().is_some());

        let shape = tm.end(Point::new(100.0, 100.0));
        assert!(shape.is_some());
        assert!(!tm.is_active());
    }

    #[test]
    fn test_cancel_interaction() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle);

        tm.begin(Point::new(0.0, 0.0));
        assert!(tm.is_active());

        tm.cancel();
        assert!(!tm.is_active());
        assert!(tm.preview_shape().is_none());
    }

    #[test]
    fn test_text_tool_creates_no_shape() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Text);

        tm.begin(Point::new(0.0, 0.0));
        let shape = tm.end(Point::new(100.0, 100.0));
        assert!(shape.is_none());
    }

    #[test]
    fn test_click_without_drag_creates_nothing() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Ellipse);

        tm.begin(Point::new(40.0, 40.0));
        assert!(tm.end(Point::new(40.0, 40.0)).is_none());
        assert!(!tm.is_active());
    }

    #[test]
    fn test_rectangle_normalized_from_any_direction() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle);

        tm.begin(Point::new(200.0, 200.0));
        let shape = tm.end(Point::new(100.0, 100.0)).unwrap();
        let bounds = shape.bounds();
        assert!((bounds.x0 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_keeps_direction() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Line);

        tm.begin(Point::new(200.0, 100.0));
        let shape = tm.end(Point::new(100.0, 200.0)).unwrap();
        let Shape::Line(line) = shape else {
            panic!("expected line");
        };
        assert_eq!(line.start, Point::new(200.0, 100.0));
        assert_eq!(line.end, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_flat_drag_still_creates_shape() {
        // Only a drag with no extent at all is discarded.
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle);

        tm.begin(Point::new(100.0, 100.0));
        let shape = tm.end(Point::new(200.0, 100.0)).unwrap();
        let bounds = shape.bounds();
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
        assert!((bounds.height()).abs() < f64::EPSILON);
    }
}
