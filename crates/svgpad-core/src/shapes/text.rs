//! Text shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A text label.
///
/// The engine is headless and cannot measure glyphs, so bounds are
/// approximated from character counts. Text is selected by its bounding
/// box, carries no resize handles, and does not rotate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Position (top-left corner of the text block).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family name, passed through to the host renderer.
    pub font_family: String,
    /// Style properties. The stroke color doubles as the glyph color.
    pub style: ShapeStyle,
}

impl Text {
    /// Default font size for new text.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    /// Default font family for new text.
    pub const DEFAULT_FONT_FAMILY: &'static str = "sans-serif";

    /// Approximate average glyph width as a fraction of the font size.
    const CHAR_WIDTH_FACTOR: f64 = 0.55;

    /// Minimum bounding-box width, so empty text stays clickable.
    const MIN_WIDTH: f64 = 20.0;

    /// Create a new text shape.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            style: ShapeStyle::default(),
        }
    }

    /// Create a new text shape with a font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Approximate width from the widest line.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }

    /// Approximate height from the line count.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        // lines() does not count a trailing empty line
        let line_count = if self.content.ends_with('\n') {
            line_count + 1
        } else {
            line_count
        };
        line_count as f64 * self.font_size * 1.2
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let width = self.approximate_width().max(Self::MIN_WIDTH);
        let height = self.approximate_height();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + height,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_creation() {
        let text = Text::new(Point::new(100.0, 100.0), "Hello".to_string());
        assert_eq!(text.content(), "Hello");
        assert!((text.font_size - Text::DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_inside_box() {
        // Unlike outline shapes, text is hit anywhere inside its box.
        let text = Text::new(Point::new(100.0, 100.0), "Hello World".to_string());
        let center = text.bounds().center();
        assert!(text.hit_test(center, 5.0));
        assert!(text.hit_test(Point::new(100.0, 100.0), 5.0));
        assert!(!text.hit_test(Point::new(0.0, 0.0), 5.0));
    }

    #[test]
    fn test_empty_text_stays_clickable() {
        let text = Text::new(Point::new(50.0, 50.0), String::new());
        let bounds = text.bounds();
        assert!(bounds.width() >= 20.0);
        assert!(bounds.height() > 0.0);
        assert!(text.hit_test(Point::new(55.0, 55.0), 0.0));
    }

    #[test]
    fn test_multiline_bounds() {
        let one = Text::new(Point::ZERO, "abcdef".to_string());
        let two = Text::new(Point::ZERO, "abcdef\nabcdef".to_string());
        assert!(two.bounds().height() > one.bounds().height());
        assert!((one.bounds().width() - two.bounds().width()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate() {
        let mut text = Text::new(Point::new(10.0, 10.0), "x".to_string());
        text.translate(Vec2::new(-10.0, 20.0));
        assert!((text.position.x).abs() < f64::EPSILON);
        assert!((text.position.y - 30.0).abs() < f64::EPSILON);
    }
}
