//! Canvas document and selection state.

use crate::error::DocumentError;
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default canvas size for new documents.
pub const DEFAULT_CANVAS_SIZE: Size = Size::new(800.0, 600.0);

/// A canvas document containing all shapes and the selection.
///
/// At most one shape is selected at a time; selecting a shape replaces
/// any previous selection. The selection is runtime state and is not
/// serialized with the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// All shapes in the document, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front, insertion order).
    z_order: Vec<ShapeId>,
    /// Canvas size in pixels.
    canvas_size: Size,
    /// The selected shape, if any.
    #[serde(skip)]
    selected: Option<ShapeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            z_order: Vec::new(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            selected: None,
        }
    }

    /// Add a shape to the document, on top of existing shapes.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        log::debug!("add {} {}", shape.kind(), id);
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Remove a shape from the document. Clears the selection if it
    /// pointed at the removed shape.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.shapes.remove(&id);
        if removed.is_some() {
            log::debug!("remove shape {id}");
        }
        removed
    }

    /// Remove the selected shape, if any.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selected?;
        self.remove_shape(id)
    }

    /// Clear all shapes and the selection.
    pub fn clear(&mut self) {
        log::debug!("clear document ({} shapes)", self.shapes.len());
        self.shapes.clear();
        self.z_order.clear();
        self.selected = None;
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Replace the content of a text shape.
    pub fn update_text(&mut self, id: ShapeId, content: String) -> Result<(), DocumentError> {
        match self.shapes.get_mut(&id) {
            Some(Shape::Text(text)) => {
                text.set_content(content);
                Ok(())
            }
            Some(_) => Err(DocumentError::NotAText(id)),
            None => Err(DocumentError::ShapeNotFound(id)),
        }
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Find the topmost shape whose outline is hit at a point.
    pub fn shape_at_point(&self, point: Point, tolerance: f64) -> Option<ShapeId> {
        self.z_order
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.shapes
                    .get(id)
                    .is_some_and(|s| s.hit_test(point, tolerance))
            })
    }

    /// Select a shape, replacing any previous selection.
    pub fn select(&mut self, id: ShapeId) -> Result<(), DocumentError> {
        if !self.shapes.contains_key(&id) {
            return Err(DocumentError::ShapeNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The selected shape's ID, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shapes.get(&id))
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Resize the canvas. Dimensions must be finite and at least 1x1.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), DocumentError> {
        if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
            return Err(DocumentError::InvalidCanvasSize { width, height });
        }
        log::debug!("canvas size {width}x{height}");
        self.canvas_size = Size::new(width, height);
        Ok(())
    }

    /// Check if a point lies on the canvas.
    pub fn in_canvas(&self, point: Point) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x <= self.canvas_size.width
            && point.y <= self.canvas_size.height
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
