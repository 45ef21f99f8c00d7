//! Pointer and keyboard interaction handling for a canvas document.

use crate::cursor::Cursor;
use crate::events::EditorEvent;
use kurbo::Point;
use svgpad_core::config::HitConfig;
use svgpad_core::document::Document;
use svgpad_core::error::DocumentError;
use svgpad_core::geometry::{self, Corner};
use svgpad_core::input::{ClickTracker, KeyEvent, Modifiers, MouseButton, PointerEvent};
use svgpad_core::selection::{self, HandleKind};
use svgpad_core::shapes::{Shape, ShapeId, ShapeStyle, Text};
use svgpad_core::tools::{ToolKind, ToolManager};

/// The active pointer interaction.
///
/// Resizing, rotating and dragging keep a snapshot of the shape as it
/// was on pointer-down; every move recomputes from the snapshot, and
/// cancellation restores it.
#[derive(Debug, Clone, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// A draw gesture is in progress; the draft lives in the tool manager.
    Drawing,
    /// A shape is being moved by its outline.
    Dragging {
        id: ShapeId,
        original: Shape,
        start: Point,
        moved: bool,
    },
    /// A resize handle is being dragged.
    Resizing {
        id: ShapeId,
        original: Shape,
        handle: HandleKind,
    },
    /// A rotation ring is being dragged.
    Rotating {
        id: ShapeId,
        original: Shape,
        start_angle: f64,
    },
}

/// An open text edit session. Pointer events are ignored until the host
/// finishes or cancels it.
#[derive(Debug, Clone)]
pub struct TextSession {
    /// The text shape being edited, or `None` when creating a new one.
    pub target: Option<ShapeId>,
    /// Anchor position for a newly created text shape.
    pub position: Point,
    /// Content at session start, for the host's input field.
    pub initial_content: String,
}

/// Drives a [`Document`] from host pointer and keyboard events.
///
/// The editor is single-threaded and event-driven: each event is
/// processed synchronously in delivery order, moving an explicit state
/// machine between idle, drawing, dragging, resizing and rotating.
pub struct Editor {
    document: Document,
    tools: ToolManager,
    hit_config: HitConfig,
    interaction: Interaction,
    text_session: Option<TextSession>,
    clicks: ClickTracker,
    events: Vec<EditorEvent>,
}

impl Editor {
    /// Create an editor over an empty document.
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// Create an editor over an existing document.
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            tools: ToolManager::new(),
            hit_config: HitConfig::default(),
            interaction: Interaction::Idle,
            text_session: None,
            clicks: ClickTracker::new(),
            events: Vec::new(),
        }
    }

    /// The document being edited.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The active pointer interaction.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The active tool.
    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// The draft shape of an in-progress draw gesture.
    pub fn preview(&self) -> Option<Shape> {
        self.tools.preview_shape()
    }

    /// The open text edit session, if any.
    pub fn text_session(&self) -> Option<&TextSession> {
        self.text_session.as_ref()
    }

    /// Distance thresholds used for hit-testing and handles.
    pub fn hit_config(&self) -> &HitConfig {
        &self.hit_config
    }

    /// Replace the hit-testing thresholds.
    pub fn set_hit_config(&mut self, config: HitConfig) {
        self.hit_config = config;
    }

    /// The style applied to newly created shapes.
    pub fn style(&self) -> &ShapeStyle {
        &self.tools.current_style
    }

    /// Set the style applied to newly created shapes.
    pub fn set_style(&mut self, style: ShapeStyle) {
        self.tools.current_style = style;
    }

    /// Drain the queued events for the host.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Switch the active tool, aborting any interaction in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tools.current_tool == tool {
            return;
        }
        self.reset_interaction();
        self.tools.set_tool(tool);
        log::debug!("tool {tool:?}");
        self.events.push(EditorEvent::ToolChanged(tool));
    }

    /// Select a shape by id, replacing any previous selection.
    pub fn select(&mut self, id: ShapeId) -> Result<(), DocumentError> {
        if self.document.selected() == Some(id) {
            return Ok(());
        }
        self.document.select(id)?;
        log::debug!("select {id}");
        self.events.push(EditorEvent::SelectionChanged(Some(id)));
        Ok(())
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.set_selection(None);
    }

    /// Delete the selected shape, if any.
    pub fn delete_selected(&mut self) {
        if let Some(shape) = self.document.delete_selected() {
            self.events.push(EditorEvent::ShapeRemoved(shape.id()));
            self.events.push(EditorEvent::SelectionChanged(None));
        }
    }

    /// Remove every shape and reset the interaction state.
    pub fn clear(&mut self) {
        let had_selection = self.document.selected().is_some();
        self.reset_interaction();
        self.document.clear();
        if had_selection {
            self.events.push(EditorEvent::SelectionChanged(None));
        }
        self.events.push(EditorEvent::CanvasCleared);
    }

    /// Resize the canvas. Dimensions must be finite and at least 1x1.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), DocumentError> {
        self.document.set_canvas_size(width, height)?;
        self.events
            .push(EditorEvent::CanvasResized(self.document.canvas_size()));
        Ok(())
    }

    /// Abort the active interaction, restoring pre-interaction geometry.
    /// The host calls this on Escape or focus loss.
    pub fn cancel(&mut self) {
        self.reset_interaction();
    }

    /// Feed a pointer event from the host.
    pub fn handle_pointer(&mut self, event: PointerEvent, modifiers: Modifiers) {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_down(position, button);
            }
            PointerEvent::Move { position } => self.pointer_move(position, modifiers),
            PointerEvent::Up { position, button } => self.pointer_up(position, button),
        }
    }

    /// Feed a keyboard event from the host.
    pub fn handle_key(&mut self, event: KeyEvent) {
        let KeyEvent::Pressed(key) = event else {
            return;
        };
        match key.as_str() {
            // While a text session is open the host's input field owns
            // Delete and Backspace.
            "Delete" | "Backspace" => {
                if self.text_session.is_none() {
                    self.delete_selected();
                }
            }
            "Escape" => {
                if self.text_session.is_some() {
                    self.cancel_text_edit();
                } else {
                    self.cancel();
                }
            }
            _ => {}
        }
    }

    fn pointer_down(&mut self, position: Point, button: MouseButton) {
        if !is_finite(position) || self.text_session.is_some() || button != MouseButton::Left {
            return;
        }
        if !matches!(self.interaction, Interaction::Idle) {
            // A pointer-up was missed; discard the stale interaction.
            log::warn!("pointer down during active interaction, resetting");
            self.reset_interaction();
        }
        if !self.document.in_canvas(position) {
            return;
        }
        let double_click = self.clicks.register_click(position);

        // Handles of the selected shape take priority over anything
        // underneath them.
        if let Some(shape) = self.document.selected_shape() {
            if let Some(handle) = selection::resize_handle_at(shape, position, &self.hit_config) {
                log::debug!("resize start {} {handle:?}", shape.id());
                self.interaction = Interaction::Resizing {
                    id: shape.id(),
                    original: shape.clone(),
                    handle,
                };
                return;
            }
            if selection::rotation_corner_at(shape, position, &self.hit_config).is_some() {
                let center = shape.bounds().center();
                log::debug!("rotate start {}", shape.id());
                self.interaction = Interaction::Rotating {
                    id: shape.id(),
                    original: shape.clone(),
                    start_angle: geometry::point_angle(center, position),
                };
                return;
            }
        }

        let hit = self
            .document
            .shape_at_point(position, self.hit_config.stroke_tolerance);

        if double_click {
            if let Some(id) = hit {
                if let Some(Shape::Text(text)) = self.document.get_shape(id) {
                    let session = TextSession {
                        target: Some(id),
                        position: text.position,
                        initial_content: text.content().to_string(),
                    };
                    self.set_selection(None);
                    self.open_text_session(session);
                    return;
                }
            }
        }

        match hit {
            Some(id) => {
                // Press on an outline selects the shape and starts a
                // drag, whichever tool is active.
                self.set_selection(Some(id));
                if let Some(shape) = self.document.get_shape(id) {
                    self.interaction = Interaction::Dragging {
                        id,
                        original: shape.clone(),
                        start: position,
                        moved: false,
                    };
                }
            }
            None => {
                self.set_selection(None);
                match self.tools.current_tool {
                    ToolKind::Text => {
                        self.open_text_session(TextSession {
                            target: None,
                            position,
                            initial_content: String::new(),
                        });
                    }
                    _ => {
                        self.tools.begin(position);
                        self.interaction = Interaction::Drawing;
                    }
                }
            }
        }
    }

    fn pointer_move(&mut self, position: Point, modifiers: Modifiers) {
        if !is_finite(position) || self.text_session.is_some() {
            return;
        }
        // Moves are processed wherever the pointer is; an interaction
        // started on the canvas may leave it and come back.
        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Drawing => self.tools.update(position),
            Interaction::Dragging {
                id,
                original,
                start,
                moved,
            } => {
                *moved = true;
                let delta = position - *start;
                let id = *id;
                if let Some(shape) = self.document.get_shape_mut(id) {
                    *shape = original.clone();
                    shape.translate(delta);
                }
            }
            Interaction::Resizing {
                id,
                original,
                handle,
            } => {
                let id = *id;
                let handle = *handle;
                if let Some(shape) = self.document.get_shape_mut(id) {
                    selection::apply_resize(shape, original, handle, position, modifiers.shift);
                }
            }
            Interaction::Rotating {
                id,
                original,
                start_angle,
            } => {
                let center = original.bounds().center();
                let angle = geometry::point_angle(center, position);
                let rotation =
                    geometry::normalize_degrees(original.rotation() + angle - *start_angle);
                let id = *id;
                if let Some(shape) = self.document.get_shape_mut(id) {
                    shape.set_rotation(rotation);
                }
            }
        }
    }

    fn pointer_up(&mut self, position: Point, button: MouseButton) {
        if !is_finite(position) || self.text_session.is_some() || button != MouseButton::Left {
            return;
        }
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::Drawing => {
                if let Some(shape) = self.tools.end(position) {
                    let id = self.document.add_shape(shape);
                    self.events.push(EditorEvent::ShapeAdded(id));
                }
            }
            Interaction::Dragging { id, moved, .. } => {
                // Dropping after an actual move deselects; a click that
                // never moved leaves the shape selected.
                if moved {
                    if self.document.get_shape(id).is_some() {
                        self.events.push(EditorEvent::ShapeChanged(id));
                    }
                    self.set_selection(None);
                }
            }
            Interaction::Resizing { id, original, .. }
            | Interaction::Rotating { id, original, .. } => {
                let changed = self
                    .document
                    .get_shape(id)
                    .is_some_and(|shape| *shape != original);
                if changed {
                    log::debug!("commit {id}");
                    self.events.push(EditorEvent::ShapeChanged(id));
                }
            }
        }
    }

    /// Commit an open text session with the content the host collected.
    /// Empty or whitespace-only content creates nothing and leaves an
    /// edited shape unchanged.
    pub fn finish_text_edit(&mut self, content: &str) -> Result<(), DocumentError> {
        let Some(session) = self.text_session.take() else {
            return Ok(());
        };
        if content.trim().is_empty() {
            log::debug!("text session discarded, empty content");
            return Ok(());
        }
        match session.target {
            Some(id) => {
                self.document.update_text(id, content.to_string())?;
                self.events.push(EditorEvent::ShapeChanged(id));
            }
            None => {
                let mut text = Text::new(session.position, content.to_string());
                text.style = self.tools.current_style.clone();
                let id = self.document.add_shape(Shape::Text(text));
                self.events.push(EditorEvent::ShapeAdded(id));
            }
        }
        Ok(())
    }

    /// Discard an open text session.
    pub fn cancel_text_edit(&mut self) {
        if self.text_session.take().is_some() {
            log::debug!("text session cancelled");
        }
    }

    /// The affordance under a point: resize handle, rotation ring,
    /// shape outline, or nothing, checked in that order.
    pub fn cursor_for(&self, position: Point) -> Cursor {
        if let Some(shape) = self.document.selected_shape() {
            if let Some(handle) = selection::resize_handle_at(shape, position, &self.hit_config) {
                return match handle {
                    HandleKind::Corner(Corner::TopLeft | Corner::BottomRight) => Cursor::ResizeNwSe,
                    HandleKind::Corner(_) => Cursor::ResizeNeSw,
                    HandleKind::Endpoint(_) => Cursor::Endpoint,
                };
            }
            if selection::rotation_corner_at(shape, position, &self.hit_config).is_some() {
                return Cursor::Rotate;
            }
        }
        if self
            .document
            .shape_at_point(position, self.hit_config.stroke_tolerance)
            .is_some()
        {
            return Cursor::Move;
        }
        Cursor::Default
    }

    fn set_selection(&mut self, id: Option<ShapeId>) {
        if self.document.selected() == id {
            return;
        }
        match id {
            Some(id) => {
                if self.document.select(id).is_err() {
                    return;
                }
            }
            None => self.document.deselect(),
        }
        log::debug!("select {id:?}");
        self.events.push(EditorEvent::SelectionChanged(id));
    }

    fn open_text_session(&mut self, session: TextSession) {
        log::debug!("text session open, target {:?}", session.target);
        self.events.push(EditorEvent::TextSessionOpened {
            target: session.target,
        });
        self.text_session = Some(session);
    }

    fn reset_interaction(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::Drawing => self.tools.cancel(),
            Interaction::Dragging { id, original, .. }
            | Interaction::Resizing { id, original, .. }
            | Interaction::Rotating { id, original, .. } => {
                if let Some(shape) = self.document.get_shape_mut(id) {
                    *shape = original;
                }
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
