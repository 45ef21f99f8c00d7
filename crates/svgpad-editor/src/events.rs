//! Notifications the editor queues for its host.

use kurbo::Size;
use svgpad_core::shapes::ShapeId;
use svgpad_core::tools::ToolKind;

/// A committed change the host should react to, drained with
/// [`Editor::take_events`](crate::Editor::take_events).
///
/// In-flight geometry (draft previews, a shape mid-drag) is not
/// reported here; the host reads the document directly while an
/// interaction is active. A `ShapeChanged` arrives once on commit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The selection changed to the given shape, or to nothing.
    SelectionChanged(Option<ShapeId>),
    /// A shape was added to the document.
    ShapeAdded(ShapeId),
    /// A shape's geometry or content changed.
    ShapeChanged(ShapeId),
    /// A shape was removed from the document.
    ShapeRemoved(ShapeId),
    /// All shapes were removed.
    CanvasCleared,
    /// The canvas was resized.
    CanvasResized(Size),
    /// The active tool changed.
    ToolChanged(ToolKind),
    /// A text edit session opened; the host should show its input UI.
    TextSessionOpened {
        /// The text shape being edited, or `None` for a new one.
        target: Option<ShapeId>,
    },
}
