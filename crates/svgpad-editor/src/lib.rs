//! SvgPad Editor
//!
//! The interaction layer over a canvas document: dispatches pointer and
//! keyboard events into drawing, dragging, resizing, rotating and text
//! editing, and reports committed changes back to the host.

mod cursor;
mod editor;
mod events;

pub use cursor::Cursor;
pub use editor::{Editor, Interaction, TextSession};
pub use events::EditorEvent;
