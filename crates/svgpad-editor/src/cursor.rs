//! Cursor feedback for pointer hover.

/// The affordance under the pointer, for the host to map to a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Nothing interactive under the pointer.
    #[default]
    Default,
    /// Over a shape outline; pressing starts a drag.
    Move,
    /// Over a top-left or bottom-right resize handle.
    ResizeNwSe,
    /// Over a top-right or bottom-left resize handle.
    ResizeNeSw,
    /// Over a line endpoint handle.
    Endpoint,
    /// Inside a rotation ring.
    Rotate,
}

impl Cursor {
    /// The CSS cursor keyword for this affordance.
    pub fn css_name(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Move => "move",
            Cursor::ResizeNwSe => "nwse-resize",
            Cursor::ResizeNeSw => "nesw-resize",
            Cursor::Endpoint => "pointer",
            Cursor::Rotate => "alias",
        }
    }
}
