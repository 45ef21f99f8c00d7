//! SvgPad Core Library
//!
//! Platform-agnostic document model, geometry, and hit-testing for the
//! svgpad drawing engine.

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use config::HitConfig;
pub use document::Document;
pub use error::DocumentError;
pub use geometry::{Corner, Corners};
pub use input::{ClickTracker, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use selection::{Handle, HandleKind, LineEnd, apply_resize, resize_handle_at, resize_handles, rotation_corner_at};
pub use tools::{ToolKind, ToolManager, ToolState};
