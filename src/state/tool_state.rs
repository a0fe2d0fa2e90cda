//! Press/drag state of the active tool.
//!
//! ```text
//!  ┌──────┐  press (draggable)   ┌──────────┐
//!  │ Idle ├─────────────────────►│ Dragging │
//!  │      │◄─────────────────────┤ { start }│
//!  └──────┘  release / tool swap └──────────┘
//! ```
//!
//! Immediate tools never leave `Idle`; they are driven by the
//! `is_applied` flag on the engine instead.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolState {
    #[default]
    Idle,
    /// A shape tool is being dragged from `start`
    Dragging { start: Point },
}

impl ToolState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ToolState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, ToolState::Dragging { .. })
    }

    /// Where the current drag started, if any
    pub fn start_point(&self) -> Option<Point> {
        match self {
            ToolState::Dragging { start } => Some(*start),
            ToolState::Idle => None,
        }
    }
}
