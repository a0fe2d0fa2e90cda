/// Notifications for the rendering/input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintEvent {
    /// The active tool ran once
    Action,
    /// The pointer moved
    Move,
    /// The pointer-held flag changed, or a drag ended
    ApplyTool { applied: bool },
    /// An undo was requested (emitted even if nothing was undone)
    Undo,
    /// A redo was requested (emitted even if nothing was redone)
    Redo,
    /// The grid was rotated
    Shift { rows: i32, cols: i32 },
}
