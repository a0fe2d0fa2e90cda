use crate::command::{History, Snapshot};
use crate::config::PaintOptions;
use crate::error::PaintResult;
use crate::event::{EventBus, EventHandler, PaintEvent};
use crate::geometry::Point;
use crate::grid::{Grid, PaletteIndex};
use crate::palette::Palette;
use crate::state::{FrozenState, ToolState};
use crate::tools::{Tool, ToolInput};
use egui::Color32;

/// A palette-indexed painting together with its tools and undo history.
///
/// The input layer keeps the cursor up to date with [`GridPaint::set_cursor`]
/// and drives gestures through `pointer_down` / `pointer_move` /
/// `pointer_up`. The rendering layer reads the grid, the palette and
/// [`GridPaint::preview`], and can listen for [`PaintEvent`]s.
///
/// Everything runs synchronously on the caller's thread.
#[derive(Debug)]
pub struct GridPaint {
    grid: Grid,
    palette: Palette,
    colour: PaletteIndex,
    cursor: Point,
    tool: Tool,
    tool_state: ToolState,
    /// True while the pointer is held down with an immediate tool
    is_applied: bool,
    history: History,
    /// Grid contents at the start of the gesture in progress
    pending: Option<Snapshot>,
    event_bus: EventBus,
}

impl Default for GridPaint {
    fn default() -> Self {
        Self::new(PaintOptions::default())
    }
}

impl GridPaint {
    pub fn new(options: PaintOptions) -> Self {
        let height = options.height();
        Self {
            grid: Grid::new(options.width, height, options.background_colour),
            palette: options.palette,
            colour: 0,
            cursor: Point::new(-1, -1),
            tool: Tool::default(),
            tool_state: ToolState::Idle,
            is_applied: false,
            history: History::new(options.history_limit),
            pending: None,
            event_bus: EventBus::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Option<PaletteIndex> {
        self.grid.get(x, y)
    }

    /// Writes a cell directly, outside of any gesture
    pub fn set_cell(&mut self, x: i32, y: i32, value: PaletteIndex) -> bool {
        self.grid.set(x, y, value)
    }

    /// Palette colour of a cell; `None` when out of bounds or the index has no colour
    pub fn colour_at(&self, x: i32, y: i32) -> Option<Color32> {
        self.grid.get(x, y).and_then(|index| self.palette.color(index))
    }

    pub fn colour(&self) -> PaletteIndex {
        self.colour
    }

    pub fn set_colour(&mut self, colour: PaletteIndex) {
        self.colour = colour;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects a tool. A drag in progress is abandoned without painting;
    /// a held immediate tool is released and its gesture committed.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool_state.is_dragging() {
            log::debug!("Abandoning {} drag for {}", self.tool, tool);
        }
        if self.is_applied {
            self.is_applied = false;
            self.commit_gesture();
        }
        self.tool = tool;
        self.tool_state = ToolState::Idle;
    }

    pub fn set_tool_by_name(&mut self, name: &str) -> PaintResult<()> {
        self.set_tool(name.parse()?);
        Ok(())
    }

    pub fn is_draggable_tool(&self) -> bool {
        self.tool.is_draggable()
    }

    pub fn tool_state(&self) -> ToolState {
        self.tool_state
    }

    pub fn is_applied(&self) -> bool {
        self.is_applied
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.event_bus.subscribe(Box::new(handler));
    }

    /// Resizes the painting, keeping the top-left region.
    /// History is kept; edits that fall outside the new size are skipped on undo.
    pub fn resize(&mut self, width: usize, height: usize) {
        log::info!(
            "Resizing painting from {}x{} to {}x{}",
            self.grid.width(),
            self.grid.height(),
            width,
            height
        );
        self.grid.resize(width, height);
    }

    /// Resets every cell to the background index and forgets all history
    pub fn clear(&mut self) {
        log::info!("Clearing painting");
        self.grid.clear();
        self.history.clear();
        self.pending = None;
    }

    fn begin_gesture(&mut self) {
        self.pending = Some(self.history.begin_gesture(&self.grid));
    }

    fn commit_gesture(&mut self) {
        if let Some(before) = self.pending.take() {
            self.history.commit_gesture(&before, &self.grid);
        }
    }

    /// Applies a one-shot edit as its own history entry, independent of any
    /// pointer gesture in progress
    fn record_edit(&mut self, edit: impl FnOnce(&mut Grid)) {
        let before = self.history.begin_gesture(&self.grid);
        edit(&mut self.grid);
        self.history.commit_gesture(&before, &self.grid);
    }

    /// Runs the active tool once at the cursor
    pub fn action(&mut self) {
        let input = ToolInput {
            colour: self.colour,
            cursor: self.cursor,
            start: self.tool_state.start_point(),
        };
        self.tool.apply(&mut self.grid, &input);
        self.event_bus.emit(PaintEvent::Action);
    }

    /// Sets the pointer-held flag, or toggles it when `None`.
    /// The tool runs once whenever the flag ends up set.
    pub fn apply_tool(&mut self, applied: Option<bool>) {
        self.is_applied = applied.unwrap_or(!self.is_applied);
        if self.is_applied {
            self.action();
        }
        self.event_bus.emit(PaintEvent::ApplyTool {
            applied: self.is_applied,
        });
    }

    /// Starts a shape drag at the cursor
    pub fn start_tool_drag(&mut self) {
        self.tool_state = ToolState::Dragging { start: self.cursor };
    }

    /// Paints the dragged shape from its start to the cursor and returns to idle
    pub fn end_tool_drag(&mut self) {
        self.action();
        self.tool_state = ToolState::Idle;
        self.event_bus.emit(PaintEvent::ApplyTool { applied: true });
    }

    /// Pointer pressed at the cursor
    pub fn pointer_down(&mut self) {
        if self.is_draggable_tool() {
            self.start_tool_drag();
        } else {
            self.begin_gesture();
            self.apply_tool(Some(true));
        }
    }

    /// Pointer moved; call after updating the cursor
    pub fn pointer_move(&mut self) {
        if self.is_applied {
            self.action();
        }
        self.event_bus.emit(PaintEvent::Move);
    }

    /// Pointer released at the cursor; commits the gesture to history
    pub fn pointer_up(&mut self) {
        if self.is_draggable_tool() {
            if self.tool_state.is_dragging() {
                self.begin_gesture();
                self.end_tool_drag();
                self.commit_gesture();
            }
        } else if self.is_applied {
            self.apply_tool(Some(false));
            self.commit_gesture();
        }
    }

    /// Cells the dragged shape would cover if released now, unclipped.
    /// Empty unless a shape tool is being dragged.
    pub fn preview(&self) -> Vec<Point> {
        self.tool_state
            .start_point()
            .and_then(|start| self.tool.shape_points(start, self.cursor))
            .unwrap_or_default()
    }

    pub fn undo(&mut self) {
        self.history.undo(&mut self.grid);
        self.event_bus.emit(PaintEvent::Undo);
    }

    pub fn redo(&mut self) {
        self.history.redo(&mut self.grid);
        self.event_bus.emit(PaintEvent::Redo);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Rotates the painting with wrap-around and records it as one gesture
    pub fn shift(&mut self, rows: i32, cols: i32) {
        self.record_edit(|grid| grid.rotate(rows, cols));
        self.event_bus.emit(PaintEvent::Shift { rows, cols });
    }

    /// Swaps every cell of one colour for another, as one gesture
    pub fn replace(&mut self, from: PaletteIndex, to: PaletteIndex) {
        if from == to {
            return;
        }
        self.record_edit(|grid| {
            let count = grid.replace_all(from, to);
            log::debug!("Replaced {} cells of colour {} with {}", count, from, to);
        });
    }

    /// Deep copy of the painting suitable for serialisation
    pub fn freeze_state(&self) -> FrozenState {
        FrozenState {
            width: self.grid.width(),
            height: self.grid.height(),
            painting: self.grid.to_rows(),
        }
    }

    /// Replaces the painting with a frozen one and forgets all history.
    ///
    /// The state is validated first; a malformed one is rejected and
    /// leaves the engine untouched.
    pub fn thaw_state(&mut self, state: FrozenState) -> PaintResult<()> {
        if let Err(err) = state.validate() {
            log::warn!("Refusing to thaw malformed state: {}", err);
            return Err(err);
        }

        log::info!("Thawing {}x{} painting", state.width, state.height);
        self.grid = Grid::from_rows(
            state.width,
            state.height,
            self.grid.background(),
            &state.painting,
        );
        self.history.clear();
        self.pending = None;
        self.is_applied = false;
        self.tool_state = ToolState::Idle;
        Ok(())
    }
}
