#![warn(clippy::all, rust_2018_idioms)]

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod fill;
pub mod geometry;
pub mod grid;
pub mod paint;
pub mod palette;
pub mod state;
pub mod tools;

pub use command::{Change, History, HistoryEntry, Snapshot, MAX_HISTORY};
pub use config::PaintOptions;
pub use error::{PaintError, PaintResult};
pub use event::{EventBus, EventHandler, PaintEvent};
pub use fill::flood_fill;
pub use geometry::Point;
pub use grid::{Grid, PaletteIndex};
pub use paint::GridPaint;
pub use palette::Palette;
pub use state::{FrozenState, ToolState};
pub use tools::Tool;
