use thiserror::Error;

/// Errors surfaced by the painting engine.
///
/// Drawing never fails: out-of-bounds writes are clipped and empty
/// operations are no-ops. Only parsing names and restoring state can go wrong.
#[derive(Debug, Error)]
pub enum PaintError {
    /// A tool name did not match any known tool
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A row of a frozen painting has the wrong number of cells
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedPainting {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The painting does not have `height` rows
    #[error("Painting has {rows} rows but the state claims {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        rows: usize,
    },

    #[error("Failed to (de)serialize state: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for fallible engine operations
pub type PaintResult<T> = Result<T, PaintError>;
