mod persistence;
mod tool_state;

pub use persistence::FrozenState;
pub use tool_state::ToolState;
