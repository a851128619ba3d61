mod error;
mod color;
mod cell;
mod grid;
mod undo_policy;
mod history;
mod patterns;
pub mod rasterizer;

pub use error::GridError;
pub use color::{Color, PaletteEntry, PALETTE};
pub use cell::Cell;
pub use grid::{GridModel, Snapshot};
pub use undo_policy::UndoPolicy;
pub use history::{HistoryManager, Restore, DEFAULT_HISTORY_DEPTH};
pub use patterns::{Pattern, PatternLibrary, presets};
pub use rasterizer::{PixelBuffer, rasterize, rasterize_parallel};
