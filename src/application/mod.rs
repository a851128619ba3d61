mod config;
mod paint_controller;
mod session;
pub mod export;

pub use config::{SessionConfig, DEFAULT_CELL_SIZE, DEFAULT_EXPORT_FILE, DEFAULT_GRID_SIZE};
pub use paint_controller::{Brush, PaintController};
pub use session::Session;
pub use export::ExportError;
