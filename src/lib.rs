// Domain layer - grid state, history, patterns, rasterization
pub mod domain;

// Application layer - session, strokes, export
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Color, GridError, GridModel, HistoryManager, PatternLibrary, Snapshot, UndoPolicy};
pub use application::{Session, SessionConfig};
pub use ui::Button;
