use crate::domain::{Color, GridError, UndoPolicy, DEFAULT_HISTORY_DEPTH};

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_CELL_SIZE: usize = 20;
pub const DEFAULT_EXPORT_FILE: &str = "pixel-art.png";

/// Settings a session is created (and reset) from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Pixels per cell in exported images
    pub cell_size: usize,
    pub history_depth: usize,
    pub undo_policy: UndoPolicy,
    /// Export color for unset cells
    pub background: Color,
    pub initial_color: Color,
    pub pattern_filled: Color,
    pub pattern_empty: Color,
    pub export_path: String,
}

impl SessionConfig {
    /// Square grid of `size` x `size`, everything else default
    pub fn with_grid_size(size: usize) -> Self {
        Self {
            grid_width: size,
            grid_height: size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.cell_size == 0 {
            return Err(GridError::InvalidConfig("cell size must be positive".into()));
        }
        if self.history_depth == 0 {
            return Err(GridError::InvalidConfig("history depth must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            history_depth: DEFAULT_HISTORY_DEPTH,
            undo_policy: UndoPolicy::default(),
            background: Color::WHITE,
            initial_color: Color::BLACK,
            pattern_filled: Color::BLACK,
            pattern_empty: Color::WHITE,
            export_path: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}
