use crate::domain::{Cell, Color, GridError, GridModel, HistoryManager};

/// Current tool selection. The controller reads it but never changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub color: Color,
    pub eraser: bool,
}

impl Brush {
    pub const fn new(color: Color) -> Self {
        Self { color, eraser: false }
    }

    /// The cell value a paint action writes
    pub const fn cell(&self) -> Cell {
        if self.eraser {
            Cell::Unset
        } else {
            Cell::Painted(self.color)
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

/// PaintController turns pointer strokes into grid writes.
/// One history entry is recorded when a stroke starts; dragging across
/// further cells paints them without recording anything.
#[derive(Clone, Debug, Default)]
pub struct PaintController {
    stroke_active: bool,
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_stroke_active(&self) -> bool {
        self.stroke_active
    }

    /// Pointer pressed on `index`. The index is validated before anything is recorded.
    pub fn on_stroke_start(
        &mut self,
        index: usize,
        grid: &mut GridModel,
        history: &mut HistoryManager,
        brush: &Brush,
    ) -> Result<(), GridError> {
        grid.get_cell(index)?;

        if !self.stroke_active {
            history.record_before_stroke(grid.snapshot());
            self.stroke_active = true;
            tracing::debug!(index, eraser = brush.eraser, "stroke started");
        }
        self.paint(index, grid, brush)
    }

    /// Pointer moved onto `index`; paints only while a stroke is held
    pub fn on_cell_enter(
        &mut self,
        index: usize,
        grid: &mut GridModel,
        brush: &Brush,
    ) -> Result<(), GridError> {
        if !self.stroke_active {
            return Ok(());
        }
        self.paint(index, grid, brush)
    }

    pub fn on_stroke_end(&mut self) {
        if self.stroke_active {
            tracing::debug!("stroke ended");
        }
        self.stroke_active = false;
    }

    pub fn paint(&self, index: usize, grid: &mut GridModel, brush: &Brush) -> Result<(), GridError> {
        grid.set_cell(index, brush.cell())
    }
}
