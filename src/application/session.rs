use std::path::Path;

use crate::domain::{
    Color, GridError, GridModel, HistoryManager, PatternLibrary, PixelBuffer, Restore,
    rasterizer,
};
use super::{Brush, ExportError, PaintController, SessionConfig, export};

/// Session is the single context object behind one drawing window.
/// It owns the grid, its history and the tool selection, so independent
/// sessions never share state.
#[derive(Clone, Debug)]
pub struct Session {
    grid: GridModel,
    history: HistoryManager,
    controller: PaintController,
    brush: Brush,
    patterns: PatternLibrary,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            grid: GridModel::new(config.grid_width, config.grid_height)?,
            history: HistoryManager::with_capacity(config.history_depth, config.undo_policy),
            controller: PaintController::new(),
            brush: Brush::new(config.initial_color),
            patterns: PatternLibrary::builtin(),
            config,
        })
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_stroke_active(&self) -> bool {
        self.controller.is_stroke_active()
    }

    pub fn stroke_start(&mut self, index: usize) -> Result<(), GridError> {
        self.controller
            .on_stroke_start(index, &mut self.grid, &mut self.history, &self.brush)
    }

    pub fn cell_enter(&mut self, index: usize) -> Result<(), GridError> {
        self.controller.on_cell_enter(index, &mut self.grid, &self.brush)
    }

    pub fn stroke_end(&mut self) {
        self.controller.on_stroke_end();
    }

    /// Undo one stroke; returns false when there was nothing to undo
    pub fn undo(&mut self) -> Result<bool, GridError> {
        self.controller.on_stroke_end();
        match self.history.undo(self.grid.snapshot()) {
            Some(restore) => self.apply_restore(restore).map(|_| true),
            None => Ok(false),
        }
    }

    /// Redo one undone stroke; returns false when there was nothing to redo
    pub fn redo(&mut self) -> Result<bool, GridError> {
        self.controller.on_stroke_end();
        match self.history.redo(self.grid.snapshot()) {
            Some(restore) => self.apply_restore(restore).map(|_| true),
            None => Ok(false),
        }
    }

    /// Rebuild the grid at a new size. Ends any active stroke; history of
    /// the old size is dropped since it can no longer be restored. Rejected
    /// dimensions leave the grid, history and stroke untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        self.grid.resize(width, height)?;
        self.controller.on_stroke_end();
        self.history.clear();
        tracing::info!("Grid resized to {}x{}", width, height);
        Ok(())
    }

    /// Overwrite the grid with a preset pattern as one undoable step
    pub fn apply_pattern(&mut self, name: &str) -> Result<(), GridError> {
        let description = match self.patterns.get(name) {
            Some(pattern) => pattern.description,
            None => return Err(GridError::UnknownPattern(name.to_string())),
        };
        self.controller.on_stroke_end();

        let before = self.grid.snapshot();
        self.patterns.apply(
            name,
            &mut self.grid,
            self.config.pattern_filled,
            self.config.pattern_empty,
        )?;
        self.history.record_before_stroke(before);
        tracing::info!("Applied pattern {} ({})", name, description);
        Ok(())
    }

    /// Picking a color leaves eraser mode
    pub fn select_color(&mut self, color: Color) {
        self.brush.color = color;
        self.brush.eraser = false;
    }

    pub fn toggle_eraser(&mut self) -> bool {
        self.brush.eraser = !self.brush.eraser;
        self.brush.eraser
    }

    /// Start over from the session's configuration
    pub fn reset(&mut self) -> Result<(), GridError> {
        *self = Self::new(self.config.clone())?;
        tracing::info!("Session reset");
        Ok(())
    }

    /// Rasterize the current grid at the configured export scale
    pub fn rasterize(&self) -> Result<PixelBuffer, GridError> {
        let (width, height) = self.grid.dimensions();
        rasterizer::rasterize_with_background(
            &self.grid.snapshot(),
            width,
            height,
            self.config.cell_size,
            self.config.background,
        )
    }

    pub fn export_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let pixels = self.rasterize()?;
        export::save_png(&pixels, path)
    }

    fn apply_restore(&mut self, restore: Restore) -> Result<(), GridError> {
        match restore {
            Restore::Snapshot(snapshot) => self.grid.restore(&snapshot),
            Restore::Blank => {
                self.grid.clear();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Snapshot, UndoPolicy};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const RED: Color = Color::rgb(255, 0, 0);

    fn session() -> Session {
        Session::new(SessionConfig::with_grid_size(5)).unwrap()
    }

    fn legacy_session() -> Session {
        Session::new(SessionConfig {
            undo_policy: UndoPolicy::Legacy,
            ..SessionConfig::with_grid_size(5)
        })
        .unwrap()
    }

    fn click(session: &mut Session, index: usize) {
        session.stroke_start(index).unwrap();
        session.stroke_end();
    }

    /// A random stroke: a start cell followed by a few dragged cells
    fn random_stroke(session: &mut Session, rng: &mut StdRng) {
        let len = session.grid().len();
        if rng.random_bool(0.2) {
            session.toggle_eraser();
        } else {
            session.select_color(Color::rgb(rng.random(), rng.random(), rng.random()));
        }
        session.stroke_start(rng.random_range(0..len)).unwrap();
        for _ in 0..rng.random_range(0..6) {
            session.cell_enter(rng.random_range(0..len)).unwrap();
        }
        session.stroke_end();
    }

    #[test]
    fn test_new_session_defaults() {
        let s = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(s.grid().dimensions(), (20, 20));
        assert_eq!(s.brush().color, Color::BLACK);
        assert!(!s.brush().eraser);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Session::new(SessionConfig::with_grid_size(0)).is_err());
    }

    #[test]
    fn test_undo_after_one_stroke_restores_pre_stroke() {
        let mut s = session();
        click(&mut s, 0);
        s.select_color(RED);
        let before = s.grid().clone();

        s.stroke_start(1).unwrap();
        s.cell_enter(2).unwrap();
        s.stroke_end();

        assert!(s.undo().unwrap());
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut s = session();
        s.grid.set_cell(3, Cell::Painted(RED)).unwrap();
        let before = s.grid().clone();
        assert!(!s.undo().unwrap());
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut s = session();
            for _ in 0..rng.random_range(1..30) {
                random_stroke(&mut s, &mut rng);
            }
            for _ in 0..rng.random_range(0..5) {
                s.undo().unwrap();
            }

            let before = s.grid().clone();
            if s.undo().unwrap() {
                assert!(s.redo().unwrap());
            }
            assert_eq!(s.grid(), &before);
        }
    }

    #[test]
    fn test_oldest_of_twenty_one_strokes_is_lost() {
        let mut s = session();
        let mut states = vec![s.grid().clone()];
        for i in 0..21 {
            s.select_color(Color::rgb(i as u8 * 10, 0, 0));
            click(&mut s, i);
            states.push(s.grid().clone());
        }

        // The 20 most recent pre-stroke states come back in reverse order
        for expected in states[1..21].iter().rev() {
            assert!(s.undo().unwrap());
            assert_eq!(s.grid(), expected);
        }
        assert!(!s.undo().unwrap());
        assert_ne!(s.grid(), &states[0]);
    }

    #[test]
    fn test_new_stroke_after_undo_clears_redo() {
        let mut s = session();
        click(&mut s, 0);
        click(&mut s, 1);
        s.undo().unwrap();
        click(&mut s, 4);

        let before = s.grid().clone();
        assert!(!s.redo().unwrap());
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn test_legacy_undo_past_oldest_clears_grid() {
        let mut s = legacy_session();
        click(&mut s, 0);
        click(&mut s, 1);

        // Legacy undo jumps to the entry below the popped one
        s.undo().unwrap();
        assert_eq!(s.grid().painted_count(), 0);
        s.undo().unwrap();
        assert_eq!(s.grid().painted_count(), 0);
        assert!(!s.undo().unwrap());
    }

    #[test]
    fn test_legacy_redo_replays_pre_stroke_snapshot() {
        let mut s = legacy_session();
        click(&mut s, 0);
        click(&mut s, 1);
        s.undo().unwrap();

        assert!(s.redo().unwrap());
        // The replayed entry is the state before the second click
        assert_eq!(s.grid().painted_count(), 1);
        assert_eq!(s.grid().get_cell(0), Ok(Cell::Painted(Color::BLACK)));
    }

    #[test]
    fn test_resize_ends_stroke_and_clears_history() {
        let mut s = session();
        s.stroke_start(0).unwrap();
        s.resize(3, 4).unwrap();

        assert!(!s.is_stroke_active());
        assert!(!s.history().can_undo());
        assert_eq!(s.grid().snapshot(), Snapshot::blank(12));

        // A drag continuing after the resize paints nothing
        s.cell_enter(1).unwrap();
        assert_eq!(s.grid().painted_count(), 0);
    }

    #[test]
    fn test_rejected_resize_keeps_stroke() {
        let mut s = session();
        s.stroke_start(0).unwrap();
        assert!(s.resize(0, 3).is_err());

        assert!(s.is_stroke_active());
        assert!(s.history().can_undo());
        s.cell_enter(1).unwrap();
        assert_eq!(s.grid().painted_count(), 2);
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut s = session();
        assert!(s.resize(0, 0).is_err());
        assert_eq!(s.grid().dimensions(), (5, 5));
    }

    #[test]
    fn test_apply_pattern_is_undoable() {
        let mut s = Session::new(SessionConfig::default()).unwrap();
        click(&mut s, 0);
        let before = s.grid().clone();

        s.apply_pattern("heart").unwrap();
        assert_eq!(s.grid().painted_count(), 400);

        s.undo().unwrap();
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn test_unknown_pattern_records_nothing() {
        let mut s = session();
        let result = s.apply_pattern("dragon");
        assert_eq!(result, Err(GridError::UnknownPattern("dragon".into())));
        assert!(!s.history().can_undo());
    }

    #[test]
    fn test_select_color_leaves_eraser_mode() {
        let mut s = session();
        assert!(s.toggle_eraser());
        s.select_color(RED);
        assert!(!s.brush().eraser);
        assert_eq!(s.brush().color, RED);
    }

    #[test]
    fn test_reset_restores_config_state() {
        let mut s = session();
        click(&mut s, 0);
        s.select_color(RED);
        s.resize(8, 8).unwrap();
        s.reset().unwrap();

        assert_eq!(s.grid().dimensions(), (5, 5));
        assert_eq!(s.grid().painted_count(), 0);
        assert_eq!(s.brush().color, Color::BLACK);
        assert!(!s.history().can_undo());
    }

    #[test]
    fn test_rasterize_uses_config_scale() {
        let mut s = session();
        click(&mut s, 0);
        let pixels = s.rasterize().unwrap();
        assert_eq!(pixels.dimensions(), (100, 100));
        assert_eq!(pixels.get_pixel(19, 19).0, [0, 0, 0, 255]);
        assert_eq!(pixels.get_pixel(20, 0).0, [255, 255, 255, 255]);
    }
}
