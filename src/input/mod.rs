use macroquad::prelude::*;

use crate::application::Session;
use crate::ui::{Button, ControlAction, GridLayout, CONTROL_ACTIONS};

/// Remembers which cell the pointer was last over, so dragging only
/// reports a cell when the pointer actually enters it
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    last_cell: Option<usize>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of pointer state into the session
    pub fn step(
        &mut self,
        session: &mut Session,
        hovered: Option<usize>,
        pressed: bool,
        down: bool,
        released: bool,
    ) {
        if pressed {
            if let Some(index) = hovered {
                if let Err(err) = session.stroke_start(index) {
                    tracing::warn!("Stroke rejected: {}", err);
                }
            }
        } else if down && session.is_stroke_active() && hovered != self.last_cell {
            if let Some(index) = hovered {
                if let Err(err) = session.cell_enter(index) {
                    tracing::warn!("Paint rejected: {}", err);
                }
            }
        }
        self.last_cell = hovered;

        if released || !down {
            session.stroke_end();
        }
    }
}

/// Handle mouse painting on the grid
pub fn handle_mouse_paint(
    session: &mut Session,
    tracker: &mut PointerTracker,
    layout: &GridLayout,
    mouse_pos: (f32, f32),
) {
    tracker.step(
        session,
        layout.cell_at(mouse_pos),
        is_mouse_button_pressed(MouseButton::Left),
        is_mouse_button_down(MouseButton::Left),
        is_mouse_button_released(MouseButton::Left),
    );
}

/// Run one control action against the session, logging failures
pub fn perform(session: &mut Session, action: ControlAction) {
    let result = match action {
        ControlAction::Undo => session.undo().map(|_| ()).map_err(|e| e.to_string()),
        ControlAction::Redo => session.redo().map(|_| ()).map_err(|e| e.to_string()),
        ControlAction::Eraser => {
            session.toggle_eraser();
            Ok(())
        }
        ControlAction::Reset => session.reset().map_err(|e| e.to_string()),
        ControlAction::Download => {
            let path = session.config().export_path.clone();
            session.export_png(&path).map_err(|e| e.to_string())
        }
    };

    if let Err(err) = result {
        tracing::warn!("{} failed: {}", action.label(), err);
    }
}

/// Keyboard shortcuts
pub fn process_keyboard_input(session: &mut Session) {
    const SHORTCUTS: [(KeyCode, ControlAction); 4] = [
        (KeyCode::Z, ControlAction::Undo),
        (KeyCode::Y, ControlAction::Redo),
        (KeyCode::E, ControlAction::Eraser),
        (KeyCode::S, ControlAction::Download),
    ];

    SHORTCUTS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| perform(session, *action));
}

/// Process button clicks; buttons are laid out in [`CONTROL_ACTIONS`] order
pub fn process_button_clicks(session: &mut Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .zip(CONTROL_ACTIONS)
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .for_each(|(_, action)| perform(session, action));
}
