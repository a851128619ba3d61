use clap::{Parser, ValueEnum};
use macroquad::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixel_art::{
    Session, SessionConfig, UndoPolicy,
    application::{DEFAULT_CELL_SIZE, DEFAULT_EXPORT_FILE, DEFAULT_GRID_SIZE},
    domain::{Color as GridColor, DEFAULT_HISTORY_DEPTH, PALETTE},
    input::{self, PointerTracker},
    rendering,
    ui::{self, Dropdown, GridLayout, Palette, GRID_SIZES},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Standard,
    Legacy,
}

impl From<PolicyArg> for UndoPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Standard => UndoPolicy::Standard,
            PolicyArg::Legacy => UndoPolicy::Legacy,
        }
    }
}

/// Pixel-art drawing tool
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Cells per side of the starting grid
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: usize,

    /// Number of strokes that can be undone
    #[arg(long, default_value_t = DEFAULT_HISTORY_DEPTH)]
    history_depth: usize,

    #[arg(long, value_enum, default_value_t = PolicyArg::Standard)]
    undo_policy: PolicyArg,

    /// Starting brush color: a palette name or #rgb / #rrggbb
    #[arg(long, default_value = "black")]
    color: GridColor,

    /// Exported color of unpainted cells
    #[arg(long, default_value = "white")]
    background: GridColor,

    /// Where the Download button writes the PNG
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    output: String,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        SessionConfig {
            cell_size: self.cell_size,
            history_depth: self.history_depth,
            undo_policy: self.undo_policy.into(),
            initial_color: self.color,
            background: self.background,
            export_path: self.output,
            ..SessionConfig::with_grid_size(self.grid_size)
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixel_art=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Pixel Art".to_owned(),
        window_width: 900,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let config = Cli::parse().into_config();

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return;
        }
    };
    tracing::info!(
        "Pixel art session started with a {}x{} grid",
        session.grid().width(),
        session.grid().height()
    );

    let px = ui::panel_x() + 10.0;
    let width = ui::PANEL_WIDTH - 20.0;

    let size_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut size_dropdown = Dropdown::new(px, 20.0, width, "Grid Size", size_items);
    if let Some(i) = GRID_SIZES.iter().position(|(size, _)| *size == session.grid().width()) {
        size_dropdown.set_selected(i);
    }

    let pattern_names = session.patterns().names();
    let pattern_items: Vec<String> = pattern_names.iter().map(|n| n.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, 75.0, width, "Pattern", pattern_items);

    let mut palette = Palette::new(px, 132.0, 6, &PALETTE);
    let mut tracker = PointerTracker::new();

    loop {
        let mouse_pos = mouse_position();

        let px = ui::panel_x() + 10.0;
        size_dropdown.set_position(px, 20.0);
        pattern_dropdown.set_position(px, 75.0);
        palette.set_position(px, 132.0);

        let buttons = ui::create_buttons(session.brush().eraser);

        // An open dropdown owns the click; the other one and the canvas ignore it
        let size_was_open = size_dropdown.is_open();
        let pattern_was_open = pattern_dropdown.is_open();
        if !pattern_was_open {
            if let Some(i) = size_dropdown.update(mouse_pos) {
                let size = GRID_SIZES[i].0;
                if let Err(err) = session.resize(size, size) {
                    tracing::warn!("Resize rejected: {}", err);
                }
            }
        }
        if !size_was_open && !size_dropdown.is_open() {
            if let Some(i) = pattern_dropdown.update(mouse_pos) {
                if let Err(err) = session.apply_pattern(pattern_names[i]) {
                    tracing::warn!("Pattern rejected: {}", err);
                }
            }
        }

        let (columns, rows) = session.grid().dimensions();
        let layout = GridLayout::for_screen(columns, rows);
        let menu_open = size_was_open
            || pattern_was_open
            || size_dropdown.is_open()
            || pattern_dropdown.is_open();

        if !menu_open {
            if let Some(color) = palette.clicked(mouse_pos) {
                session.select_color(color);
            }
            input::process_button_clicks(&mut session, &buttons, mouse_pos);
            input::handle_mouse_paint(&mut session, &mut tracker, &layout, mouse_pos);
            input::process_keyboard_input(&mut session);
        }

        // Buttons again so the eraser highlight reflects this frame's clicks
        let buttons = ui::create_buttons(session.brush().eraser);
        let layout = GridLayout::for_screen(session.grid().width(), session.grid().height());

        clear_background(Color::from_rgba(60, 60, 60, 255));
        rendering::draw_grid(session.grid(), &layout, session.config().background);
        if !menu_open {
            rendering::draw_hover(&session, &layout, mouse_pos);
        }
        rendering::draw_controls(
            &session,
            &palette,
            &buttons,
            &[&size_dropdown, &pattern_dropdown],
            mouse_pos,
        );

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_session_defaults() {
        let config = Cli::parse_from(["pixel_art"]).into_config();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Cli::parse_from([
            "pixel_art",
            "--grid-size",
            "32",
            "--undo-policy",
            "legacy",
            "--output",
            "out.png",
        ])
        .into_config();
        assert_eq!((config.grid_width, config.grid_height), (32, 32));
        assert_eq!(config.undo_policy, UndoPolicy::Legacy);
        assert_eq!(config.export_path, "out.png");
    }

    #[test]
    fn test_cli_colors() {
        let config = Cli::parse_from(["pixel_art", "--color", "#f00", "--background", "Purple"])
            .into_config();
        assert_eq!(config.initial_color, GridColor::rgb(255, 0, 0));
        assert_eq!(config.background, GridColor::rgb(128, 0, 128));
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["pixel_art", "--color", "mauve-ish"]).is_err());
    }
}
