use super::Color;

/// Cell is the fundamental unit of the drawing grid.
/// A cell is either unset (transparent) or painted with an opaque color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Unset,
    Painted(Color),
}

impl Cell {
    /// Check if the cell carries a color
    pub const fn is_painted(self) -> bool {
        matches!(self, Cell::Painted(_))
    }

    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Painted(color) => Some(color),
            Cell::Unset => None,
        }
    }

    /// Color to draw for this cell, substituting `background` when unset
    pub const fn color_or(self, background: Color) -> Color {
        match self {
            Cell::Painted(color) => color,
            Cell::Unset => background,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Painted(color)
    }
}
