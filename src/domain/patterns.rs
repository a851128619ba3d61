use super::{Cell, Color, GridError, GridModel, Snapshot};

/// Symbol marking a filled pixel in a pattern row; anything else is empty
pub const FILLED: u8 = b'#';
pub const EMPTY: u8 = b'.';

/// A named bitmap that can overwrite the grid with a preset image.
/// Rows may differ in length; a missing row or column reads as empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    rows: &'static [&'static str],
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        rows: &'static [&'static str],
    ) -> Self {
        Self { name, description, rows }
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Width of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.as_bytes().get(x))
            .is_some_and(|&symbol| symbol == FILLED)
    }

    /// Render the pattern onto a `width` x `height` grid, every cell explicitly set
    pub fn render(&self, width: usize, height: usize, filled: Color, empty: Color) -> Snapshot {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| {
                if self.is_filled(x, y) {
                    Cell::Painted(filled)
                } else {
                    Cell::Painted(empty)
                }
            })
            .collect();
        Snapshot::from_cells(cells)
    }
}

/// Static registry of named patterns, built once and never mutated
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    pub fn builtin() -> Self {
        Self {
            patterns: presets::all_patterns(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Overwrite the whole grid with the named pattern.
    /// Unknown names fail before the grid is touched.
    pub fn apply(
        &self,
        name: &str,
        grid: &mut GridModel,
        filled: Color,
        empty: Color,
    ) -> Result<(), GridError> {
        let pattern = self
            .get(name)
            .ok_or_else(|| GridError::UnknownPattern(name.to_string()))?;
        let (width, height) = grid.dimensions();
        grid.restore(&pattern.render(width, height, filled, empty))
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Preset sprites offered in the pattern picker
pub mod presets {
    use super::*;

    pub const HEART: Pattern = Pattern::new(
        "heart",
        "Heart",
        &[
            "..........",
            "..#...#...",
            ".##.#.##..",
            "#########.",
            "#########",
            ".#######.",
            "..#####..",
            "...###...",
            "....#....",
        ],
    );

    pub const DOG: Pattern = Pattern::new(
        "dog",
        "Dog face",
        &[
            "..........",
            "..#####...",
            ".#.....#..",
            "#.......#.",
            "#..###..#.",
            "#.......#.",
            ".#.....#..",
            "..#####...",
        ],
    );

    pub const FISH: Pattern = Pattern::new(
        "fish",
        "Fish",
        &[
            "..........",
            "..#####...",
            ".#.....#..",
            "#.......#.",
            "#.......#.",
            ".#.....#..",
            "..#####...",
            "..........",
        ],
    );

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![HEART, DOG, FISH]
    }
}
