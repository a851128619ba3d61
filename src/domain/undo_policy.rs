//! UndoPolicy selects how the history behaves once the undo stack runs dry.
//!
//! `Legacy` only ever stores pre-stroke snapshots: after popping one it
//! applies the next one down, or a blank grid when none is left. `Standard`
//! keeps the state being left on the redo stack, so undo and redo are exact
//! inverses and history stops at the oldest recorded state.

/// Available undo behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UndoPolicy {
    /// Undo restores the pre-stroke state, redo restores the state it replaced
    #[default]
    Standard,
    /// Undo applies the entry below the popped one, or clears the grid
    Legacy,
}

impl UndoPolicy {
    /// Display name for UI and command line
    pub fn name(&self) -> &'static str {
        match self {
            UndoPolicy::Standard => "standard",
            UndoPolicy::Legacy => "legacy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(UndoPolicy::default(), UndoPolicy::Standard);
    }

    #[test]
    fn test_names_are_distinct() {
        assert_eq!(UndoPolicy::Standard.name(), "standard");
        assert_eq!(UndoPolicy::Legacy.name(), "legacy");
    }
}
