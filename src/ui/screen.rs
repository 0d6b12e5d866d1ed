//! Screen abstraction

use crate::error::ScreenError;

/// Text attribute for one write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    Bold,
    Reverse,
}

/// One cursor-addressed text write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub emphasis: Emphasis,
}

impl DrawOp {
    pub fn new(row: u16, col: u16, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            emphasis: Emphasis::Normal,
        }
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// Keys the UI reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Esc,
    /// Ctrl+C, which raw mode delivers as a key instead of a signal
    Interrupt,
}

impl Key {
    /// `q`, `Q` or Ctrl+C
    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Char('q' | 'Q') | Key::Interrupt)
    }
}

/// A character-cell display with non-blocking key input
pub trait Screen {
    fn write(&mut self, row: u16, col: u16, text: &str, emphasis: Emphasis) -> Result<(), ScreenError>;

    fn clear(&mut self) -> Result<(), ScreenError>;

    /// Make pending writes visible
    fn refresh(&mut self) -> Result<(), ScreenError>;

    /// Next pending key, if any; never blocks
    fn poll_key(&mut self) -> Result<Option<Key>, ScreenError>;
}

/// Replace the screen contents with `ops`
pub fn draw<S: Screen + ?Sized>(screen: &mut S, ops: &[DrawOp]) -> Result<(), ScreenError> {
    screen.clear()?;
    for op in ops {
        screen.write(op.row, op.col, &op.text, op.emphasis)?;
    }
    screen.refresh()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(Key::Char('q').is_quit());
        assert!(Key::Char('Q').is_quit());
        assert!(Key::Interrupt.is_quit());
        assert!(!Key::Char('w').is_quit());
        assert!(!Key::Esc.is_quit());
    }

    #[test]
    fn test_draw_op_builder() {
        let op = DrawOp::new(3, 2, "hello").with_emphasis(Emphasis::Bold);
        assert_eq!(op.row, 3);
        assert_eq!(op.col, 2);
        assert_eq!(op.text, "hello");
        assert_eq!(op.emphasis, Emphasis::Bold);
    }
}
