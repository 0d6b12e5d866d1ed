//! Crossterm-backed screen
//!
//! Raw mode, alternate screen and a hidden cursor are held for the lifetime
//! of `TerminalScreen` and restored on drop. A panic hook restores them too,
//! since release builds abort on panic without unwinding.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::error::ScreenError;
use crate::ui::screen::{Emphasis, Key, Screen};

/// The process terminal in raw mode
pub struct TerminalScreen {
    stdout: Stdout,
}

impl TerminalScreen {
    pub fn new() -> Result<Self, ScreenError> {
        enable_raw_mode().map_err(ScreenError::Setup)?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(ScreenError::Setup(e));
        }

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            original_hook(panic_info);
        }));

        Ok(Self { stdout })
    }
}

fn restore() {
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        _ => None,
    }
}

impl Screen for TerminalScreen {
    fn write(&mut self, row: u16, col: u16, text: &str, emphasis: Emphasis) -> Result<(), ScreenError> {
        queue!(self.stdout, MoveTo(col, row)).map_err(ScreenError::Write)?;
        let result = match emphasis {
            Emphasis::Normal => queue!(self.stdout, Print(text)),
            Emphasis::Bold => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
            Emphasis::Reverse => queue!(
                self.stdout,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
        };
        result.map_err(ScreenError::Write)
    }

    fn clear(&mut self) -> Result<(), ScreenError> {
        queue!(self.stdout, Clear(ClearType::All)).map_err(ScreenError::Write)
    }

    fn refresh(&mut self) -> Result<(), ScreenError> {
        self.stdout.flush().map_err(ScreenError::Write)
    }

    fn poll_key(&mut self) -> Result<Option<Key>, ScreenError> {
        while event::poll(Duration::ZERO).map_err(ScreenError::Input)? {
            if let Event::Key(key) = event::read().map_err(ScreenError::Input)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(key) = map_key(key.code, key.modifiers) {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Char('q'), KeyModifiers::NONE), Some(Key::Char('q')));
        assert_eq!(map_key(KeyCode::Char('Q'), KeyModifiers::SHIFT), Some(Key::Char('Q')));
        assert_eq!(map_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key::Interrupt));
        assert_eq!(map_key(KeyCode::Up, KeyModifiers::NONE), Some(Key::Up));
        assert_eq!(map_key(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Enter));
        assert_eq!(map_key(KeyCode::F(1), KeyModifiers::NONE), None);
    }
}
