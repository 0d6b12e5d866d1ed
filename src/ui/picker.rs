//! Interactive interface picker
//!
//! Arrow keys move the highlight, Enter selects, Esc or `q` gives up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::ScreenError;
use crate::ui::screen::{draw, DrawOp, Emphasis, Key, Screen};

const TITLE: &str = "Select network interface (Use Up/Down, Enter to select)";
const EMPTY_NOTICE: &str = "No interfaces found!";
const EMPTY_NOTICE_HOLD: Duration = Duration::from_secs(2);
const IDLE_POLL: Duration = Duration::from_millis(50);

/// What a key press did to the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Continue,
    Selected(String),
    Cancelled,
}

/// Selection state over a fixed interface list
#[derive(Debug, Clone)]
pub struct InterfacePicker {
    interfaces: Vec<String>,
    selected: usize,
}

impl InterfacePicker {
    pub fn new(interfaces: Vec<String>) -> Self {
        Self {
            interfaces,
            selected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.interfaces.get(self.selected).map(String::as_str)
    }

    pub fn handle_key(&mut self, key: Key) -> PickerAction {
        match key {
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
                PickerAction::Continue
            }
            Key::Down => {
                if self.selected + 1 < self.interfaces.len() {
                    self.selected += 1;
                }
                PickerAction::Continue
            }
            Key::Enter => match self.selected() {
                Some(name) => PickerAction::Selected(name.to_string()),
                None => PickerAction::Cancelled,
            },
            Key::Esc => PickerAction::Cancelled,
            key if key.is_quit() => PickerAction::Cancelled,
            _ => PickerAction::Continue,
        }
    }

    pub fn render(&self) -> Vec<DrawOp> {
        if self.interfaces.is_empty() {
            return vec![DrawOp::new(0, 0, EMPTY_NOTICE)];
        }

        let mut ops = Vec::with_capacity(self.interfaces.len() + 1);
        ops.push(DrawOp::new(0, 0, TITLE));
        for (idx, name) in self.interfaces.iter().enumerate() {
            let row = u16::try_from(idx + 2).unwrap_or(u16::MAX);
            if idx == self.selected {
                ops.push(DrawOp::new(row, 2, format!("> {name}")).with_emphasis(Emphasis::Reverse));
            } else {
                ops.push(DrawOp::new(row, 2, format!("  {name}")));
            }
        }
        ops
    }
}

/// Let the user choose one of `interfaces`
///
/// Returns `None` when nothing was chosen: the list was empty, the user
/// cancelled, or `shutdown` was raised.
pub fn pick_interface<S: Screen + ?Sized>(
    screen: &mut S,
    interfaces: Vec<String>,
    shutdown: &AtomicBool,
) -> Result<Option<String>, ScreenError> {
    let mut picker = InterfacePicker::new(interfaces);

    if picker.is_empty() {
        draw(screen, &picker.render())?;
        std::thread::sleep(EMPTY_NOTICE_HOLD);
        return Ok(None);
    }

    draw(screen, &picker.render())?;
    while !shutdown.load(Ordering::Relaxed) {
        let Some(key) = screen.poll_key()? else {
            std::thread::sleep(IDLE_POLL);
            continue;
        };

        match picker.handle_key(key) {
            PickerAction::Continue => draw(screen, &picker.render())?,
            PickerAction::Selected(name) => {
                tracing::info!("Interface selected: {}", name);
                return Ok(Some(name));
            }
            PickerAction::Cancelled => return Ok(None),
        }
    }

    Ok(None)
}
