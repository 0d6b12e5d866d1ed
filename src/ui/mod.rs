//! Terminal UI module
//!
//! Rendering is pure: the dashboard and the interface picker produce lists of
//! `DrawOp`s, and a `Screen` implementation performs the writes.

pub mod dashboard;
pub mod picker;
pub mod screen;
pub mod terminal;

pub use dashboard::render_dashboard;
pub use picker::{pick_interface, InterfacePicker, PickerAction};
pub use screen::{draw, DrawOp, Emphasis, Key, Screen};
pub use terminal::TerminalScreen;
