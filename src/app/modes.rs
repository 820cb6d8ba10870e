//! Input mode and popup state types.
//!
//! The input mode decides how the plugin shim interprets key presses: in
//! browse mode letters are commands, in form mode they are typed into the
//! focused field.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating lists; single-letter keybindings are active.
    Browse,

    /// A form has focus; printable keys edit the focused field.
    Form,
}

/// Which list popup is open on the selected job.
///
/// At most one popup is open at a time; opening the other one replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Likes,
    Comments,
}
