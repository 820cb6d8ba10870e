//! Error banner renderer.

use crate::ui::helpers::{fit, position_cursor, single_line};
use crate::ui::theme::Theme;

/// Renders the banner row: the error on a colored band, or a blank line.
pub fn render_banner(row: usize, message: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match message {
        Some(message) => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print!("{}", Theme::bg(&theme.colors.error_bg));
            print!("{}", fit(&format!(" ! {}", single_line(message)), cols));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
