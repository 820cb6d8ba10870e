//! Header component renderer.

use crate::ui::helpers::{center_pad, fit, position_cursor, single_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the screen title centered and bold across the full width.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = single_line(&header.title);
    let title_len = title.chars().count().min(cols);
    let padding = center_pad(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", fit(&title, cols - padding));

    print!("{}", Theme::reset());
    row + 1
}
