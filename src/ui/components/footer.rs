//! Footer component renderer.

use crate::ui::helpers::{center_pad, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints, dimmed and centered.
///
/// Hints wider than the pane are cut with an ellipsis.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = &footer.keybindings;
    let text_len = help_text.chars().count().min(cols);
    let padding = center_pad(text_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(help_text, cols - padding));
    print!("{}", Theme::reset());
    row + 1
}
