//! Empty state component renderer.
//!
//! Shown for the "No jobs watched" placeholder, while a region is loading,
//! and on screens whose body has nothing to draw.

use crate::ui::helpers::{center_pad, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message two rows below `top`.
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE
/// [left padding] subtitle
/// ```
pub fn render_empty_state(top: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = empty.message.chars().count().min(cols);
    let msg_padding = center_pad(msg_len, cols);

    position_cursor(top + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", fit(&empty.message, cols - msg_padding));
    print!("{}", Theme::reset());

    if empty.subtitle.is_empty() {
        return;
    }

    let sub_len = empty.subtitle.chars().count().min(cols);
    let sub_padding = center_pad(sub_len, cols);

    position_cursor(top + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", fit(&empty.subtitle, cols - sub_padding));
    print!("{}", Theme::reset());
}
