//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Screen title
//! - [`banner`]: Error banner row
//! - [`feed`]: Dashboard job cards, pager and popup
//! - [`profile`]: Profile details, jobs and watchers
//! - [`form`]: Form screens and overlays
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Placeholder and loading messages
//!
//! # Layout
//!
//! ```text
//! row 1         [blank line]
//! row 2         [Header]
//! row 3         [Border]
//! row 4         [Error banner or blank]
//! rows 5..=R-2  [Body]
//! row R-1       [Border]
//! row R         [Footer]
//! ```
//!
//! Overlays are boxed over the body after it is drawn.

pub mod banner;
pub mod empty;
pub mod feed;
pub mod footer;
pub mod form;
pub mod header;
pub mod profile;

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, ScreenViewModel};

use banner::render_banner;
use empty::render_empty_state;
use feed::render_feed;
use footer::render_footer;
use form::{render_form, render_form_overlay};
use header::render_header;
use profile::render_profile;

/// First body row.
pub const BODY_TOP: usize = 5;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn center_offset(text: &str, cols: usize) -> usize {
    crate::ui::helpers::center_pad(text.chars().count(), cols)
}

/// Content of a boxed panel.
struct BoxLines<'a> {
    title: &'a str,
    lines: &'a [String],
    /// Line drawn in the focus color.
    focused: Option<usize>,
}

/// Draws a bordered box, horizontally centered, starting at `top`.
///
/// Lines beyond `max_height - 2` are dropped.
fn render_box(top: usize, max_height: usize, content: BoxLines<'_>, border: &str, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(4).clamp(10.min(cols), 60);
    let inner = width.saturating_sub(4);
    let left = (cols.saturating_sub(width)) / 2 + 1;
    let visible = max_height.saturating_sub(2).min(content.lines.len());

    position_cursor(top, left);
    print!("{}", Theme::fg(border));
    let title = fit(&format!(" {} ", content.title), width.saturating_sub(3));
    let title = title.trim_end();
    print!("┌─{title}{}┐", "─".repeat(width.saturating_sub(3 + title.chars().count())));

    for (i, line) in content.lines.iter().take(visible).enumerate() {
        position_cursor(top + 1 + i, left);
        print!("{}", Theme::fg(border));
        print!("│ ");
        if content.focused == Some(i) {
            print!("{}", Theme::fg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", fit(line, inner));
        print!("{}", Theme::fg(border));
        print!(" │");
    }

    position_cursor(top + 1 + visible, left);
    print!("└{}┘", "─".repeat(width.saturating_sub(2)));
    print!("{}", Theme::reset());
}

/// Draws one full frame.
pub fn render_screen(vm: &ScreenViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.max(BODY_TOP + 2);
    let bottom = footer_row.saturating_sub(2);

    position_cursor(1, 1);
    print!("{}", " ".repeat(cols));

    let mut row = render_header(2, &vm.header, theme, cols);
    row = render_border(row, &theme.colors.border, cols);
    render_banner(row, vm.error.as_deref(), theme, cols);

    match &vm.body {
        BodyView::Feed(feed) => render_feed(BODY_TOP, bottom, feed, theme, cols),
        BodyView::Profile(profile) => render_profile(BODY_TOP, bottom, profile, theme, cols),
        BodyView::Form(form) => render_form(BODY_TOP, bottom, form, theme, cols),
        BodyView::Empty(empty) => render_empty_state(BODY_TOP, empty, theme, cols),
    }

    if let Some(overlay) = &vm.overlay {
        let height = bottom.saturating_sub(BODY_TOP).max(3);
        render_form_overlay(BODY_TOP + 1, height, overlay, theme, cols);
    }

    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
