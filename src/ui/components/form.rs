//! Form renderer, used for form screens and for overlays.

use super::{render_box, BoxLines};
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormView;

/// `Label: value`, with a block cursor after the focused value.
fn field_line(label: &str, value: &str, focused: bool) -> String {
    let cursor = if focused { "█" } else { "" };
    format!("{label}: {value}{cursor}")
}

fn lines(form: &FormView) -> Vec<String> {
    form.fields
        .iter()
        .map(|f| field_line(&f.label, &f.value, f.is_focused))
        .collect()
}

/// Renders a form screen body starting at `top`.
pub fn render_form(top: usize, bottom: usize, form: &FormView, theme: &Theme, cols: usize) {
    position_cursor(top + 1, 3);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit(&form.title, cols.saturating_sub(2)));
    print!("{}", Theme::reset());

    let mut row = top + 3;
    for (field, line) in form.fields.iter().zip(lines(form)) {
        if row > bottom {
            break;
        }
        position_cursor(row, 1);
        if field.is_focused {
            print!("{}", Theme::fg(&theme.colors.input_border));
            print!("▌ ");
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("  ");
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", fit(&line, cols.saturating_sub(2)));
        print!("{}", Theme::reset());
        row += 2;
    }
}

/// Renders a form boxed over the body.
pub fn render_form_overlay(top: usize, max_height: usize, form: &FormView, theme: &Theme, cols: usize) {
    let focused = form.fields.iter().position(|f| f.is_focused);
    render_box(
        top,
        max_height,
        BoxLines {
            title: &form.title,
            lines: &lines(form),
            focused,
        },
        &theme.colors.input_border,
        theme,
        cols,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_field_shows_cursor() {
        assert_eq!(field_line("Email", "a@b", true), "Email: a@b█");
        assert_eq!(field_line("Email", "a@b", false), "Email: a@b");
    }
}
