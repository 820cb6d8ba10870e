//! Dashboard job cards, pager and likes/comments popup.

use super::{render_box, BoxLines};
use crate::ui::helpers::{fit, position_cursor, single_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedView, JobItemView};

/// Rows of one card; matches the windowing in the view model.
pub const CARD_ROWS: usize = 7;

fn render_card(row: usize, item: &JobItemView, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(2);
    let marker = if item.is_selected { "▌" } else { " " };

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.selection_bg));
    print!("{marker} ");
    print!("{}", Theme::bold());
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    }
    print!("{}", fit(&single_line(&item.title), width));
    print!("{}", Theme::reset());

    let lines = [
        format!("by {}  ·  {}", item.poster, item.posted),
        item.start.clone(),
        format!("Image: {}", item.image),
        item.description.clone(),
    ];
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(row + 1 + offset, 1);
        print!("{}", Theme::fg(&theme.colors.selection_bg));
        print!("{marker} ");
        print!("{}", Theme::reset());
        if offset == 0 {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", fit(&single_line(line), width));
        print!("{}", Theme::reset());
    }

    position_cursor(row + 5, 1);
    print!("{}", Theme::fg(&theme.colors.selection_bg));
    print!("{marker} ");
    let heart_color = if item.liked { &theme.colors.liked_fg } else { &theme.colors.text_dim };
    print!("{}{} ", Theme::fg(heart_color), item.like_glyph);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit(&format!("{}  ·  {}", item.likes_label, item.comments_label), width.saturating_sub(2)));
    print!("{}", Theme::reset());

    position_cursor(row + 6, 1);
    print!("{}", " ".repeat(cols));
}

fn pager_text(feed: &FeedView) -> String {
    let prev = if feed.has_prev { "< p: prev" } else { "         " };
    let next = if feed.has_next { "n: next >" } else { "         " };
    let loading = if feed.loading { "  (loading...)" } else { "" };
    format!("{prev}   page {}{loading}   {next}", feed.page)
}

/// Renders the cards between `top` and `bottom` (inclusive), the pager on
/// `bottom`, and the popup over the cards.
pub fn render_feed(top: usize, bottom: usize, feed: &FeedView, theme: &Theme, cols: usize) {
    let mut row = top;
    for item in &feed.items {
        if row + CARD_ROWS > bottom + 1 {
            break;
        }
        render_card(row, item, theme, cols);
        row += CARD_ROWS;
    }
    while row < bottom {
        position_cursor(row, 1);
        print!("{}", " ".repeat(cols));
        row += 1;
    }

    let pager = pager_text(feed);
    position_cursor(bottom, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit(&format!("{}{pager}", " ".repeat(super::center_offset(&pager, cols))), cols));
    print!("{}", Theme::reset());

    if let Some(popup) = &feed.popup {
        let lines: Vec<String> = if popup.lines.is_empty() {
            vec!["(none yet)".to_string()]
        } else {
            popup.lines.iter().map(|l| single_line(l)).collect()
        };
        let max_height = bottom.saturating_sub(top + 1).max(3);
        render_box(
            top + 1,
            max_height,
            BoxLines {
                title: &popup.title,
                lines: &lines,
                focused: None,
            },
            &theme.colors.input_border,
            theme,
            cols,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(has_prev: bool, has_next: bool) -> FeedView {
        FeedView {
            items: vec![],
            page: 2,
            has_prev,
            has_next,
            loading: false,
            popup: None,
        }
    }

    #[test]
    fn pager_hides_unavailable_directions() {
        let both = pager_text(&feed(true, true));
        assert!(both.contains("p: prev") && both.contains("n: next") && both.contains("page 2"));

        let first = pager_text(&feed(false, true));
        assert!(!first.contains("prev"));

        let last = pager_text(&feed(true, false));
        assert!(!last.contains("next"));
    }
}
