//! Profile page: user details, their jobs and the users watching them.
//!
//! ```text
//! Name
//! email
//! Image: ...
//! Watched by N users   [w: Watch]
//! (blank)
//! JOBS
//!   title · start · posted · description     (one row per job)
//!   @ watcher name                           (one row per watcher)
//! ```

use crate::ui::helpers::{fit, position_cursor, single_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProfileView;

fn plain_row(row: usize, text: &str, color: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", fit(&single_line(text), cols));
    print!("{}", Theme::reset());
}

fn list_row(row: usize, text: &str, selected: bool, color: &str, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    if selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", fit(&format!("▸ {}", single_line(text)), cols));
    } else {
        print!("{}", Theme::fg(color));
        print!("{}", fit(&format!("  {}", single_line(text)), cols));
    }
    print!("{}", Theme::reset());
}

/// Renders the profile between `top` and `bottom` (inclusive).
pub fn render_profile(top: usize, bottom: usize, profile: &ProfileView, theme: &Theme, cols: usize) {
    position_cursor(top, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    let name = if profile.is_self {
        format!("{} (you)", profile.name)
    } else {
        profile.name.clone()
    };
    print!("{}", fit(&single_line(&name), cols));
    print!("{}", Theme::reset());

    plain_row(top + 1, &profile.email, &theme.colors.text_normal, cols);
    plain_row(top + 2, &format!("Image: {}", profile.image), &theme.colors.text_normal, cols);

    let mut watch_line = profile.watchers_label.clone();
    if let Some(label) = &profile.watch_label {
        watch_line.push_str(&format!("   [w: {label}]"));
    }
    if profile.loading {
        watch_line.push_str("   (loading...)");
    }
    plain_row(top + 3, &watch_line, &theme.colors.text_dim, cols);
    plain_row(top + 4, "", &theme.colors.text_dim, cols);

    position_cursor(top + 5, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit("JOBS / WATCHED BY", cols));
    print!("{}", Theme::reset());

    let mut row = top + 6;
    if profile.jobs.is_empty() && profile.watchees.is_empty() {
        plain_row(row, "  No jobs posted", &theme.colors.text_dim, cols);
        row += 1;
    }
    for job in &profile.jobs {
        if row > bottom {
            return;
        }
        let mut text = format!("{} · {} · {} · {}", job.title, job.start, job.posted, job.description);
        if job.editable {
            text = format!("{text} · {}", job.image);
        }
        list_row(row, &text, job.is_selected, &theme.colors.text_normal, theme, cols);
        row += 1;
    }
    for watchee in &profile.watchees {
        if row > bottom {
            return;
        }
        let text = format!("@ {}", watchee.name);
        list_row(row, &text, watchee.is_selected, &theme.colors.accent_fg, theme, cols);
        row += 1;
    }
    while row <= bottom {
        plain_row(row, "", &theme.colors.text_dim, cols);
        row += 1;
    }
}
