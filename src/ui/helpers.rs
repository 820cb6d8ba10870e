//! Shared rendering utilities.
//!
//! Widths are counted in `char`s, which is exact for the text this plugin
//! shows apart from wide CJK glyphs.

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to `width` columns, ending in `…` when cut, and pads the
/// rest with spaces so the line overwrites whatever was there.
///
/// ```rust
/// use lurkforwork::ui::helpers::fit;
///
/// assert_eq!(fit("Backend engineer", 8), "Backend…");
/// assert_eq!(fit("QA", 4), "QA  ");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Replaces control characters (including newlines) with spaces so backend
/// text cannot break the layout or inject escapes.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Left padding that centers `len` columns in `cols`.
#[must_use]
pub const fn center_pad(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_handles_multibyte_text() {
        assert_eq!(fit("♥ 3 likes", 5), "♥ 3 …");
        assert_eq!(fit("é", 3), "é  ");
        assert_eq!(fit("anything", 0), "");
    }

    #[test]
    fn single_line_strips_escapes_and_newlines() {
        assert_eq!(single_line("a\nb\u{1b}[31m"), "a b [31m");
    }
}
