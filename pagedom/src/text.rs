use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Number of rows `s` occupies when wrapped to `max_width` columns.
///
/// Blank lines take no space; text nodes between block elements are
/// usually nothing but indentation.
pub fn row_count(s: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }

    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| display_width(line).div_ceil(max_width))
        .sum()
}

/// Widest trimmed line of `s`, clamped to `max_width`.
pub fn widest_line(s: &str, max_width: usize) -> usize {
    s.lines()
        .map(|line| display_width(line.trim()))
        .max()
        .unwrap_or(0)
        .min(max_width)
}
