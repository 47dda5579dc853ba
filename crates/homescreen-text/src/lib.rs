//! Line breaking for home screen labels.
//!
//! Widths come from a fixed advance per grapheme cluster rather than shaped
//! glyphs, so layout is deterministic and needs no font database. Every
//! function takes the font size already converted to px.

use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Advance of one grapheme cluster as a fraction of the font size.
pub const ADVANCE_EM: f32 = 0.6;

// Slack for float accumulation when comparing against a line width.
const EPS: f32 = 0.01;

pub fn measure_width(text: &str, px: f32) -> f32 {
    text.graphemes(true).count() as f32 * px * ADVANCE_EM
}

/// Returns `text` if it fits in `max_w`, otherwise the longest grapheme
/// prefix followed by [`ELLIPSIS`] that does. Empty when not even the
/// marker fits.
pub fn ellipsize_line(text: &str, px: f32, max_w: f32) -> String {
    if measure_width(text, px) <= max_w + EPS {
        return text.to_string();
    }
    force_ellipsis(text, px, max_w)
}

// Ends in the marker; drops trailing graphemes until prefix + marker fit.
// Below one advance of width nothing fits and the result is empty.
fn force_ellipsis(text: &str, px: f32, max_w: f32) -> String {
    let adv = px * ADVANCE_EM;
    let budget = if adv > 0.0 {
        ((max_w + EPS) / adv).floor().max(0.0) as usize
    } else {
        usize::MAX
    };
    if budget == 0 {
        return String::new();
    }
    let keep = budget - 1;
    let mut out: String = text.graphemes(true).take(keep).collect();
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push_str(ELLIPSIS);
    out
}

/// Greedy word wrap.
///
/// Hard breaks on `\n`; soft breaks on Unicode word boundaries, dropping the
/// whitespace at a soft break. A word wider than `max_w` is split between
/// grapheme clusters. A non-finite `max_w` disables soft wrapping.
///
/// When `max_lines` is exceeded the result is cut to `max_lines` lines and
/// the flag is `true`. With `ellipsize` every kept line fits `max_w` and
/// the last one ends with [`ELLIPSIS`] when the marker itself fits.
pub fn wrap_lines(
    text: &str,
    px: f32,
    max_w: f32,
    max_lines: Option<usize>,
    ellipsize: bool,
) -> (Vec<String>, bool) {
    let mut lines = Vec::new();
    for para in text.split('\n') {
        if max_w.is_finite() {
            wrap_paragraph(para, px, max_w, &mut lines);
        } else {
            lines.push(para.to_string());
        }
    }

    let limit = max_lines.map(|n| n.max(1));
    let truncated = matches!(limit, Some(n) if lines.len() > n);
    if let Some(n) = limit {
        lines.truncate(n);
    }
    if ellipsize {
        // A line narrower than one grapheme advance still holds a grapheme.
        if max_w.is_finite() {
            for l in &mut lines {
                *l = ellipsize_line(l, px, max_w);
            }
        }
        if truncated && let Some(last) = lines.last_mut() {
            *last = force_ellipsis(last, px, max_w);
        }
    }
    (lines, truncated)
}

fn wrap_paragraph(para: &str, px: f32, max_w: f32, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_w = 0.0f32;
    let mut at_break = false;

    for word in para.split_word_bounds() {
        let is_space = word.trim().is_empty();
        if is_space && at_break && line.is_empty() {
            continue;
        }
        let w = measure_width(word, px);
        if line_w + w <= max_w + EPS {
            line.push_str(word);
            line_w += w;
            continue;
        }

        if !line.trim().is_empty() {
            out.push(line.trim_end().to_string());
        }
        line.clear();
        line_w = 0.0;
        at_break = true;
        if is_space {
            continue;
        }

        if w <= max_w + EPS {
            line.push_str(word);
            line_w = w;
            continue;
        }
        for g in word.graphemes(true) {
            let gw = measure_width(g, px);
            if line_w + gw > max_w + EPS && !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_w = 0.0;
            }
            line.push_str(g);
            line_w += gw;
        }
    }

    if !at_break || !line.is_empty() {
        out.push(line.trim_end().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_graphemes() {
        assert_eq!(measure_width("abc", 10.0), 18.0);
        // e + combining acute is one cluster
        assert_eq!(measure_width("e\u{301}", 10.0), 6.0);
        assert_eq!(measure_width("", 10.0), 0.0);
    }

    #[test]
    fn test_ellipsize_keeps_fitting_text() {
        assert_eq!(ellipsize_line("Show all", 10.0, 48.0), "Show all");
    }

    #[test]
    fn test_ellipsize_truncates_to_width() {
        let out = ellipsize_line("Recently saved bookmarks", 10.0, 60.0);
        assert!(out.ends_with(ELLIPSIS));
        assert!(measure_width(&out, 10.0) <= 60.0);
        assert_eq!(out, "Recently…");
    }

    #[test]
    fn test_wrap_on_word_boundaries() {
        let (lines, truncated) = wrap_lines("hello world foo", 10.0, 66.0, None, false);
        assert_eq!(lines, vec!["hello world", "foo"]);
        assert!(!truncated);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        let (lines, _) = wrap_lines("abcdefghij", 10.0, 30.0, None, false);
        assert_eq!(lines, vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_wrap_hard_breaks_and_empty() {
        let (lines, _) = wrap_lines("a\nb", 10.0, 100.0, None, false);
        assert_eq!(lines, vec!["a", "b"]);
        let (lines, _) = wrap_lines("", 10.0, 100.0, None, false);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wrap_max_lines_with_ellipsis() {
        let (lines, truncated) =
            wrap_lines("one two three four five six", 10.0, 42.0, Some(2), true);
        assert!(truncated);
        assert_eq!(lines, vec!["one two", "three…"]);
    }

    #[test]
    fn test_wrap_never_exceeds_max_lines() {
        let text = "The quick brown fox jumps over the lazy dog and keeps running far away";
        for max_w in [20.0, 55.0, 90.0, 130.0, 400.0] {
            let (lines, truncated) = wrap_lines(text, 12.0, max_w, Some(2), true);
            assert!(lines.len() <= 2, "{max_w}: {lines:?}");
            for l in &lines {
                assert!(measure_width(l, 12.0) <= max_w + 0.1 || l == ELLIPSIS);
            }
            if truncated {
                assert!(lines[1].ends_with(ELLIPSIS));
            }
        }
    }

    #[test]
    fn test_every_line_fits_below_one_advance() {
        let (lines, truncated) = wrap_lines("Recently saved", 16.0, 5.0, Some(2), true);
        assert!(truncated);
        assert_eq!(lines, vec!["", ""]);

        let (lines, _) = wrap_lines("Recently saved", 16.0, 12.0, Some(2), true);
        assert_eq!(lines, vec!["R", ELLIPSIS]);
        for l in &lines {
            assert!(measure_width(l, 16.0) <= 12.0);
        }
    }

    #[test]
    fn test_unbounded_width_does_not_wrap() {
        let (lines, truncated) = wrap_lines("a b c", 10.0, f32::INFINITY, Some(1), true);
        assert_eq!(lines, vec!["a b c"]);
        assert!(!truncated);
    }
}
