//! Plain-text layout for help text and generated config comments.
//!
//! The helpers here work on whitespace-delimited tokens. A token is never
//! split: when a single token is longer than the requested width it is placed
//! on a line of its own and that line overflows the width. Line lengths are
//! measured in terminal display columns, so a wide CJK character counts as two.
//!
//! ## Pipeline
//!
//! ```text
//! raw text -> tidy (optional) -> wrap_lines -> prefix_lines (optional)
//! raw text -> hanging_indent (wraps twice internally)
//! ```
//!
//! ## Width policy
//!
//! Every wrapping operation rejects a width of zero with
//! [`VarSpecError::InvalidWidth`], and [`hanging_indent`] rejects an indent
//! that is not strictly smaller than the width with
//! [`VarSpecError::IndentTooWide`]. Empty or whitespace-only input wraps to
//! zero lines, which render as the empty string.

use unicode_width::UnicodeWidthStr;

use crate::error::{Result, VarSpecError};

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Turns an indented multi-line literal into one long line that can be
/// re-wrapped at any width. Tabs, newlines and every other Unicode whitespace
/// character count as whitespace.
///
/// ```
/// use varspec_core::layout::tidy;
///
/// assert_eq!(tidy("  a\tb\n\nc  "), "a b c");
/// ```
pub fn tidy(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedily pack the tokens of `text` into lines at most `width` columns wide.
///
/// Tokens are joined by a single space and keep their input order. A token
/// longer than `width` gets a line of its own.
pub fn wrap_lines(text: &str, width: usize) -> Result<Vec<String>> {
    check_width(width)?;

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for token in text.split_whitespace() {
        let token_len = token.width();

        if current.is_empty() {
            current.push_str(token);
            current_len = token_len;
        } else if current_len + 1 + token_len <= width {
            current.push(' ');
            current.push_str(token);
            current_len += 1 + token_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(token);
            current_len = token_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

/// Word wrap `text` at `width` and join the lines with `\n`.
pub fn wrap(text: &str, width: usize) -> Result<String> {
    Ok(wrap_lines(text, width)?.join("\n"))
}

/// Return a copy of `lines` with `prefix` prepended to each one.
///
/// No re-wrapping happens here, so a prefixed line may be longer than the
/// width its content was wrapped at.
pub fn prefix_lines(lines: &[String], prefix: &str) -> Vec<String> {
    lines.iter().map(|line| format!("{prefix}{line}")).collect()
}

/// Word wrap `text` at `width`, then prepend `prefix` to every line.
///
/// The prefix does not count against `width`: each returned line is at most
/// `width` columns plus the prefix wide (overlong tokens aside).
///
/// ```
/// use varspec_core::layout::wrap_and_prefix;
///
/// let out = wrap_and_prefix("alpha beta gamma", 6, "> ").unwrap();
/// assert_eq!(out, "> alpha\n> beta\n> gamma");
/// ```
pub fn wrap_and_prefix(text: &str, width: usize, prefix: &str) -> Result<String> {
    let lines = wrap_lines(text, width)?;
    Ok(prefix_lines(&lines, prefix).join("\n"))
}

/// Wrap `text` so the first line sits flush left and every following line is
/// indented by `indent` spaces.
///
/// The first line is wrapped at the full `width`. The remaining text is then
/// re-wrapped at `width - indent` so the padded lines still fit in `width`.
/// When everything fits on one line it is returned unchanged.
pub fn hanging_indent(text: &str, width: usize, indent: usize) -> Result<String> {
    check_width(width)?;
    if indent >= width {
        return Err(VarSpecError::IndentTooWide { indent, width });
    }

    let lines = wrap_lines(text, width)?;
    let Some((first, rest)) = lines.split_first() else {
        return Ok(String::new());
    };
    if rest.is_empty() {
        return Ok(first.clone());
    }

    let remainder = wrap_lines(&rest.join(" "), width - indent)?;
    let padding = " ".repeat(indent);

    let mut out = first.clone();
    for line in prefix_lines(&remainder, &padding) {
        out.push('\n');
        out.push_str(&line);
    }
    Ok(out)
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(VarSpecError::InvalidWidth(width));
    }
    Ok(())
}
