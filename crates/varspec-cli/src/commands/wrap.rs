use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use varspec_core::layout;

/// How wrapped lines are decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Plain word wrap.
    Plain,
    /// Every line starts with the given literal.
    Prefixed(String),
    /// Lines after the first are indented by this many spaces.
    Hanging(usize),
    /// No wrapping: collapse whitespace runs to single spaces and trim.
    Tidy,
}

/// Lay out `text` (or stdin when `None`) and print the result.
pub async fn run(text: Option<String>, width: usize, mode: Layout) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read text from stdin")?;
            buf
        }
    };

    let out = format(&text, width, &mode)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}

/// Lay out `text` according to `mode`. `width` is ignored by [`Layout::Tidy`].
pub fn format(text: &str, width: usize, mode: &Layout) -> Result<String> {
    tracing::debug!(width, ?mode, "laying out {} bytes", text.len());

    let out = match mode {
        Layout::Plain => layout::wrap(text, width)?,
        Layout::Prefixed(prefix) => layout::wrap_and_prefix(text, width, prefix)?,
        Layout::Hanging(indent) => layout::hanging_indent(text, width, *indent)?,
        Layout::Tidy => layout::tidy(text),
    };
    Ok(out)
}
