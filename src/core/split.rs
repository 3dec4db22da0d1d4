//! Message splitting: break long text into chunks that fit one Slack message.
//!
//! Lengths are counted in chars, so cuts never land inside a multi-byte
//! character. Chunks borrow from the input.

use std::num::NonZeroUsize;

/// Slack message character limit.
pub const SLACK_MSG_LIMIT: usize = 4000;

pub(crate) const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(SLACK_MSG_LIMIT) {
    Some(limit) => limit,
    None => panic!("SLACK_MSG_LIMIT must be non-zero"),
};

/// Errors when splitting text.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("max_length must be at least 1, got {max_length}")]
    InvalidMaxLength { max_length: usize },
}

/// Split text into chunks of at most `max_length` chars, preferring to break at newlines.
///
/// The newline at a cut is dropped, and any further newlines at the start of
/// the next chunk are stripped. Empty text yields no chunks.
///
/// # Errors
/// Returns [`SplitError::InvalidMaxLength`] when `max_length` is zero.
pub fn split_text(text: &str, max_length: usize) -> Result<Vec<&str>, SplitError> {
    let limit = NonZeroUsize::new(max_length).ok_or(SplitError::InvalidMaxLength { max_length })?;
    Ok(split_with_limit(text, limit))
}

/// [`split_text`] with the default [`SLACK_MSG_LIMIT`].
pub fn split_text_default(text: &str) -> Vec<&str> {
    split_with_limit(text, DEFAULT_LIMIT)
}

/// Split with an already-validated limit.
pub fn split_with_limit(text: &str, limit: NonZeroUsize) -> Vec<&str> {
    let max_length = limit.get();
    let mut chunks = Vec::new();
    let mut rest = text;
    while let Some(boundary) = char_boundary_after(rest, max_length) {
        let cut = match rest[..boundary].rfind('\n') {
            Some(pos) => pos,
            None => {
                log::trace!("No newline within {} chars; hard cut", max_length);
                boundary
            }
        };
        // A cut at 0 only happens when the window starts with its sole newline.
        if cut > 0 {
            chunks.push(&rest[..cut]);
        }
        rest = rest[cut..].trim_start_matches('\n');
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    log::debug!(
        "Split {} bytes into {} chunk(s) (max {} chars)",
        text.len(),
        chunks.len(),
        max_length
    );
    chunks
}

/// Byte offset of the `n`th char, or `None` when `text` has `n` chars or fewer.
fn char_boundary_after(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(idx, _)| idx)
}
