const MAX_LENGTH: usize = 72;

/// Truncates `content` to [`MAX_LENGTH`] characters, marking the cut with an ellipsis.
pub(crate) fn shorten_content(content: &str) -> String {
    match content.char_indices().nth(MAX_LENGTH) {
        None => content.to_owned(),
        Some((cut, _)) => format!("{}…", &content[..cut]),
    }
}
