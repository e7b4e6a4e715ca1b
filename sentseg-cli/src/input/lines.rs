//! Line splitting with universal line endings

/// Split `text` into lines, each keeping its terminator
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Concatenating the lines gives
/// back `text`, so byte offsets can be accumulated from their lengths.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(|ch| ch == '\n' || ch == '\r') {
            Some(pos) if rest[pos..].starts_with("\r\n") => pos + 2,
            Some(pos) => pos + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}
