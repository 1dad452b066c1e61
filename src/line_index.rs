/// Maps byte offsets in a text to line and column numbers
///
/// Lines are separated by `\n`. A `\r` directly before the `\n` belongs to the terminator and is
/// not part of the line text.
pub struct LineIndex<'a> {
    text: &'a [u8],
    /// Offset of the first byte of every line
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                text.iter()
                    .enumerate()
                    .filter(|&(_, &byte)| byte == b'\n')
                    .map(|(offset, _)| offset + 1),
            )
            .collect();

        Self { text, line_starts }
    }

    /// Number of lines, a text that ends with a newline has an empty last line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the 0-based line and column of `offset`, or `None` if it lies outside the text
    pub fn line_and_column(&self, offset: usize) -> Option<(usize, usize)> {
        if offset >= self.text.len() {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Some((line, offset - self.line_starts[line]))
    }

    /// Returns the content of `line` without its terminator
    pub fn line_text(&self, line: usize) -> Option<&'a [u8]> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next_start) => next_start - 1,
            None => self.text.len(),
        };

        let content = &self.text[start..end];
        Some(content.strip_suffix(b"\r").unwrap_or(content))
    }
}
