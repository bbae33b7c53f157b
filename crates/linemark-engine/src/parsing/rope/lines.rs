use xi_rope::Rope;

/// A single source line with its line terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// 1-based line number in the source document.
    pub number: usize,
    /// The line text without `\n` or `\r\n`.
    pub text: String,
}

/// Returns an iterator over the lines of the rope, numbered from 1.
///
/// Uses `lines` rather than `lines_raw` so terminators never reach the
/// classifier. A trailing newline does not yield an extra empty line.
pub fn numbered_lines(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    rope.lines(..).enumerate().map(|(i, line)| LineRef {
        number: i + 1,
        text: line.into_owned(),
    })
}
