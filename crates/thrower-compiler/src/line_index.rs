//! Line lookup for byte offsets into program text.

use text_size::TextSize;

/// Maps byte offsets to 1-based line numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Offset of the first byte of every line. Always starts with 0.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| TextSize::from((i + 1) as u32)),
        );
        Self { line_starts }
    }

    pub fn line(&self, offset: TextSize) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }
}
