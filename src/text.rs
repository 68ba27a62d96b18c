use unicode_width::UnicodeWidthStr;

/// Tabs are expanded to this many literal spaces before wrapping.
pub const TAB_WIDTH: usize = 8;

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    /// Greedily wraps every segment to `max_width` display columns.
    ///
    /// Segments are wrapped independently and their rows concatenated in
    /// order. Whitespace between words, expanded tabs included, is kept as
    /// row content; a break swallows the whitespace it falls on. A segment
    /// without any words contributes no rows. A word wider than
    /// `max_width` is never split; it gets a row of its own.
    pub fn wrap<S: AsRef<str>>(segments: &[S], max_width: isize) -> Vec<String> {
        let max_width = max_width.max(1) as usize;
        let mut lines = Vec::new();

        for segment in segments {
            let expanded = expand_tabs(segment.as_ref());
            Self::wrap_segment(&expanded, max_width, &mut lines);
        }

        lines
    }

    fn wrap_segment(text: &str, max_width: usize, lines: &mut Vec<String>) {
        let mut current_line = String::new();
        let mut current_width = 0;

        for (gap, word) in tokens(text) {
            let gap_width = gap.width();
            let word_width = word.width();

            if current_line.is_empty() {
                // Leading indentation only survives when it fits with the word.
                if gap_width + word_width <= max_width {
                    current_line.push_str(&gap);
                    current_width = gap_width;
                }
                current_line.push_str(word);
                current_width += word_width;
            } else if current_width + gap_width + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_width = word_width;
            } else {
                current_line.push_str(&gap);
                current_line.push_str(word);
                current_width += gap_width + word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
}

pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

/// Splits `text` into words, each paired with the whitespace before it.
///
/// Line breaks inside a word are kept as content. Line breaks at a word's
/// edges are dropped, and a token made only of them is no word at all.
/// Whitespace after the last word is dropped.
fn tokens(text: &str) -> Vec<(String, &str)> {
    let mut tokens = Vec::new();
    let mut gap = String::new();
    let mut rest = text;

    loop {
        let word_start = rest.find(|c: char| !is_separator(c)).unwrap_or(rest.len());
        gap.push_str(&rest[..word_start]);
        rest = &rest[word_start..];
        if rest.is_empty() {
            break;
        }

        let word_end = rest.find(is_separator).unwrap_or(rest.len());
        let word = rest[..word_end].trim_matches(is_line_break);
        rest = &rest[word_end..];

        if !word.is_empty() {
            tokens.push((std::mem::take(&mut gap), word));
        }
    }

    tokens
}

/// Widest display width among `lines`, or -1 when there are none.
pub fn max_width<S: AsRef<str>>(lines: &[S]) -> isize {
    lines
        .iter()
        .map(|line| line.as_ref().width() as isize)
        .max()
        .unwrap_or(-1)
}

/// Right-pads each line with spaces up to `width` display columns.
/// Lines already at or past `width` are returned unchanged.
pub fn pad<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let fill = width.saturating_sub(line.width());
            format!("{}{}", line, " ".repeat(fill))
        })
        .collect()
}
