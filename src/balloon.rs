use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Say,
    Think,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Say => "say",
            Mode::Think => "think",
        }
    }

    /// Glyph that links the balloon to the figure.
    pub fn thoughts(self) -> &'static str {
        match self {
            Mode::Say => "\\",
            Mode::Think => "o",
        }
    }
}

/// Open and close glyphs for each row position. A one-row balloon only
/// has a first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub first: (char, char),
    pub middle: Option<(char, char)>,
    pub last: Option<(char, char)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalloonSpec {
    pub mode: Mode,
    pub line_count: usize,
    pub width: usize,
}

impl BalloonSpec {
    pub fn borders(&self) -> Borders {
        match (self.mode, self.line_count) {
            (Mode::Think, _) => Borders {
                first: ('(', ')'),
                middle: Some(('(', ')')),
                last: Some(('(', ')')),
            },
            (Mode::Say, 0 | 1) => Borders {
                first: ('<', '>'),
                middle: None,
                last: None,
            },
            (Mode::Say, _) => Borders {
                first: ('/', '\\'),
                middle: Some(('|', '|')),
                last: Some(('\\', '/')),
            },
        }
    }

    fn row_borders(&self, index: usize) -> (char, char) {
        let borders = self.borders();
        let shape = if index == 0 {
            None
        } else if index + 1 == self.line_count {
            borders.last
        } else {
            borders.middle
        };
        shape.unwrap_or(borders.first)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balloon {
    pub text: String,
    /// Connector glyph for the figure's thought slot.
    pub thoughts: &'static str,
}

/// Frames already padded `lines` in a balloon `width` columns wide.
/// Every row, including the bottom border, ends with a newline.
pub fn build_balloon<S: AsRef<str>>(mode: Mode, lines: &[S], width: usize) -> Balloon {
    let spec = BalloonSpec {
        mode,
        line_count: lines.len(),
        width,
    };

    let mut text = String::new();
    text.push(' ');
    text.push_str(&"_".repeat(spec.width + 2));
    text.push('\n');

    for (i, line) in lines.iter().enumerate() {
        let (open, close) = spec.row_borders(i);
        text.push_str(&format!("{open} {} {close}\n", line.as_ref()));
    }

    text.push(' ');
    text.push_str(&"-".repeat(spec.width + 2));
    text.push('\n');

    Balloon {
        text,
        thoughts: mode.thoughts(),
    }
}
