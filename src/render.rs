use rand::Rng;
use serde::Deserialize;

use crate::balloon::{build_balloon, Mode};
use crate::errors::RenderResult;
use crate::figure::{render_figure, Face};
use crate::text::{max_width, pad, TextWrapper};
use crate::{catalog, mood, phrases};

pub const DEFAULT_COLUMNS: isize = 40;

/// One render call's worth of input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    #[serde(rename = "text", deserialize_with = "one_or_many")]
    pub lines: Vec<String>,
    #[serde(rename = "cow")]
    pub character: String,
    pub mood: Option<String>,
    #[serde(rename = "action")]
    pub mode: Mode,
    pub columns: isize,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            character: catalog::DEFAULT.to_string(),
            mood: None,
            mode: Mode::Say,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl RenderRequest {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn character(mut self, name: impl Into<String>) -> Self {
        self.character = name.into();
        self
    }

    pub fn mood(mut self, name: impl Into<String>) -> Self {
        self.mood = Some(name.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn columns(mut self, columns: isize) -> Self {
        self.columns = columns;
        self
    }
}

// Accepts either a single string or a list of strings for `text`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(line) => vec![line],
        OneOrMany::Many(lines) => lines,
    })
}

/// Renders the balloon followed by the figure.
///
/// Only an unknown cow (or a malformed cow template) fails. An unknown
/// mood renders with the default face, and empty text is replaced with a
/// stock phrase picked from `rng`. Columns below one are treated as one.
pub fn render<R: Rng + ?Sized>(request: &RenderRequest, rng: &mut R) -> RenderResult<String> {
    let template = catalog::get(&request.character)?;
    let mood = mood::resolve(request.mood.as_deref());

    let mut lines = TextWrapper::wrap(&request.lines, request.columns);
    if lines.is_empty() {
        lines.push(phrases::random(rng).to_string());
    }

    let width = max_width(&lines).max(0) as usize;
    let lines = pad(&lines, width);
    let balloon = build_balloon(request.mode, &lines, width);

    let face = Face {
        eyes: mood.eyes,
        tongue: mood.tongue,
        thoughts: balloon.thoughts,
    };
    let figure = render_figure(&request.character, template, &face)?;

    Ok(balloon.text + &figure)
}
