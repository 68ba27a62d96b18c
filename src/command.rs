//! Interpreter for `moo` command text, e.g. `think dragon dead hello there`.
//!
//! Words are consumed left to right: an optional action, then an optional
//! cow name, then an optional mood name. Everything after that is the
//! message.

use rand::Rng;
use thiserror::Error;

use crate::balloon::Mode;
use crate::errors::RenderError;
use crate::render::{render, RenderRequest, DEFAULT_COLUMNS};
use crate::{catalog, mood};

pub const COMMAND: &str = "moo";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("message is required")]
    MissingMessage,

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Say,
    Think,
    List,
    Help,
    Surprise,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Say,
        Action::Think,
        Action::List,
        Action::Help,
        Action::Surprise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Say => "say",
            Action::Think => "think",
            Action::List => "list",
            Action::Help => "help",
            Action::Surprise => "surprise",
        }
    }

    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MooCommand {
    pub action: Action,
    pub cow: String,
    pub mood: Option<String>,
    pub message: String,
    pub columns: isize,
}

impl MooCommand {
    /// Splits `text` on whitespace and parses the words.
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        Self::from_words(&words)
    }

    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, CommandError> {
        let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        let mut rest = words.into_iter().peekable();

        let action = rest
            .next_if(|w| Action::parse(w).is_some())
            .and_then(Action::parse)
            .unwrap_or(Action::Say);
        let cow = rest
            .next_if(|w| *w == catalog::RANDOM || catalog::exists(w))
            .unwrap_or(catalog::DEFAULT)
            .to_string();
        let mood = rest
            .next_if(|w| *w == mood::RANDOM || mood::exists(w))
            .map(str::to_string);
        let message = rest.collect::<Vec<_>>().join(" ");

        let needs_message = matches!(action, Action::Say | Action::Think | Action::Surprise);
        if needs_message && message.is_empty() {
            return Err(CommandError::MissingMessage);
        }

        Ok(Self {
            action,
            cow,
            mood,
            message,
            columns: DEFAULT_COLUMNS,
        })
    }

    /// Wrap width for the rendered balloon.
    pub fn columns(mut self, columns: isize) -> Self {
        self.columns = columns;
        self
    }

    /// Runs the command and returns the text to show.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, CommandError> {
        let mode = match self.action {
            Action::Help => return Ok(help_text()),
            Action::List => return Ok(list_text()),
            Action::Say => Mode::Say,
            Action::Think => Mode::Think,
            Action::Surprise => {
                if rng.gen_bool(0.5) {
                    Mode::Think
                } else {
                    Mode::Say
                }
            }
        };

        let (cow, mood) = if self.action == Action::Surprise {
            (catalog::random(rng).to_string(), Some(mood::random(rng).to_string()))
        } else {
            let cow = catalog::resolve(&self.cow, rng).to_string();
            let mood = match self.mood.as_deref() {
                Some(mood::RANDOM) => Some(mood::random(rng).to_string()),
                other => other.map(str::to_string),
            };
            (cow, mood)
        };

        let mut request = RenderRequest::new([self.message.as_str()])
            .character(cow)
            .mode(mode)
            .columns(self.columns);
        request.mood = mood;

        Ok(render(&request, rng)?)
    }
}

pub fn usage() -> String {
    format!(
        "Usage: {COMMAND} [{}|{}|{}|{}|{}] [cow] [mood] message",
        Action::Say.as_str(),
        Action::Think.as_str(),
        Action::Surprise.as_str(),
        Action::List.as_str(),
        Action::Help.as_str(),
    )
}

pub fn list_text() -> String {
    let mut cows = vec![catalog::RANDOM];
    cows.extend(catalog::names());
    let mut moods = vec![mood::RANDOM];
    moods.extend(mood::names());

    format!("Cows: {}\nMoods: {}\n", cows.join(", "), moods.join(", "))
}

pub fn help_text() -> String {
    format!("{}\n{}", usage(), list_text())
}
