use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("cow '{0}' not found")]
    UnknownCharacter(String),

    #[error("malformed template for cow '{character}': {reason}")]
    TemplateSubstitution { character: String, reason: String },
}

pub type RenderResult<T> = Result<T, RenderError>;
