//! Literal slot substitution for cow templates.
//!
//! A template is fixed art with `$eyes`, `$tongue` and `$thoughts` slots.
//! Substitution is a single left-to-right pass, so inserted glyphs are
//! never rescanned and the art's backslashes and braces stay literal.

use crate::errors::{RenderError, RenderResult};

pub const EYES: &str = "eyes";
pub const TONGUE: &str = "tongue";
pub const THOUGHTS: &str = "thoughts";

/// Glyphs for the three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face<'a> {
    pub eyes: &'a str,
    pub tongue: &'a str,
    pub thoughts: &'a str,
}

impl Face<'_> {
    fn slot(&self, name: &str) -> Option<&str> {
        match name {
            EYES => Some(self.eyes),
            TONGUE => Some(self.tongue),
            THOUGHTS => Some(self.thoughts),
            _ => None,
        }
    }
}

pub fn render_figure(character: &str, template: &str, face: &Face<'_>) -> RenderResult<String> {
    let malformed = |reason: String| RenderError::TemplateSubstitution {
        character: character.to_string(),
        reason,
    };

    let mut out = String::with_capacity(template.len());
    let mut saw_thoughts = false;
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let ident_len = after
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(after.len());

        if ident_len == 0 || !after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            // A bare dollar sign is part of the art.
            out.push('$');
            rest = after;
            continue;
        }

        let name = &after[..ident_len];
        let value = face
            .slot(name)
            .ok_or_else(|| malformed(format!("unknown slot ${name}")))?;
        saw_thoughts |= name == THOUGHTS;
        out.push_str(value);
        rest = &after[ident_len..];
    }
    out.push_str(rest);

    if !saw_thoughts {
        return Err(malformed(format!("missing ${THOUGHTS} slot")));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACE: Face<'static> = Face {
        eyes: "xx",
        tongue: "U ",
        thoughts: "\\",
    };

    #[test]
    fn test_substitutes_all_slots() {
        let out = render_figure("t", " $thoughts ($eyes)\n  $tongue||\n", &FACE).unwrap();
        assert_eq!(out, " \\ (xx)\n  U ||\n");
    }

    #[test]
    fn test_repeated_slots() {
        let out = render_figure("t", "$thoughts\n $thoughts\n", &FACE).unwrap();
        assert_eq!(out, "\\\n \\\n");
    }

    #[test]
    fn test_art_braces_and_backslashes_are_literal() {
        let template = "$thoughts {{.Eyes}} \\_/ {~._.~}\n";
        let out = render_figure("t", template, &FACE).unwrap();
        assert_eq!(out, "\\ {{.Eyes}} \\_/ {~._.~}\n");
    }

    #[test]
    fn test_inserted_values_are_not_rescanned() {
        let face = Face {
            eyes: "$tongue",
            ..FACE
        };
        let out = render_figure("t", "$thoughts $eyes", &face).unwrap();
        assert_eq!(out, "\\ $tongue");
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        let out = render_figure("t", "$thoughts $$ $ 5$", &FACE).unwrap();
        assert_eq!(out, "\\ $$ $ 5$");
    }

    #[test]
    fn test_unknown_slot_is_an_error() {
        let err = render_figure("bad", "$thoughts $nose", &FACE).unwrap_err();
        assert_eq!(
            err,
            RenderError::TemplateSubstitution {
                character: "bad".to_string(),
                reason: "unknown slot $nose".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_thoughts_slot_is_an_error() {
        let err = render_figure("bad", "($eyes)", &FACE).unwrap_err();
        assert!(matches!(err, RenderError::TemplateSubstitution { .. }));
    }
}
