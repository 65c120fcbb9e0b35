//! Textual puzzle notation.
//!
//! A puzzle is written as a bracketed list of tubes, each tube a bracketed
//! list of color numbers read top to bottom:
//! `[[], [0, 1, 1], [2, 0, 1], [0, 2, 2]]`. Internally tubes are stored
//! bottom-to-top, so parsing and formatting reverse each tube.

use thiserror::Error;

use crate::state::{Color, InvalidPuzzleError, PuzzleState};

/// Raised when puzzle text cannot be turned into a state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The text is not well-formed notation.
    #[error("malformed puzzle notation: {0}")]
    Syntax(String),
    /// The text parsed, but the contents violate the puzzle invariants.
    #[error(transparent)]
    Invalid(#[from] InvalidPuzzleError),
}

/// Parses puzzle notation into a validated state.
pub fn parse(input: &str) -> Result<PuzzleState, NotationError> {
    let inner = input
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| NotationError::Syntax("expected outer brackets".to_string()))?;

    let mut tubes = Vec::new();
    let mut rest = inner;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }
        let body = rest
            .strip_prefix('[')
            .ok_or_else(|| NotationError::Syntax("expected '[' to open a tube".to_string()))?;
        let end = body
            .find(']')
            .ok_or_else(|| NotationError::Syntax("unclosed tube".to_string()))?;

        let mut tube = Vec::new();
        let content = body[..end].trim();
        if !content.is_empty() {
            for token in content.split(',') {
                let token = token.trim();
                let color: Color = token
                    .parse()
                    .map_err(|_| NotationError::Syntax(format!("invalid color `{token}`")))?;
                tube.push(color);
            }
        }

        // notation lists the top first; storage is bottom-to-top
        tube.reverse();
        tubes.push(tube);
        rest = &body[end + 1..];
    }

    Ok(PuzzleState::new(tubes)?)
}

/// Formats a state in the same notation [`parse`] accepts.
pub fn format(state: &PuzzleState) -> String {
    let mut out = String::from("[");
    for (i, tube) in state.tubes().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('[');
        for (j, color) in tube.iter().rev().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&color.to_string());
        }
        out.push(']');
    }
    out.push(']');
    out
}
