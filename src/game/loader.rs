//! Bulk card source parsing.
//!
//! One card per line, whitespace-separated:
//!
//! ```text
//! <card_id> [<player_id>] <word>...
//! ```
//!
//! The second token is taken as a player id when it looks like one: a
//! letter followed by only digits (`J1`, `p042`). Blank lines are skipped.
//! Registration itself happens in `BingoManager`, one line at a time.

use crate::core::{LineError, LoadError};

/// A parsed, not yet validated, card line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLine<'a> {
    pub id: &'a str,
    pub player: Option<&'a str>,
    pub words: Vec<&'a str>,
}

/// Check whether a token has the shape of a player id.
///
/// ```
/// use word_bingo::game::is_player_id;
///
/// assert!(is_player_id("J1"));
/// assert!(is_player_id("p042"));
/// assert!(!is_player_id("J"));
/// assert!(!is_player_id("casa"));
/// assert!(!is_player_id("12"));
/// ```
#[must_use]
pub fn is_player_id(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Split a line into id, optional player and words.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<CardLine<'_>>, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [_] => Err(LineError::MissingWords),
        [id, second, rest @ ..] => {
            let (player, words) = if is_player_id(second) {
                (Some(*second), rest.to_vec())
            } else {
                (None, tokens[1..].to_vec())
            };
            if words.is_empty() {
                return Err(LineError::NoWords);
            }
            Ok(Some(CardLine {
                id: *id,
                player,
                words,
            }))
        }
    }
}

/// A problem found while loading a card source.
#[derive(Debug)]
pub enum LoadIssue {
    /// A single line was skipped.
    Line { number: usize, error: LineError },
    /// The whole source could not be read.
    Source(LoadError),
}

impl std::fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadIssue::Line { number, error } => write!(f, "line {number}: {error}"),
            LoadIssue::Source(err) => write!(f, "{err}"),
        }
    }
}

/// Outcome of a bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Cards registered.
    pub loaded: usize,
    /// Lines rejected.
    pub failed: usize,
    /// Every problem, in source order.
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Report for a source that could not be read at all.
    #[must_use]
    pub fn unreadable(err: LoadError) -> Self {
        Self {
            loaded: 0,
            failed: 0,
            issues: vec![LoadIssue::Source(err)],
        }
    }

    /// Record a rejected line.
    pub fn reject(&mut self, number: usize, error: LineError) {
        log::warn!("Card source line {}: {}", number, error);
        self.failed += 1;
        self.issues.push(LoadIssue::Line { number, error });
    }
}
