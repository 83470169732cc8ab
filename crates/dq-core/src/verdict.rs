//! Final accusation
//!
//! Compares the player's guess against the most-cited suspects. A tie
//! means any of the tied suspects counts as a correct accusation.

use std::fmt;

use serde::Serialize;

use crate::suspects::SuspectIndex;

/// Result of an accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// No suspect has any clue against them
    NoEvidence,
    /// The guess names one of the most-cited suspects
    Match {
        suspect: String,
        most_cited: Vec<String>,
    },
    /// The guess is missing or names someone else
    NoMatch {
        guess: Option<String>,
        most_cited: Vec<String>,
    },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match { .. })
    }
}

/// Judge `guess` against the evidence in `suspects`
///
/// Surrounding whitespace is trimmed; the comparison itself is exact and
/// case-sensitive.
pub fn judge(suspects: &SuspectIndex, guess: Option<&str>) -> Verdict {
    let most_cited = suspects.most_cited();
    if most_cited.is_empty() {
        return Verdict::NoEvidence;
    }
    let guess = guess.map(str::trim).filter(|g| !g.is_empty());
    match guess {
        Some(g) if most_cited.iter().any(|name| name == g) => Verdict::Match {
            suspect: g.to_string(),
            most_cited,
        },
        _ => Verdict::NoMatch {
            guess: guess.map(str::to_string),
            most_cited,
        },
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NoEvidence => f.write_str("No evidence was collected against anyone."),
            Verdict::Match { suspect, most_cited } => {
                if most_cited.len() > 1 {
                    write!(
                        f,
                        "Correct! {suspect} is among the most cited suspects ({}).",
                        most_cited.join(", ")
                    )
                } else {
                    write!(f, "Correct! The evidence points to {suspect}.")
                }
            }
            Verdict::NoMatch { guess, most_cited } => {
                let accused = guess.as_deref().unwrap_or("nobody");
                write!(
                    f,
                    "You accused {accused}, but the evidence points to {}.",
                    most_cited.join(" or ")
                )
            }
        }
    }
}
