//! Card type keys.

use serde::{Deserialize, Serialize};

/// Card types the toolkit knows how to use.
///
/// The string form is the key used in `codex/index.yaml`.
///
/// # Examples
///
/// ```
/// use fabula_codex::CardType;
/// use std::str::FromStr;
///
/// assert_eq!(CardType::CharOvertime.as_ref(), "CHAR_OVERTIME");
/// assert_eq!(CardType::from_str("LOC").unwrap(), CardType::Loc);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    /// Base character cards
    Char,
    /// Character-over-time cards
    CharOvertime,
    /// Location cards
    Loc,
    /// Plot thread cards
    Thread,
    /// Style guides
    Style,
    /// Voice guides
    Voice,
}

impl CardType {
    /// Folder this type lives in when the codex has no index file.
    pub fn default_folder(&self) -> &'static str {
        match self {
            CardType::Char => "characters",
            CardType::CharOvertime => "characters_over_time",
            CardType::Loc => "locations",
            CardType::Thread => "threads",
            CardType::Style => "style",
            CardType::Voice => "voice",
        }
    }
}
