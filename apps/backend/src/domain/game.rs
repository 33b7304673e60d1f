use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Betting round a game is in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    Blind,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Round {
    pub const ALL: [Round; 5] = [
        Round::Blind,
        Round::Flop,
        Round::Turn,
        Round::River,
        Round::Showdown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Round::Blind => "blind",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
            Round::Showdown => "showdown",
        }
    }
}

impl FromStr for Round {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Round::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::validation_other(format!("Invalid round: {s}")))
    }
}

/// Last action a player took in the current round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Checked,
    Raised,
    Called,
    Folded,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 4] = [
        PlayerStatus::Checked,
        PlayerStatus::Raised,
        PlayerStatus::Called,
        PlayerStatus::Folded,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::Checked => "checked",
            PlayerStatus::Raised => "raised",
            PlayerStatus::Called => "called",
            PlayerStatus::Folded => "folded",
        }
    }
}

impl FromStr for PlayerStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| DomainError::validation_other(format!("Invalid player status: {s}")))
    }
}
