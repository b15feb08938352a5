//! Standings table types
//!
//! One `StandingRow` per team, derived from completed matches only. Wire
//! names match what the front-end table renders (`pontos`, `golsPro`,
//! `ultimos5`, ...).

use serde::{Deserialize, Serialize};

/// Match outcome from one team's perspective
///
/// Serializes to the single-letter markers the front-end paints the form
/// dots with: `v` (vitória), `e` (empate), `d` (derrota).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "v")]
    Win,
    #[serde(rename = "e")]
    Draw,
    #[serde(rename = "d")]
    Loss,
}

impl Outcome {
    /// Outcome for the team that scored `scored` and conceded `conceded`
    pub fn from_score(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Points this outcome awards
    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }

    /// The same result seen from the opposing team
    pub fn reverse(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }
}

/// Maximum number of outcomes kept in a team's recent-form window
pub const FORM_WINDOW: usize = 5;

/// One ranked line of a competition table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    #[serde(rename = "time")]
    pub team: String,
    #[serde(rename = "pontos")]
    pub points: u32,
    #[serde(rename = "jogos")]
    pub played: u32,
    #[serde(rename = "vitorias")]
    pub wins: u32,
    #[serde(rename = "empates")]
    pub draws: u32,
    #[serde(rename = "derrotas")]
    pub losses: u32,
    #[serde(rename = "golsPro")]
    pub goals_for: u32,
    #[serde(rename = "golsContra")]
    pub goals_against: u32,
    /// May be negative
    #[serde(rename = "saldoGols")]
    pub goal_difference: i32,
    /// Last up-to-5 outcomes, oldest first
    #[serde(rename = "ultimos5")]
    pub recent_form: Vec<Outcome>,
    /// 1-based position after sorting
    #[serde(rename = "posicao")]
    pub rank: u32,
}
