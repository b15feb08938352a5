//! Per-team running tally
//!
//! One accumulator per team, created lazily the first time the team appears
//! in a completed match. Holds both the counters and the full ordered
//! outcome log; the log is only cut down to the form window when the tally
//! is turned into a table row.

use types::standings::{Outcome, StandingRow, FORM_WINDOW};

/// Running totals for one team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTally {
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Every outcome in play order, not yet truncated
    pub outcomes: Vec<Outcome>,
}

impl TeamTally {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            outcomes: Vec::new(),
        }
    }

    /// Fold one completed match into the tally, from this team's perspective
    pub fn record(&mut self, outcome: Outcome, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    /// Finish the tally into a ranked row, keeping only the last
    /// `FORM_WINDOW` outcomes (oldest first)
    pub fn into_row(self, rank: u32) -> StandingRow {
        let start = self.outcomes.len().saturating_sub(FORM_WINDOW);
        let recent_form = self.outcomes[start..].to_vec();

        StandingRow {
            points: self.points(),
            goal_difference: self.goal_difference(),
            team: self.team,
            played: self.played,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            recent_form,
            rank,
        }
    }
}
