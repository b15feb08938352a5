//! Standings computation
//!
//! Validates, folds and ranks in three passes. Validation runs first over
//! every completed match so a malformed record rejects the whole call
//! before any row exists; the fold then never sees bad data.

use std::collections::HashMap;
use thiserror::Error;
use types::fixture::Match;
use types::ids::MatchId;
use types::standings::{Outcome, StandingRow};

use crate::ordering;
use crate::tally::TeamTally;

/// Rejection of a malformed completed match
///
/// The table is all-or-nothing: any of these aborts the computation with no
/// rows produced. Silently repairing the record would corrupt the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    #[error("match {id} is completed but is missing a goal count")]
    MissingScore { id: MatchId },

    #[error("match {id} has the same team on both sides: {team}")]
    SameTeam { id: MatchId, team: String },

    #[error("match {id} has a blank team name")]
    BlankTeam { id: MatchId },
}

/// Compute the ranked table for one competition
///
/// `matches` must be in chronological play order (earliest first); that
/// order defines each team's recent-form window. Scheduled matches
/// (`completed == false`) are ignored entirely, goal values included.
pub fn compute_standings(matches: &[Match]) -> Result<Vec<StandingRow>, StandingsError> {
    let completed = validate(matches)?;

    let mut tallies: HashMap<&str, TeamTally> = HashMap::new();
    for (m, (home_goals, away_goals)) in &completed {
        let home_outcome = Outcome::from_score(*home_goals, *away_goals);

        tallies
            .entry(m.home_team.as_str())
            .or_insert_with(|| TeamTally::new(&m.home_team))
            .record(home_outcome, *home_goals, *away_goals);
        tallies
            .entry(m.away_team.as_str())
            .or_insert_with(|| TeamTally::new(&m.away_team))
            .record(home_outcome.reverse(), *away_goals, *home_goals);
    }

    // The comparator is total (team name as final criterion), so map
    // iteration order never shows through.
    let mut table: Vec<TeamTally> = tallies.into_values().collect();
    table.sort_by(ordering::table_order);

    Ok(table
        .into_iter()
        .enumerate()
        .map(|(i, tally)| tally.into_row(i as u32 + 1))
        .collect())
}

/// Check every completed match and pair it with its score
fn validate(matches: &[Match]) -> Result<Vec<(&Match, (u32, u32))>, StandingsError> {
    let mut completed = Vec::new();
    for m in matches.iter().filter(|m| m.completed) {
        if m.home_team.trim().is_empty() || m.away_team.trim().is_empty() {
            return Err(StandingsError::BlankTeam { id: m.id });
        }
        if m.home_team == m.away_team {
            return Err(StandingsError::SameTeam {
                id: m.id,
                team: m.home_team.clone(),
            });
        }
        let score = m
            .score()
            .ok_or(StandingsError::MissingScore { id: m.id })?;
        completed.push((m, score));
    }
    Ok(completed)
}
