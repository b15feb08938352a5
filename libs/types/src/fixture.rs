//! Match fixture types
//!
//! Field names on the wire are the Portuguese names the existing data files
//! and front-end use (`time_casa`, `gols_time_casa`, `concluido`, ...);
//! internally everything is addressed by the English field names.

use crate::ids::{CompetitionId, MatchId};
use serde::{Deserialize, Serialize};

/// A match fixture, scheduled or played
///
/// Goal counts are optional because a fixture that has not been played yet
/// carries no score. Whether a completed match actually has both counts is
/// a ranking-time concern, not a storage-time one: the store round-trips
/// whatever it is given and the standings engine rejects malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,

    /// Round number within the competition, when applicable
    #[serde(rename = "rodada", default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,

    // Display strings, kept opaque: the engine never orders by date, it
    // trusts the file order (chronological play order).
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub kickoff: String,
    #[serde(rename = "local")]
    pub venue: String,

    #[serde(rename = "time_casa")]
    pub home_team: String,
    #[serde(rename = "time_fora")]
    pub away_team: String,

    #[serde(rename = "gols_time_casa", default, skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<u32>,
    #[serde(rename = "gols_time_fora", default, skip_serializing_if = "Option::is_none")]
    pub away_goals: Option<u32>,

    #[serde(rename = "concluido")]
    pub completed: bool,

    #[serde(rename = "competicao")]
    pub competition: CompetitionId,

    /// Stage label, e.g. "fase de grupos"
    #[serde(rename = "etapa")]
    pub stage: String,
}

impl Match {
    /// Both goal counts, if present
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.home_goals, self.away_goals) {
            (Some(h), Some(a)) => Some((h, a)),
            _ => None,
        }
    }
}

/// Payload for creating a match (everything but the id, which the store
/// assigns)
#[derive(Debug, Clone, Deserialize)]
pub struct NewMatch {
    #[serde(rename = "rodada", default)]
    pub round: Option<u32>,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub kickoff: String,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "time_casa")]
    pub home_team: String,
    #[serde(rename = "time_fora")]
    pub away_team: String,
    #[serde(rename = "gols_time_casa", default)]
    pub home_goals: Option<u32>,
    #[serde(rename = "gols_time_fora", default)]
    pub away_goals: Option<u32>,
    #[serde(rename = "concluido")]
    pub completed: bool,
    #[serde(rename = "competicao")]
    pub competition: CompetitionId,
    #[serde(rename = "etapa")]
    pub stage: String,
}

impl NewMatch {
    /// Materialize into a stored match with the given id
    pub fn into_match(self, id: MatchId) -> Match {
        Match {
            id,
            round: self.round,
            date: self.date,
            kickoff: self.kickoff,
            venue: self.venue,
            home_team: self.home_team,
            away_team: self.away_team,
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            completed: self.completed,
            competition: self.competition,
            stage: self.stage,
        }
    }
}

/// Partial update for an existing match (score-editing flow)
///
/// Every field is optional; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchUpdate {
    #[serde(rename = "rodada", default)]
    pub round: Option<u32>,
    #[serde(rename = "data", default)]
    pub date: Option<String>,
    #[serde(rename = "hora", default)]
    pub kickoff: Option<String>,
    #[serde(rename = "local", default)]
    pub venue: Option<String>,
    #[serde(rename = "time_casa", default)]
    pub home_team: Option<String>,
    #[serde(rename = "time_fora", default)]
    pub away_team: Option<String>,
    #[serde(rename = "gols_time_casa", default)]
    pub home_goals: Option<u32>,
    #[serde(rename = "gols_time_fora", default)]
    pub away_goals: Option<u32>,
    #[serde(rename = "concluido", default)]
    pub completed: Option<bool>,
    #[serde(rename = "etapa", default)]
    pub stage: Option<String>,
}

impl MatchUpdate {
    /// Apply this update on top of an existing match
    pub fn apply(&self, m: &mut Match) {
        if let Some(round) = self.round {
            m.round = Some(round);
        }
        if let Some(date) = &self.date {
            m.date = date.clone();
        }
        if let Some(kickoff) = &self.kickoff {
            m.kickoff = kickoff.clone();
        }
        if let Some(venue) = &self.venue {
            m.venue = venue.clone();
        }
        if let Some(home_team) = &self.home_team {
            m.home_team = home_team.clone();
        }
        if let Some(away_team) = &self.away_team {
            m.away_team = away_team.clone();
        }
        if let Some(home_goals) = self.home_goals {
            m.home_goals = Some(home_goals);
        }
        if let Some(away_goals) = self.away_goals {
            m.away_goals = Some(away_goals);
        }
        if let Some(completed) = self.completed {
            m.completed = completed;
        }
        if let Some(stage) = &self.stage {
            m.stage = stage.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> Match {
        Match {
            id: MatchId::new(1),
            round: Some(3),
            date: "2025-04-12".to_string(),
            kickoff: "16:00".to_string(),
            venue: "Maracanã".to_string(),
            home_team: "Flamengo".to_string(),
            away_team: "Palmeiras".to_string(),
            home_goals: Some(2),
            away_goals: Some(1),
            completed: true,
            competition: CompetitionId::new("brasileirao"),
            stage: "fase de grupos".to_string(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_match()).unwrap();
        assert_eq!(json["time_casa"], "Flamengo");
        assert_eq!(json["time_fora"], "Palmeiras");
        assert_eq!(json["gols_time_casa"], 2);
        assert_eq!(json["gols_time_fora"], 1);
        assert_eq!(json["concluido"], true);
        assert_eq!(json["competicao"], "brasileirao");
        assert_eq!(json["rodada"], 3);
        assert_eq!(json["etapa"], "fase de grupos");
    }

    #[test]
    fn test_scheduled_match_omits_score() {
        let mut m = sample_match();
        m.completed = false;
        m.home_goals = None;
        m.away_goals = None;

        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("gols_time_casa").is_none());
        assert!(json.get("gols_time_fora").is_none());
        assert_eq!(m.score(), None);
    }

    #[test]
    fn test_deserialize_legacy_record() {
        // Data files may carry extra fields (crest URLs from old imports);
        // they must be ignored, and missing score fields must read as None.
        let json = r#"{
            "id": 9,
            "data": "2025-05-01",
            "hora": "19:30",
            "local": "Morumbi",
            "time_casa": "São Paulo",
            "time_fora": "Santos",
            "concluido": false,
            "competicao": "brasileirao",
            "etapa": "fase de grupos",
            "escudo_time": "/escudos/sao_paulo.png"
        }"#;

        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, MatchId::new(9));
        assert_eq!(m.round, None);
        assert_eq!(m.score(), None);
        assert!(!m.completed);
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut m = sample_match();
        let update = MatchUpdate {
            home_goals: Some(4),
            away_goals: Some(4),
            completed: Some(true),
            ..Default::default()
        };

        update.apply(&mut m);
        assert_eq!(m.score(), Some((4, 4)));
        assert_eq!(m.home_team, "Flamengo");
        assert_eq!(m.venue, "Maracanã");
    }

    #[test]
    fn test_new_match_into_match() {
        let new_match: NewMatch = serde_json::from_str(
            r#"{
                "data": "2025-06-01",
                "hora": "21:00",
                "local": "Mineirão",
                "time_casa": "Cruzeiro",
                "time_fora": "Atlético-MG",
                "concluido": false,
                "competicao": "Brasileirao",
                "etapa": "fase de grupos"
            }"#,
        )
        .unwrap();

        let m = new_match.into_match(MatchId::new(12));
        assert_eq!(m.id, MatchId::new(12));
        assert_eq!(m.competition.as_str(), "brasileirao");
    }
}
