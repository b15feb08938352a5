//! Table ordering
//!
//! Comparator giving the table its total order. Classification criteria,
//! in sequence: points, goal difference, goals scored (all descending).
//! Teams still level after those are ordered by name ascending, which makes
//! the order total and the output deterministic.

use crate::tally::TeamTally;
use std::cmp::Ordering;

/// Compare two tallies for table position (`Less` means ranked higher)
pub fn table_order(a: &TeamTally, b: &TeamTally) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}
