//! The full transition table: every outcome from every start state.

// format! with push_str keeps the layout code readable
#![allow(clippy::format_push_string)]

use serde::Serialize;

use crate::baserunning::{
    Base, BaseOccupancy, BaserunningState, OUTS_PER_HALF_INNING, Outcome, transition,
};
use crate::player::PlayerId;

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RulesTableRow {
    /// The plate-appearance outcome.
    pub outcome: Outcome,
    /// Outs before the play.
    pub outs_before: u8,
    /// Occupied bases before the play.
    pub bases_before: BaseOccupancy,
    /// Outs after the play.
    pub outs_after: u8,
    /// Occupied bases after the play.
    pub bases_after: BaseOccupancy,
    /// Runs that count.
    pub runs: u8,
    /// The play ended the half-inning.
    pub half_inning_over: bool,
}

/// Every transition, ordered by outcome, then outs, then base state.
///
/// 17 outcomes × 3 out counts × 8 base states = 408 rows. Runners are the
/// placeholders `r1`, `r2` and `r3`; the batter is `batter`.
#[must_use]
pub fn rules_table() -> Vec<RulesTableRow> {
    let batter = PlayerId::from("batter");
    let mut rows =
        Vec::with_capacity(Outcome::ALL.len() * usize::from(OUTS_PER_HALF_INNING) * 8);
    for outcome in Outcome::ALL {
        for outs in 0..OUTS_PER_HALF_INNING {
            for bases in BaseOccupancy::ALL {
                let before = placeholder_state(outs, bases);
                let result = transition(&before, outcome, &batter);
                rows.push(RulesTableRow {
                    outcome,
                    outs_before: outs,
                    bases_before: bases,
                    outs_after: result.state.outs(),
                    bases_after: result.state.occupancy(),
                    runs: result.runs_scored,
                    half_inning_over: result.half_inning_over,
                });
            }
        }
    }
    rows
}

fn placeholder_state(outs: u8, bases: BaseOccupancy) -> BaserunningState {
    let runner = |base: Base, name: &str| bases.is_occupied(base).then(|| PlayerId::from(name));
    BaserunningState::from_slots(
        outs,
        [
            runner(Base::First, "r1"),
            runner(Base::Second, "r2"),
            runner(Base::Third, "r3"),
        ],
    )
}

/// Aligned text table.
#[must_use]
pub fn rules_table_text(rows: &[RulesTableRow]) -> String {
    let mut output = String::new();
    output.push_str("outcome                 before      after       runs  end\n");
    output.push_str("----------------------  ----------  ----------  ----  ---\n");
    for row in rows {
        output.push_str(&format!(
            "{:<22}  {} {} outs   {} {} outs   {:>4}  {}\n",
            row.outcome.name(),
            row.bases_before,
            row.outs_before,
            row.bases_after,
            row.outs_after,
            row.runs,
            if row.half_inning_over { "yes" } else { "" }
        ));
    }
    output
}

/// CSV with a header row.
#[must_use]
pub fn rules_table_csv(rows: &[RulesTableRow]) -> String {
    let mut output = String::new();
    output.push_str("outcome,outs_before,bases_before,outs_after,bases_after,runs,half_inning_over\n");
    for row in rows {
        output.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            row.outcome.name(),
            row.outs_before,
            row.bases_before,
            row.outs_after,
            row.bases_after,
            row.runs,
            row.half_inning_over
        ));
    }
    output
}

/// Pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn rules_table_json(rows: &[RulesTableRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(rows: &[RulesTableRow], outcome: Outcome, outs: u8, bases: &str) -> RulesTableRow {
        let bases: BaseOccupancy = bases.parse().unwrap();
        rows.iter()
            .copied()
            .find(|row| row.outcome == outcome && row.outs_before == outs && row.bases_before == bases)
            .unwrap()
    }

    #[test]
    fn test_table_has_every_start_state() {
        let rows = rules_table();
        assert_eq!(rows.len(), 408);
        assert!(rows.iter().all(|row| row.outs_after < OUTS_PER_HALF_INNING));
    }

    #[test]
    fn test_table_rows() {
        let rows = rules_table();
        let walk = find(&rows, Outcome::Walk, 0, "123");
        assert_eq!((walk.runs, walk.bases_after.to_string().as_str()), (1, "123"));

        let flyout = find(&rows, Outcome::FlyOut, 2, "1-3");
        assert!(flyout.half_inning_over);
        assert_eq!(flyout.bases_after, BaseOccupancy::EMPTY);
        assert_eq!(flyout.outs_after, 0);
    }

    #[test]
    fn test_csv_shape() {
        let rows = rules_table();
        let csv = rules_table_csv(&rows);
        assert_eq!(csv.lines().count(), 409);
        assert!(csv.contains("\nhome_run,0,123,0,---,4,false\n"));
    }

    #[test]
    fn test_json_is_array() {
        let rows = rules_table();
        let json = rules_table_json(&rows[..2]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[0]["bases_before"], "---");
    }
}
