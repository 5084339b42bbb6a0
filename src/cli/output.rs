//! Output formatting for CLI commands.

// format! with push_str keeps the layout code readable
#![allow(clippy::format_push_string)]

use diamond::baserunning::{Destination, Origin};
use diamond::season::SeasonSummary;
use diamond::{BaserunningState, Outcome, PlayerId, TransitionResult};

const fn origin_name(origin: Origin) -> &'static str {
    match origin {
        Origin::Bench => "plate",
        Origin::First => "first",
        Origin::Second => "second",
        Origin::Third => "third",
    }
}

const fn destination_name(destination: Destination) -> &'static str {
    match destination {
        Destination::First => "first",
        Destination::Second => "second",
        Destination::Third => "third",
        Destination::Home => "home",
        Destination::Dugout => "out",
    }
}

/// Format a single transition as human-readable text.
pub(super) fn format_transition_text(
    before: &BaserunningState,
    outcome: Outcome,
    batter: &PlayerId,
    result: &TransitionResult,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Before:  {before}\n"));
    output.push_str(&format!(
        "Outcome: {outcome} ({}) by {batter}\n",
        outcome.abbreviation()
    ));
    output.push_str(&format!("After:   {}\n", result.state));
    output.push_str(&format!("Runs:    {}", result.runs_scored));
    if !result.scorers.is_empty() {
        let scorers: Vec<&str> = result.scorers.iter().map(PlayerId::as_str).collect();
        output.push_str(&format!(" ({})", scorers.join(", ")));
    }
    output.push('\n');
    if result.half_inning_over {
        output.push_str(&format!(
            "Half-inning over, {} left on base\n",
            result.left_on_base
        ));
    }

    if !result.advancement.is_empty() {
        output.push_str("\nMovement:\n");
        for event in &result.advancement {
            output.push_str(&format!(
                "  {}: {} -> {}\n",
                event.runner,
                origin_name(event.from),
                destination_name(event.to)
            ));
        }
    }

    output
}

/// Format season standings and failures as human-readable text.
pub(super) fn format_season_text(name: &str, summary: &SeasonSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Season {name} ({} games)\n",
        summary.games_replayed
    ));
    output.push_str("========================================\n\n");

    let width = summary
        .teams
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(4);
    output.push_str(&format!(
        "{:width$}    W    L    T   PCT    RF    RA\n",
        "Team"
    ));
    for (team, record) in summary.standings() {
        output.push_str(&format!(
            "{team:width$} {:>4} {:>4} {:>4} {:>5.3} {:>5} {:>5}\n",
            record.wins,
            record.losses,
            record.ties,
            record.winning_percentage(),
            record.runs_for,
            record.runs_against
        ));
    }

    if !summary.failed.is_empty() {
        output.push_str(&format!("\nFailed games ({}):\n", summary.failed.len()));
        for failed in &summary.failed {
            output.push_str(&format!("  #{} {}: {}\n", failed.index, failed.id, failed.message));
        }
    }

    output
}

/// Format season standings as CSV.
pub(super) fn format_season_csv(summary: &SeasonSummary) -> String {
    let mut output = String::new();

    // Header
    output.push_str("team,games,wins,losses,ties,win_pct,runs_for,runs_against\n");

    // Data rows
    for (team, record) in summary.standings() {
        output.push_str(&format!(
            "{},{},{},{},{},{:.4},{},{}\n",
            team,
            record.games(),
            record.wins,
            record.losses,
            record.ties,
            record.winning_percentage(),
            record.runs_for,
            record.runs_against
        ));
    }

    output
}
