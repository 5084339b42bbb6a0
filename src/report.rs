//! Human-readable and machine-readable reports.
//!
//! - [`describe_play`] and [`render_game`]: play-by-play and box score text
//! - [`rules_table`]: every transition from every start state, for auditing
//!   the baserunning rules

mod table;
mod text;

pub use table::{RulesTableRow, rules_table, rules_table_csv, rules_table_json, rules_table_text};
pub use text::{describe_play, render_game, render_line_score};
