//! Season command implementation.

use super::output::{format_season_csv, format_season_text};
use super::{CliError, SeasonFormat, game_config};
use diamond::script::SeasonScript;
use diamond::season::replay_season_with_progress;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;

/// Execute the season command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded, the configuration is
/// invalid, or the thread pool cannot be built.
pub(crate) fn execute(
    script: &Path,
    threads: Option<usize>,
    progress: bool,
    innings: Option<u16>,
    max_innings: Option<u16>,
    format: SeasonFormat,
) -> Result<(), CliError> {
    let season = SeasonScript::load(script)?;
    let config = game_config(season.config, innings, max_innings)?;

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = threads {
        pool = pool.num_threads(num_threads);
    }
    let pool = pool.build()?;

    let pb = if progress {
        let pb = ProgressBar::new(season.games.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})",
            )?
            .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let summary = pool.install(|| {
        replay_season_with_progress(&season, config, || {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        })
    });
    let duration = start.elapsed();

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    match format {
        SeasonFormat::Text => {
            print!("{}", format_season_text(&season.name, &summary));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        SeasonFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        SeasonFormat::Csv => print!("{}", format_season_csv(&summary)),
    }
    Ok(())
}
