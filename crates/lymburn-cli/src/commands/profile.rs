use crate::cli::ProfileArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::output::{self, ProfileRow};
use lymburn::engine::error::EngineError;
use tracing::info;

const DEFAULT_RANGE_FACTOR: f64 = 1.25;

pub fn run(args: ProfileArgs) -> Result<()> {
    let potential = config::load_potential(&args.config, &args.overrides)?;

    let (evaluator, pair) =
        potential.build_pair_evaluator(&args.pair.type_a, &args.pair.type_b)?;
    let (a, b) = pair.types();
    let r_cut = evaluator.r_cut(a, b).unwrap_or(potential.cutoff.r_cut);

    let (r_min, r_max) = sample_range(args.r_min, args.r_max, r_cut, args.points)?;
    info!(
        "Tabulating ({}, {}) at {} point(s) in [{}, {}].",
        args.pair.type_a, args.pair.type_b, args.points, r_min, r_max
    );

    let samples = evaluator
        .profile(a, b, r_min, r_max, args.points)
        .map_err(|source| EngineError::Evaluation { i: 0, j: 1, source })?;
    let rows: Vec<ProfileRow> = samples.iter().map(ProfileRow::from).collect();
    output::write_table(args.output.as_deref(), &rows)
}

/// Resolves the sampled interval; `r_max` defaults past the cutoff so smoothing is visible.
fn sample_range(
    r_min: Option<f64>,
    r_max: Option<f64>,
    r_cut: f64,
    points: usize,
) -> Result<(f64, f64)> {
    if points < 2 {
        return Err(CliError::Argument(format!(
            "--points must be at least 2, got {}",
            points
        )));
    }
    let r_max = r_max.unwrap_or(DEFAULT_RANGE_FACTOR * r_cut);
    let r_min = r_min.unwrap_or(r_max / points as f64);
    if !(r_min > 0.0 && r_min.is_finite()) {
        return Err(CliError::Argument(format!(
            "--r-min must be a positive distance, got {}",
            r_min
        )));
    }
    if !(r_max > r_min && r_max.is_finite()) {
        return Err(CliError::Argument(format!(
            "--r-max ({}) must be finite and larger than --r-min ({})",
            r_max, r_min
        )));
    }
    Ok((r_min, r_max))
}
