use crate::cli::CheckArgs;
use crate::config;
use crate::error::Result;
use lymburn::core::forcefield::evaluator::PairEvaluator;
use lymburn::core::models::ids::TypePair;
use lymburn::core::models::types::TypeRegistry;
use lymburn::engine::error::EngineError;
use tracing::{info, warn};

pub fn run(args: CheckArgs) -> Result<()> {
    let potential = config::load_potential(&args.config, &args.overrides)?;

    let registry = match &args.system {
        Some(path) => config::load_system(path)?.registry().clone(),
        None => potential.type_registry(),
    };
    info!("Checking pair coverage for {} type(s).", registry.len());

    let table = potential.parameter_table(&registry);
    for pair in table.missing_pairs(registry.len()) {
        let (a, b) = pair.types();
        warn!(
            "No strength for type pair ({}, {}).",
            registry.describe(a),
            registry.describe(b)
        );
    }

    let evaluator = potential
        .build_evaluator(&registry)
        .map_err(EngineError::from)?;

    println!(
        "Potential OK: {} form, {} cutoff, r_cut = {}, r_on = {}",
        evaluator.form(),
        evaluator.mode(),
        potential.cutoff.r_cut,
        potential.cutoff.r_on
    );
    print_pair_cutoffs(&evaluator, &registry);
    Ok(())
}

fn print_pair_cutoffs(evaluator: &PairEvaluator, registry: &TypeRegistry) {
    for pair in TypePair::all(registry.len()) {
        let (a, b) = pair.types();
        if let Some(r_cut) = evaluator.r_cut(a, b) {
            println!(
                "  ({}, {}): r_cut = {}",
                registry.describe(a),
                registry.describe(b),
                r_cut
            );
        }
    }
    println!("  largest cutoff: {}", evaluator.max_r_cut());
}
