use crate::cli::EvaluateArgs;
use crate::config;
use crate::error::Result;
use crate::output;
use lymburn::engine::tasks::force_pass::Execution;
use lymburn::workflows;
use tracing::info;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let potential = config::load_potential(&args.config, &args.overrides)?;
    info!("Loading system from {:?}", &args.system);
    let system = config::load_system(&args.system)?;

    let execution = if args.serial {
        Execution::Serial
    } else {
        Execution::preferred()
    };
    info!("Invoking the evaluation workflow ({:?})...", execution);
    let report = workflows::evaluate::run(&system, &potential, execution)?;

    let net = report.net_force();
    eprintln!(
        "Evaluated {} pair(s) among {} particle(s).",
        report.num_pairs,
        system.len()
    );
    eprintln!("  Total energy:   {:.8e}", report.total_energy());
    eprintln!(
        "  Net force:      ({:.3e}, {:.3e}, {:.3e})",
        net.x, net.y, net.z
    );
    eprintln!("  Virial trace:   {:.8e}", report.virial.trace());

    output::write_table(
        args.output.as_deref(),
        &output::force_rows(&system, &report),
    )
}
