mod cli;
mod log_sink;
mod summary;

use std::{env, process};

use anyhow::{Context, Result};
use log::info;
use regression::{Analysis, Dataset, SolverConfig};

use cli::{Args, USAGE};
use log_sink::{LogSink, log_results};
use summary::Summary;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let spec = args.spec()?;
    let mut sink = LogSink;

    let analysis: Analysis = match &args.input {
        Some(path) => {
            let (x, y) = schema::load_points(path)
                .with_context(|| format!("failed to load points from {}", path.display()))?;
            let dataset = Dataset::new(x, y).context("invalid dataset")?;
            info!("loaded {} points from {}", dataset.len(), path.display());

            let config = SolverConfig::try_from(spec.solver)?;
            regression::analyze(&dataset, &config, &mut sink).context("analysis failed")?
        }
        None => {
            info!(
                "generating {} points around y = {}x + {}",
                spec.generator.sample_size, spec.generator.true_slope, spec.generator.true_intercept
            );
            let (_, analysis) = regression::run(&spec, &mut sink).context("analysis failed")?;
            analysis
        }
    };

    let report = analysis.report();
    log_results(&report);
    print!("{}", Summary(&report));

    let output = args.output();
    schema::write_report(&output, &report)
        .with_context(|| format!("failed to save results to {}", output.display()))?;
    println!("\nResults saved to '{}'", output.display());

    Ok(())
}
