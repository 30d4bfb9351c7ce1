//! `strip-viz`: renders the per-workload strip grids and the HTML report.
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=info`).

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info};

use strip_viz::{
    advanced::{
        dashboard::serve,
        pipeline::{ReportConfig, generate_report},
        report::WorkloadOutcome,
    },
    workload::{catalog::Catalog, locator::GlobLocator},
};

#[derive(Parser, Debug)]
#[command(name = "strip-viz", about = "Visualize scheduler decision logs as grayscale strip grids")]
struct Args {
    /// Directory holding `output_<workload>+*/task` folders
    #[arg(long, env = "STRIP_VIZ_DATA_ROOT", default_value = "tmp")]
    data_root: PathBuf,

    /// Where figures, index.html and timeline.csv are written
    #[arg(long, env = "STRIP_VIZ_OUT_DIR", default_value = "report")]
    out_dir: PathBuf,

    /// Restrict to these workloads (repeatable); defaults to 0.1 … 0.9
    #[arg(long = "workload")]
    workloads: Vec<String>,

    /// Also write timeline.csv
    #[arg(long)]
    export_csv: bool,

    /// Serve the report on 127.0.0.1:<PORT> after generating it
    #[arg(long, value_name = "PORT")]
    serve: Option<u16>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    info!("=== STRIP VIZ START ===");

    let mut catalog = Catalog::default();
    if !args.workloads.is_empty() {
        catalog = catalog.with_workloads(args.workloads.iter().cloned());
    }

    let config = ReportConfig {
        out_dir: args.out_dir.clone(),
        export_csv: args.export_csv,
        ..ReportConfig::default()
    };
    let locator = GlobLocator::new(&args.data_root);

    let outcomes = match generate_report(&catalog, &locator, &config) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            error!("report generation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for outcome in &outcomes {
        match outcome {
            WorkloadOutcome::Rendered { workload, figure, missing_columns } => {
                println!("Workload = {:<4} {} ({} missing)", workload, figure, missing_columns);
            }
            WorkloadOutcome::NoData { workload } => {
                println!("Workload = {:<4} no data", workload);
            }
        }
    }
    println!("Report: {}", config.out_dir.join("index.html").display());

    if let Some(port) = args.serve {
        println!("Serving report at http://127.0.0.1:{}", port);
        if let Err(e) = serve(&config.out_dir, port) {
            error!("report server failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    info!("=== STRIP VIZ FINISHED ===");
    ExitCode::SUCCESS
}
