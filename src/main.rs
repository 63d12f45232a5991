use micesim::{ScenarioConfig, Scenario};
use micesim::{energy_history, relative_energy_drift, write_trajectories};
use micesim::{bench_kernels, bench_leapfrog};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "mice.yaml")]
    file_name: String,

    /// Write trajectories to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep every n-th frame in the CSV
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Run the kernel and integrator timing sweeps instead
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_kernels();
        bench_leapfrog();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let t0 = Instant::now();
    let traj = scenario.run()?;
    info!("integrated {} frames in {:.3} s", traj.frames(), t0.elapsed().as_secs_f64());

    let p = &scenario.parameters;
    let history = energy_history(&traj.massive, &scenario.system.masses, p.dt, p.epsilon)?;
    info!("massive-body energy drift: {:e}", relative_energy_drift(&history));

    if let Some(path) = args.output {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_trajectories(BufWriter::new(file), &traj, p.dt, args.every)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
