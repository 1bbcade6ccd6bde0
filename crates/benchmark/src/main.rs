//! U-Assign Benchmark Runner CLI

use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;
use u_assign_benchmark::{BenchmarkConfig, BenchmarkResult, BenchmarkRunner, Instance, InstanceParser};
use u_assign_core::Config;

#[derive(Parser)]
#[command(name = "assign-bench")]
#[command(about = "Benchmark runner for the U-Assign Hungarian solver")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Keep greedy covers even when they overstate the line count
    #[arg(long, global = true)]
    no_repair: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the instances in a JSON file
    Solve {
        /// Path to the JSON instance file
        file: PathBuf,

        /// Verify costs against brute force when no optimum is given
        #[arg(long)]
        verify: bool,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Generate and solve random instances
    Random {
        /// Matrix dimension
        #[arg(short, long, default_value = "8")]
        dim: usize,

        /// Number of instances
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Largest cost entry
        #[arg(short, long, default_value = "100")]
        max_cost: u32,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of runs per instance
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Verify costs against brute force (dim <= 8)
        #[arg(long)]
        verify: bool,

        /// Write the generated instances to this JSON file
        #[arg(long)]
        save_instances: Option<PathBuf>,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet)?;

    let solver_config = Config::new().with_repair_cover(!cli.no_repair);

    match cli.command {
        Commands::Solve {
            file,
            verify,
            output,
            csv,
        } => {
            let instances = InstanceParser::new().parse_file(&file)?;
            info!("loaded {} instances from {}", instances.len(), file.display());

            let config = BenchmarkConfig::new()
                .with_solver_config(solver_config)
                .with_verify(verify);
            let results = BenchmarkRunner::new(config).run_instances(&instances);

            for run in &results.runs {
                println!("{}: {}", run.instance, format_assignment(&run.assignment));
            }
            println!();
            finish(&results, output, csv)?;
        }

        Commands::Random {
            dim,
            count,
            max_cost,
            seed,
            runs,
            verify,
            save_instances,
            output,
            csv,
        } => {
            let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
            println!("Seed: {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);

            let instances = (0..count)
                .map(|i| Instance::random(format!("random-{}x{}-{}", dim, dim, i), dim, max_cost, &mut rng))
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(path) = save_instances {
                std::fs::write(&path, serde_json::to_string_pretty(&instances)?)?;
                println!("Instances saved to: {}", path.display());
            }

            let config = BenchmarkConfig::new()
                .with_solver_config(solver_config)
                .with_runs_per_instance(runs)
                .with_verify(verify);
            let results = BenchmarkRunner::new(config).run_instances(&instances);
            finish(&results, output, csv)?;
        }
    }

    Ok(())
}

fn finish(
    results: &BenchmarkResult,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
) -> anyhow::Result<()> {
    results.print_summary();

    if let Some(path) = output {
        results.save_json(&path)?;
        println!("Results saved to: {}", path.display());
    }

    if let Some(path) = csv {
        results.save_csv(&path)?;
        println!("CSV saved to: {}", path.display());
    }

    let failures = results.failures().len();
    if failures > 0 {
        anyhow::bail!("{} runs failed", failures);
    }
    Ok(())
}

fn format_assignment(assignment: &[Option<usize>]) -> String {
    let cells: Vec<String> = assignment
        .iter()
        .map(|col| col.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()))
        .collect();
    format!("[{}]", cells.join(", "))
}

fn init_logger(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger init failed: {e}"))
}
