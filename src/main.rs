use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sortbench::{
    BenchmarkConfig, BenchmarkRunner, Config, ContainerKind, RatingField, SortAlgorithm,
};
use std::path::PathBuf;

/// Benchmark list, stack and queue containers sorted with counting sort.
///
/// Each pass loads ratings into a container, extracts its canonical sequence,
/// sorts it, rebuilds the container and verifies the order.
///
/// EXAMPLES:
///     sortbench run --input ratings.csv
///     sortbench run --volumes 1000,10000 --kinds linear-queue,dynamic-queue
///     sortbench run --config bench.json --json
///     sortbench kinds
///
/// ENVIRONMENT VARIABLES:
///     SORTBENCH_INPUT, SORTBENCH_VOLUMES, SORTBENCH_KINDS, SORTBENCH_ALGORITHM,
///     SORTBENCH_REPETITIONS, SORTBENCH_READER_FIELD, ...
///     RUST_LOG          Log filter (overrides -v)
#[derive(Parser)]
#[command(name = "sortbench")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark and print a summary table
    #[command(visible_alias = "r")]
    Run {
        /// JSON configuration file; environment variables are used otherwise
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
        /// Ratings file
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
        /// Element counts, comma separated
        #[arg(long, value_delimiter = ',')]
        volumes: Option<Vec<usize>>,
        /// Passes per container kind and volume
        #[arg(long, short = 'n')]
        repetitions: Option<usize>,
        /// Container kinds, comma separated
        #[arg(long, short = 'k', value_delimiter = ',')]
        kinds: Option<Vec<ContainerKind>>,
        /// Sort algorithm (counting or radix)
        #[arg(long, short = 'a')]
        algorithm: Option<SortAlgorithm>,
        /// Column to sort (rating, movie-id, user-id, timestamp)
        #[arg(long, short = 'f')]
        field: Option<RatingField>,
        /// Skip the sortedness check after rebuild
        #[arg(long)]
        no_verify: bool,
        /// Report verification failures instead of aborting
        #[arg(long)]
        lenient: bool,
        /// Print the report as JSON
        #[arg(long, env = "SORTBENCH_JSON")]
        json: bool,
        /// Also write the JSON report to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the container kinds
    Kinds,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    sortbench::init();

    match cli.command {
        Commands::Run {
            config,
            input,
            volumes,
            repetitions,
            kinds,
            algorithm,
            field,
            no_verify,
            lenient,
            json,
            output,
        } => {
            let mut bench_config = match &config {
                Some(path) => BenchmarkConfig::load_from_file(path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => BenchmarkConfig::from_env().context("reading SORTBENCH_* environment")?,
            };

            // Command-line flags override file and environment values
            if let Some(input) = input {
                bench_config.input_path = input;
            }
            if let Some(volumes) = volumes {
                bench_config.volumes = volumes;
            }
            if let Some(repetitions) = repetitions {
                bench_config.repetitions = repetitions;
            }
            if let Some(kinds) = kinds {
                bench_config.kinds = kinds;
            }
            if let Some(algorithm) = algorithm {
                bench_config.algorithm = algorithm;
            }
            if let Some(field) = field {
                bench_config.reader.field = field;
            }
            if no_verify {
                bench_config.verify = false;
            }
            if lenient {
                bench_config.strict = false;
            }

            let mut runner = BenchmarkRunner::new(bench_config).context("invalid configuration")?;
            let report = runner.run().with_context(|| {
                format!("benchmark on {}", runner.config().input_path.display())
            })?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report);
            }
            if let Some(path) = output {
                report
                    .save_json(&path)
                    .with_context(|| format!("writing report to {}", path.display()))?;
            }
        }
        Commands::Kinds => {
            for kind in ContainerKind::ALL {
                let capacity = if kind.is_linear() { "fixed" } else { "unbounded" };
                println!("{:<14} {:<10} {}", kind.as_str(), capacity, kind.name());
            }
        }
    }

    Ok(())
}
