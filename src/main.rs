use clap::{Parser, ValueEnum};
use nqueens_search::error::ConfigError;
use nqueens_search::ga::{GaConfig, PopulationSearch};
use nqueens_search::sa::{AnnealingSearch, SaConfig};
use nqueens_search::trial::{TrialConfig, TrialRunner, TrialSummary};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Simulated annealing
    Sa,
    /// Genetic algorithm
    Ga,
}

/// Solve N-Queens repeatedly and report solve rate, iterations, and run time.
#[derive(Debug, Parser)]
#[command(name = "nqueens", version, about)]
struct Cli {
    /// Search strategy to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Number of queens (board size)
    #[arg(short = 'n', long, default_value_t = 8)]
    queens: usize,

    /// Number of independent trials
    #[arg(short, long, default_value_t = 100)]
    trials: usize,

    /// Iteration budget per trial (generations for the genetic algorithm)
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only print the summary, not every final board
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<TrialSummary, ConfigError> {
    let runner = TrialRunner::new(
        TrialConfig::default()
            .with_trials(cli.trials)
            .with_render_board(!cli.quiet),
    )?;

    match cli.algorithm {
        Algorithm::Sa => {
            println!("Running Simulated Annealing.");
            let mut config = SaConfig::default().with_max_iterations(cli.iterations);
            config.seed = cli.seed;
            let mut search = AnnealingSearch::new(cli.queens, config)?;
            Ok(runner.run(&mut search))
        }
        Algorithm::Ga => {
            println!("Running Genetic Algorithm.");
            let mut config = GaConfig::default().with_max_generations(cli.iterations);
            config.seed = cli.seed;
            let mut search = PopulationSearch::new(cli.queens, config)?;
            Ok(runner.run(&mut search))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    match run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
