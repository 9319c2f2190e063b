use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use vrp_plot::instance::ProblemConfig;
use vrp_plot::plot::{plot_locations, plot_solution, PlotConfig};
use vrp_plot::report::SolutionReport;
use vrp_plot::routing::{FirstSolutionStrategy, LocalSearchMetaheuristic, SearchParameters};
use vrp_plot::RoutingError;

/// Solve a vehicle routing problem that balances route lengths, and plot it.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Problem file (JSON). Defaults to the built-in 17-location demo.
    #[arg(short, long)]
    problem: Option<PathBuf>,

    /// path-cheapest-arc, savings or parallel-cheapest-insertion
    #[arg(long, default_value_t = FirstSolutionStrategy::PathCheapestArc)]
    first_solution: FirstSolutionStrategy,

    /// greedy-descent, guided-local-search or simulated-annealing
    #[arg(long, default_value_t = LocalSearchMetaheuristic::GreedyDescent)]
    metaheuristic: LocalSearchMetaheuristic,

    /// Search time limit in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Search iteration limit
    #[arg(long)]
    iterations: Option<usize>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value = "locations.svg")]
    locations_plot: PathBuf,

    #[arg(long, default_value = "solution.svg")]
    solution_plot: PathBuf,

    /// Skip both plots
    #[arg(long)]
    no_plot: bool,

    /// Write the solution as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn search_parameters(&self) -> anyhow::Result<SearchParameters> {
        let mut params = SearchParameters::default()
            .with_first_solution_strategy(self.first_solution)
            .with_metaheuristic(self.metaheuristic)
            .with_seed(self.seed)
            .with_log_search(self.debug);
        if let Some(secs) = self.time_limit {
            let limit = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid time limit: {secs}"))?;
            params = params.with_time_limit(limit);
        }
        if let Some(iterations) = self.iterations {
            params = params.with_iteration_limit(iterations);
        }
        Ok(params)
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let level = if cli.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&cli, &mut io::stdout().lock())
}

/// Loads, solves, reports to `out`, and plots.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = match &cli.problem {
        Some(path) => ProblemConfig::from_path(path)
            .with_context(|| format!("failed to load problem {}", path.display()))?,
        None => ProblemConfig::demo(),
    };
    let plot_config = PlotConfig::default();

    if !cli.no_plot {
        plot_locations(
            &config.locations(),
            config.depot,
            &cli.locations_plot,
            &plot_config,
        )?;
    }

    let (model, locations) = config.build()?;
    let params = cli.search_parameters()?;

    let solution = match model.solve_with_parameters(&params) {
        Ok(solution) => solution,
        Err(RoutingError::NoSolution) => {
            writeln!(out, "No solution found !")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    write!(out, "{}", SolutionReport(&solution))?;

    if let Some(path) = &cli.output {
        fs::write(path, serde_json::to_string_pretty(&solution)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "solution written");
    }
    if !cli.no_plot {
        plot_solution(&locations, &solution, &cli.solution_plot, &plot_config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrp_plot::models::Solution;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vrp-plot-cli-{}-{name}", std::process::id()))
    }

    fn run_with(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("vrp-plot").chain(args.iter().copied()))
            .expect("valid arguments");
        let mut out = Vec::new();
        run(&cli, &mut out).expect("ran");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn test_no_solution_message() {
        let problem = temp_path("tight.json");
        fs::write(
            &problem,
            r#"{"locations": [[0, 0], [10, 0], [0, 10]], "num_vehicles": 2, "max_route_distance": 5}"#,
        )
        .expect("written");
        let output = temp_path("tight-solution.json");

        let report = run_with(&[
            "--problem",
            problem.to_str().expect("utf-8 path"),
            "--output",
            output.to_str().expect("utf-8 path"),
            "--no-plot",
        ]);
        assert_eq!(report, "No solution found !\n");
        assert!(!output.exists());
        fs::remove_file(&problem).ok();
    }

    #[test]
    fn test_demo_report_and_output() {
        let output = temp_path("demo-solution.json");
        let report = run_with(&["--output", output.to_str().expect("utf-8 path"), "--no-plot"]);
        assert!(report.starts_with("Objective: 161408\n"));
        assert!(report.ends_with("Maximum of the route distances: 1552m\n"));
        assert_eq!(report.matches("Route for vehicle").count(), 4);

        let written: Solution =
            serde_json::from_str(&fs::read_to_string(&output).expect("written")).expect("json");
        assert_eq!(written.objective(), 161408);
        assert_eq!(written.num_served(), 16);
        fs::remove_file(&output).ok();
    }

    #[test]
    fn test_search_parameters_from_flags() {
        let cli = Cli::try_parse_from([
            "vrp-plot",
            "--first-solution",
            "savings",
            "--metaheuristic",
            "guided-local-search",
            "--time-limit",
            "0.5",
            "--iterations",
            "20",
        ])
        .expect("valid arguments");
        let params = cli.search_parameters().expect("valid");
        assert_eq!(params.first_solution_strategy, FirstSolutionStrategy::Savings);
        assert_eq!(params.time_limit, Some(Duration::from_millis(500)));
        assert_eq!(params.iteration_budget(), Some(20));

        let cli = Cli::try_parse_from(["vrp-plot", "--time-limit=-1"]).expect("parsed");
        assert!(cli.search_parameters().is_err());
    }
}
