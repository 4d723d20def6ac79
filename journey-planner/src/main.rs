use std::process::ExitCode;

use journey_planner::config::AppConfig;
use journey_planner::network::SubwayMap;
use journey_planner::network::fixture::london_underground;
use journey_planner::planner::{Optimise, SearchConfig};
use journey_planner::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  journey-planner [serve]                               Start the HTTP server
  journey-planner routes <from> <to> [duration|changes] Print routes between two stations";

enum Command {
    Serve,
    Routes {
        from: String,
        to: String,
        optimise: Option<Optimise>,
    },
}

impl Command {
    fn parse(args: &[&str]) -> Result<Self, String> {
        match args {
            [] | ["serve"] => Ok(Command::Serve),
            ["routes", from, to] => Ok(Command::Routes {
                from: from.to_string(),
                to: to.to_string(),
                optimise: None,
            }),
            ["routes", from, to, optimise] => Ok(Command::Routes {
                from: from.to_string(),
                to: to.to_string(),
                optimise: Some(optimise.parse::<Optimise>().map_err(|e| e.to_string())?),
            }),
            _ => Err(USAGE.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let network = match &config.network_path {
        Some(path) => match SubwayMap::load(path) {
            Ok(network) => network,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load network");
                return ExitCode::FAILURE;
            }
        },
        None => london_underground(),
    };
    info!(
        stations = network.stations().len(),
        lines = network.lines().len(),
        segments = network.len(),
        "Loaded network"
    );

    match command {
        Command::Serve => serve(network, config).await,
        Command::Routes { from, to, optimise } => {
            print_routes(&network, &from, &to, optimise, &config.search)
        }
    }
}

/// Print ranked route summaries, one blank line apart.
fn print_routes(
    network: &SubwayMap,
    from: &str,
    to: &str,
    optimise: Option<Optimise>,
    search: &SearchConfig,
) -> ExitCode {
    let (origin, destination) = match (network.station(from), network.station(to)) {
        (Ok(origin), Ok(destination)) => (origin, destination),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let routes = network.routes_optimised(origin, destination, optimise.unwrap_or(search.optimise));
    if routes.is_empty() {
        println!("No routes from {origin} to {destination}");
    }
    for route in routes.iter().take(search.max_results) {
        println!("{route}\n");
    }
    ExitCode::SUCCESS
}

async fn serve(network: SubwayMap, config: AppConfig) -> ExitCode {
    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    let app = create_router(AppState::new(network, config.search));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Journey planner listening on http://{addr}");
    info!("  GET  /routes?from=..&to=..&optimise=duration|changes");
    info!("  GET  /stations, /lines, /network");
    info!("  POST /stations/:name/close|open, /lines/:name/suspend|resume");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
