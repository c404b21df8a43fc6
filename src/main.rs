//! routeatlas CLI
//!
//! Finds the cheapest route between two cities of the atlas and prints it
//! as text or JSON. Cities are selected by name or by menu index.

use clap::{Arg, ArgAction, Command};
use routeatlas::atlas::{self, AtlasFile};
use routeatlas::core::Config;
use routeatlas::graph::{shortest_path, Route, ShortestPaths};
use routeatlas::{Error, GraphError, Result};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Graph(GraphError::Unreachable { from, to })) => {
            eprintln!("No route exists between {} and {}.", from, to);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let matches = Command::new("routeatlas")
        .version(routeatlas::VERSION)
        .about("Shortest-path routing over a fixed atlas of world cities.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("atlas")
                .long("atlas")
                .value_name("FILE")
                .help("TOML atlas file (default: built-in world cities)"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("CITY")
                .help("Origin city, by name or menu index"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("CITY")
                .help("Destination city, by name or menu index"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List the cities of the atlas and exit"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FORMAT")
                .help("Output format (text, json)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)"),
        )
        .get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    // Apply CLI overrides
    apply_cli_overrides(&mut config, &matches);
    config.validate()?;

    // Initialize logging
    routeatlas::init_tracing(&config.logging)?;
    info!("Starting {} v{}", routeatlas::NAME, routeatlas::VERSION);

    // Load the atlas: a user-supplied file or the built-in world cities
    let (menu, graph) = match &config.atlas.file {
        Some(path) => {
            let file = AtlasFile::load(path)?;
            let menu = file.menu();
            (menu, file.into_graph()?)
        }
        None => (atlas::MENU.clone(), atlas::world_graph()),
    };

    if matches.get_flag("list") {
        if config.atlas.file.is_none() {
            for (index, city) in atlas::CITIES.iter().enumerate() {
                println!(
                    "{:>3}. {} ({:.2}, {:.2})",
                    index, city.name, city.lat, city.lon
                );
            }
        } else {
            for (index, name) in menu.iter().enumerate() {
                println!("{:>3}. {}", index, name);
            }
        }
        return Ok(());
    }

    let from = resolve_city(&matches, "from", &menu)?;
    let to = resolve_city(&matches, "to", &menu)?;

    let route = if config.search.early_exit {
        shortest_path(&graph, &from, &to)?
    } else {
        ShortestPaths::from_source(&graph, from.clone())?.route(&to)?
    };

    match matches.get_one::<String>("output").map(String::as_str) {
        None | Some("text") => print_route(&route),
        Some("json") => {
            let encoded = serde_json::to_string_pretty(&route)
                .map_err(|e| Error::config(format!("Failed to encode route: {}", e)))?;
            println!("{}", encoded);
        }
        Some(other) => {
            return Err(Error::config(format!(
                "Invalid output format: {}. Valid options: text, json",
                other
            )))
        }
    }

    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &clap::ArgMatches) {
    if let Some(path) = matches.get_one::<String>("atlas") {
        config.atlas.file = Some(path.into());
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }
}

/// Turn a `--from`/`--to` argument into a city name, accepting menu indices
fn resolve_city(matches: &clap::ArgMatches, arg: &str, menu: &[String]) -> Result<String> {
    let value = matches
        .get_one::<String>(arg)
        .ok_or_else(|| Error::config(format!("Missing required argument: --{}", arg)))?;

    if let Ok(index) = value.parse::<usize>() {
        return menu.get(index).cloned().ok_or_else(|| {
            Error::config(format!(
                "City index {} out of range (0-{})",
                index,
                menu.len().saturating_sub(1)
            ))
        });
    }

    if menu.iter().any(|name| name == value) {
        return Ok(value.clone());
    }

    Err(Error::Graph(GraphError::unknown_node(value)))
}

fn print_route(route: &Route<String>) {
    println!("Shortest route: {:.2} km", route.total);
    println!("{}", route.path.join(" -> "));
}
