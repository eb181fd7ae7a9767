use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use foodnet_engine::{
    allocate, allocate_exact, analyze, build_network_with_config, match_donations,
    plan_routes_with_config, NetworkHandle,
};
use foodnet_structs::{
    config::EngineConfig,
    core::{CargoItem, Donation, NodeDefinition, RecipientUrgency},
};
use foodnet_utils::{compress_obj, jsonify, load_json, u8s_from_str};
use serde::Serialize;
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn network_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(<NODES> "Node definitions json string or path to json file")
            .value_parser(clap::value_parser!(String)),
    )
    .arg(
        arg!(--seed [SEED] "A string hashed into the congestion seed. Omit for a random network")
            .value_parser(clap::value_parser!(String)),
    )
    .arg(
        arg!(--config [CONFIG] "Engine config json string or path to json file")
            .value_parser(clap::value_parser!(String)),
    )
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
            .value_parser(clap::value_parser!(PathBuf)),
    )
    .arg(
        arg!(--compress [COMPRESS] "If output file is set, the output data will be compressed as zlib")
            .action(ArgAction::SetTrue),
    )
}

fn cli() -> Command {
    Command::new("foodnet-runtime")
        .about("Plans food distribution routes and loads")
        .arg_required_else_help(true)
        .subcommand(output_args(network_args(
            Command::new("plan_routes").about("Plans distribution, collection and multi-stop routes"),
        )))
        .subcommand(output_args(network_args(
            Command::new("spanning_tree").about("Computes the minimum-cost backbone from the hub"),
        )))
        .subcommand(output_args(
            network_args(Command::new("shortest_path").about("Finds the cheapest path between two nodes"))
                .arg(arg!(<SOURCE> "Source node id").value_parser(clap::value_parser!(String)))
                .arg(arg!(<TARGET> "Target node id").value_parser(clap::value_parser!(String))),
        ))
        .subcommand(output_args(network_args(
            Command::new("analyze").about("Summarizes the structure of the network"),
        )))
        .subcommand(output_args(
            Command::new("allocate")
                .about("Selects cargo for a vehicle of the given capacity")
                .allow_negative_numbers(true)
                .arg(
                    arg!(<ITEMS> "Cargo items json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<CAPACITY> "Vehicle capacity").value_parser(clap::value_parser!(i64)))
                .arg(
                    arg!(--exact [EXACT] "Solve exactly by dynamic programming instead of greedily")
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(output_args(
            Command::new("match_donations")
                .about("Pairs the largest donations with the most urgent recipients")
                .arg(
                    arg!(<DONATIONS> "Donations json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RECIPIENTS> "Recipient urgencies json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        ))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("plan_routes", sub_m)) => plan_routes(sub_m),
        Some(("spanning_tree", sub_m)) => spanning_tree(sub_m),
        Some(("shortest_path", sub_m)) => shortest_path(sub_m),
        Some(("analyze", sub_m)) => analyze_network(sub_m),
        Some(("allocate", sub_m)) => allocate_cargo(sub_m),
        Some(("match_donations", sub_m)) => donation_matches(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn plan_routes(sub_m: &ArgMatches) -> Result<()> {
    let (network, config) = load_network(sub_m)?;
    let routes = plan_routes_with_config(&network, &config.planner)?;
    write_output(sub_m, &routes)
}

pub fn spanning_tree(sub_m: &ArgMatches) -> Result<()> {
    let (network, _) = load_network(sub_m)?;
    let tree = foodnet_engine::minimum_spanning_tree(&network)?;
    write_output(sub_m, &tree)
}

pub fn shortest_path(sub_m: &ArgMatches) -> Result<()> {
    let (network, _) = load_network(sub_m)?;
    let result = network.shortest_path(
        required::<String>(sub_m, "SOURCE")?,
        required::<String>(sub_m, "TARGET")?,
    )?;
    write_output(sub_m, &result)
}

pub fn analyze_network(sub_m: &ArgMatches) -> Result<()> {
    let (network, _) = load_network(sub_m)?;
    write_output(sub_m, &analyze(&network))
}

pub fn allocate_cargo(sub_m: &ArgMatches) -> Result<()> {
    let items: Vec<CargoItem> = load_json(required::<String>(sub_m, "ITEMS")?)?;
    let capacity = *required::<i64>(sub_m, "CAPACITY")?;
    let result = if sub_m.get_flag("exact") {
        allocate_exact(&items, capacity)
    } else {
        allocate(&items, capacity)
    };
    write_output(sub_m, &result)
}

pub fn donation_matches(sub_m: &ArgMatches) -> Result<()> {
    let donations: Vec<Donation> = load_json(required::<String>(sub_m, "DONATIONS")?)?;
    let recipients: Vec<RecipientUrgency> = load_json(required::<String>(sub_m, "RECIPIENTS")?)?;
    write_output(sub_m, &match_donations(&donations, &recipients))
}

fn required<'a, T>(sub_m: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    sub_m
        .get_one::<T>(id)
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn load_network(sub_m: &ArgMatches) -> Result<(NetworkHandle, EngineConfig)> {
    let nodes: Vec<NodeDefinition> = load_json(required::<String>(sub_m, "NODES")?)?;
    let config: EngineConfig = match sub_m.get_one::<String>("config") {
        Some(config) => load_json(config)?,
        None => EngineConfig::default(),
    };
    let seed = sub_m.get_one::<String>("seed").map(|s| u8s_from_str(s));
    let network = build_network_with_config(nodes, &config.network, seed)?;
    info!(
        "loaded network with {} nodes, hub `{}`",
        network.num_nodes(),
        network.hub().id
    );
    Ok((network, config))
}

fn write_output<T: Serialize>(sub_m: &ArgMatches, output_data: &T) -> Result<()> {
    match sub_m.get_one::<PathBuf>("output") {
        Some(path) => {
            if sub_m.get_flag("compress") {
                fs::write(path, compress_obj(output_data)?)?;
            } else {
                fs::write(path, jsonify(output_data)?)?;
            }
            info!("output_data written to: {:?}", path);
        }
        None => println!("{}", jsonify(output_data)?),
    }
    Ok(())
}
