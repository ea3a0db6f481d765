use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use sortnet::{
    layers_to_string, layers_to_string_mojo, parse_network, Network, NetworkBody, NetworkFile,
    VerifyOptions,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, LayerFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Verify {
            file,
            inputs,
            max_patterns,
            json,
        } => run_verify(&file, inputs, max_patterns, cli.verbose, json),
        Commands::Layers {
            file,
            inputs,
            format,
        } => run_layers(&file, inputs, format).map(|()| true),
        Commands::Info {
            file,
            inputs,
            verify,
        } => run_info(&file, inputs, verify, cli.verbose),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Progress events go to stderr; `--verbose` raises the default level to info.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_network(path: &str, inputs: Option<usize>) -> Result<Network> {
    let text = if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read network from stdin")?;
        raw
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
    };
    parse_network(&text, inputs).with_context(|| format!("invalid network in {}", path))
}

/// Returns whether the network is a valid sorter.
fn run_verify(
    path: &str,
    inputs: Option<usize>,
    max_patterns: Option<usize>,
    verbose: bool,
    json: bool,
) -> Result<bool> {
    let mut net = read_network(path, inputs)?;
    let options = VerifyOptions {
        verbose,
        budget: max_patterns,
    };
    let budget = options.effective_budget();

    let start = Instant::now();
    let report = net
        .verify_with(options)
        .with_context(|| format!("verification of {} aborted", path))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.valid);
    }

    let n = net.inputs();
    section_top("SORTNET VERIFY");
    section_mid("NETWORK");
    row(&field("file", path));
    row(&field("inputs", &n.to_string()));
    row(&field("comparators", &net.len().to_string()));
    row(&field("layers", &net.depth().to_string()));
    row(&field(
        "symmetric",
        if net.is_symmetric() { "yes" } else { "no" },
    ));

    section_mid("CLUSTER MERGING");
    row(&field("pattern budget", &format_count(budget as u128)));
    row(&field("merges", &report.merges.to_string()));
    row(&field(
        "peak cluster patterns",
        &format_count(report.peak_cluster_patterns as u128),
    ));
    row(&field("clusters left", &report.clusters.to_string()));
    row(&field(
        "final patterns",
        &format!(
            "{} {}",
            format_count(report.final_patterns),
            themed(GRAY, &[DIM], &format!("(sorter needs {})", n + 1))
        ),
    ));
    if let Some(witness) = report.unsorted_output {
        row(&field("unsorted output", &pattern_bits(witness, n)));
    }
    row(&field("time", &timing_ms(elapsed_ms)));
    row(&field("verdict", &verdict_badge(report.valid)));
    section_bot();

    Ok(report.valid)
}

fn run_layers(path: &str, inputs: Option<usize>, format: LayerFormat) -> Result<()> {
    let net = read_network(path, inputs)?;
    let layers = net.to_layers();
    match format {
        LayerFormat::Plain => print!("{}", layers_to_string(&layers)),
        LayerFormat::Mojo => print!("{}", layers_to_string_mojo(&layers)),
        LayerFormat::Json => {
            let file = NetworkFile {
                inputs: Some(net.inputs()),
                body: NetworkBody::Layers(layers),
            };
            println!("{}", serde_json::to_string(&file)?);
        }
    }
    Ok(())
}

fn run_info(path: &str, inputs: Option<usize>, verify: bool, verbose: bool) -> Result<bool> {
    let mut net = read_network(path, inputs)?;
    let mut valid = true;
    if verify {
        let options = VerifyOptions {
            verbose,
            budget: None,
        };
        valid = net
            .verify_with(options)
            .with_context(|| format!("verification of {} aborted", path))?
            .valid;
    }
    print!("{}", net.summary());
    Ok(valid)
}
