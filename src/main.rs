use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;

use majuscule::load::{load_frequencies, load_vocabulary};
use majuscule::service::{CompleteRequest, CompleteResponse, Suggester};

mod cli;
use cli::display::{render_response, repl_line};
use cli::{expand_inputs, Cli, Commands};

/// Results shown per line in the REPL.
const REPL_COUNT: usize = 5;

fn main() {
    let cli = Cli::parse();
    majuscule::tracing::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Repl { .. } => run_repl(&load_suggester(&cli)?),
        Commands::Complete {
            inputs,
            count,
            debug,
            json,
            server,
        } => {
            let request = CompleteRequest {
                inputs: expand_inputs(inputs)?,
                count: *count,
                debug: *debug,
            };
            let responses = match server {
                Some(server) => complete_remote(server, &request)?,
                None => load_suggester(&cli)?.complete_all(&request),
            };
            print_responses(&responses, *json)
        }
        Commands::Serve { port } => run_serve(load_suggester(&cli)?, *port),
    }
}

fn load_suggester(cli: &Cli) -> Result<Suggester> {
    let vocabulary = load_vocabulary(&cli.dicts).context("failed to load dictionaries")?;

    let frequency = if cli.uses_frequency() {
        let table = load_frequencies(&cli.frequency).with_context(|| {
            format!("failed to load frequencies from {}", cli.frequency.display())
        })?;
        Some(table)
    } else {
        None
    };

    Ok(Suggester::new(vocabulary, frequency).with_result_ceiling(cli.result_ceiling))
}

fn run_repl(suggester: &Suggester) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        for tag in suggester.suggest(input, REPL_COUNT) {
            println!("{}", repl_line(tag.word_count(), &tag.tag()));
        }
    }
    Ok(())
}

fn print_responses(responses: &[CompleteResponse], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(responses).context("failed to encode responses")?;
        println!("{}", out);
    } else {
        for response in responses {
            println!("{}", render_response(response));
        }
    }
    Ok(())
}

#[cfg(feature = "client")]
fn complete_remote(server: &str, request: &CompleteRequest) -> Result<Vec<CompleteResponse>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = majuscule::client::Client::new(server);

    runtime
        .block_on(client.complete(request))
        .with_context(|| format!("server {} could not complete the request", server))
}

#[cfg(not(feature = "client"))]
fn complete_remote(_server: &str, _request: &CompleteRequest) -> Result<Vec<CompleteResponse>> {
    anyhow::bail!("this build has no HTTP client; rebuild with `--features client`")
}

#[cfg(feature = "server")]
fn run_serve(suggester: Suggester, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    runtime
        .block_on(majuscule::server::serve(addr, std::sync::Arc::new(suggester)))
        .with_context(|| format!("server on port {} failed", port))
}

#[cfg(not(feature = "server"))]
fn run_serve(_suggester: Suggester, _port: u16) -> Result<()> {
    anyhow::bail!("this build has no HTTP server; rebuild with `--features server`")
}
