//! among-gen: generate Among Us wire bytes from a JSON description.
//!
//! Reads a JSON array of payload packets (the serde form of
//! [`among_core::PayloadPacket`]), runs them through the packet generator and
//! writes the result to stdout.
//!
//! # Usage
//!
//! ```text
//! among-gen [OPTIONS] [INPUT]
//!
//! Arguments:
//!   [INPUT]  JSON file to read; `-` or absent reads stdin
//!
//! Options:
//!   --config <PATH>     Generator configuration (TOML)
//!   --format <FORMAT>   hex | raw [default: hex]
//! ```
//!
//! # Example input
//!
//! ```json
//! [
//!   {"type": "JoinGame", "shape": "request", "code": 42},
//!   {"type": "GameData", "code": 42, "parts": [
//!     {"type": "Rpc", "net_id": 5, "rpc": {"kind": "CheckColor", "color": 3}}
//!   ]}
//! ]
//! ```
//!
//! Diagnostics for skipped records are logged to stderr; set `RUST_LOG` to
//! change the level (default `info`).

use std::io::{Read, Write};
use std::path::PathBuf;

use among_core::config::load_config;
use among_core::{GeneratorConfig, PacketGenerator, PayloadPacket};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// How the generated bytes are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Lowercase hex, one line.
    Hex,
    /// The bytes themselves.
    Raw,
}

#[derive(Debug, Parser)]
#[command(
    name = "among-gen",
    about = "Generate Among Us wire bytes from a JSON packet description",
    version
)]
struct Cli {
    /// JSON file holding an array of payload packets; `-` reads stdin.
    input: Option<PathBuf>,

    /// TOML file with generator settings (`length_policy`, `string_overflow`).
    ///
    /// A missing file is treated as the default configuration.
    #[arg(long, env = "AMONG_GEN_CONFIG")]
    config: Option<PathBuf>,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with generated bytes.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading generator config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let input = read_input(cli.input.as_ref())?;
    let packets: Vec<PayloadPacket> =
        serde_json::from_str(&input).context("parsing payload packets from JSON")?;

    let bytes = PacketGenerator::with_config(config)
        .generate(&packets)
        .context("generating payloads")?;
    info!(payloads = packets.len(), bytes = bytes.len(), "generated");

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&render(&bytes, cli.format))
        .context("writing output")?;
    stdout.flush().context("flushing output")?;
    Ok(())
}

/// Reads the JSON input from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("reading input from {}", p.display())),
        _ => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("reading input from stdin")?;
            Ok(s)
        }
    }
}

fn render(bytes: &[u8], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Raw => bytes.to_vec(),
        OutputFormat::Hex => {
            let mut out: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
            out.push('\n');
            out.into_bytes()
        }
    }
}
