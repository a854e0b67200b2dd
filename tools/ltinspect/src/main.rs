mod commands;
mod hex;
mod schema_json;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    decode::DecodeArgs, encode::EncodeArgs, max_precision::MaxPrecisionArgs,
    resolve::ResolveArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ltinspect", about = "Inspect logical types on schema nodes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and validate the logical type of a schema
    Resolve(ResolveArgs),
    /// Encode a decimal value for a decimal schema, printed as hex
    Encode(EncodeArgs),
    /// Decode hex bytes with a decimal schema
    Decode(DecodeArgs),
    /// Print the maximum decimal precision of a fixed size
    MaxPrecision(MaxPrecisionArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => args.run(),
        Commands::Encode(args) => args.run(),
        Commands::Decode(args) => args.run(),
        Commands::MaxPrecision(args) => args.run(),
    }
}
