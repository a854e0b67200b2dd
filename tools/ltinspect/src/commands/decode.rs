use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use logical_types_decimal::DecimalCodec;

use crate::{commands::resolve_decimal, hex::from_hex, schema_json::load_schema};

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to a JSON decimal schema node (`-` for stdin)
    schema: PathBuf,

    /// Big-endian two's-complement bytes as hex, e.g. 0012d687
    #[arg(long)]
    hex: String,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let schema = load_schema(&self.schema)?;
        let decimal = resolve_decimal(&schema)?;
        let bytes = from_hex(&self.hex)?;

        println!("{}", decimal.decode(&bytes)?);
        Ok(())
    }
}
