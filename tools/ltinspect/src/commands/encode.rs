use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use clap::Args;
use logical_types_decimal::DecimalCodec;
use rust_decimal::Decimal;

use crate::{commands::resolve_decimal, hex::to_hex, schema_json::load_schema};

#[derive(Args)]
pub struct EncodeArgs {
    /// Path to a JSON decimal schema node (`-` for stdin)
    schema: PathBuf,

    /// Decimal value to encode, e.g. 12345.67
    #[arg(short, long, allow_hyphen_values = true)]
    value: String,
}

impl EncodeArgs {
    pub fn run(self) -> Result<()> {
        let schema = load_schema(&self.schema)?;
        let decimal = resolve_decimal(&schema)?;
        let value = Decimal::from_str(&self.value)
            .with_context(|| format!("invalid decimal value '{}'", self.value))?;

        let bytes = decimal.encode(&value, schema.physical_type)?;
        println!("{}", to_hex(&bytes));
        Ok(())
    }
}
