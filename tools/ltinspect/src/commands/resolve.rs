use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use logical_types_core::{LogicalTypeRegistry, ResolvePolicy};

use crate::schema_json::load_schema;

#[derive(Args)]
pub struct ResolveArgs {
    /// Path to a JSON schema node (`-` for stdin)
    schema: PathBuf,

    /// Treat unregistered logicalType names as absent instead of failing
    #[arg(long)]
    lenient: bool,

    /// Skip the physical type check
    #[arg(long)]
    no_validate: bool,
}

impl ResolveArgs {
    pub fn run(self) -> Result<()> {
        let schema = load_schema(&self.schema)?;
        let policy = if self.lenient {
            ResolvePolicy::Lenient
        } else {
            ResolvePolicy::Strict
        };

        match LogicalTypeRegistry::global().resolve(&schema, policy)? {
            Some(logical_type) => {
                if !self.no_validate {
                    logical_type.validate(&schema)?;
                }
                println!("{logical_type} on {}", schema.physical_type);
            }
            None => println!("no logical type on {}", schema.physical_type),
        }
        Ok(())
    }
}
