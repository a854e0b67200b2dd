use anyhow::Result;
use clap::Args;
use logical_types_core::max_precision_for_fixed;

#[derive(Args)]
pub struct MaxPrecisionArgs {
    /// Fixed size in bytes
    size: usize,
}

impl MaxPrecisionArgs {
    pub fn run(self) -> Result<()> {
        println!("{}", max_precision_for_fixed(self.size));
        Ok(())
    }
}
