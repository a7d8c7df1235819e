use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how much text fits into an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let capacity = stegolab_core::commands::capacity(&self.media)?;

        println!("Capacity: {} bits ({} bytes)", capacity.bits, capacity.bytes);
        println!("Longest message: {} bytes", capacity.max_message_len);

        Ok(())
    }
}
