use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file instead of being printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message =
            stegolab_core::commands::unveil(&self.media, self.output_file.as_deref())?;

        if self.output_file.is_none() {
            println!("\nUnveiled message:\n{message}");
        }

        Ok(())
    }
}
