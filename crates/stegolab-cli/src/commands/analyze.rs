use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Compares a cover image with its stego image and runs the chi-square detection
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// The original image
    #[arg(long, value_name = "cover image", required = true)]
    pub cover: PathBuf,

    /// The image carrying the message
    #[arg(long, value_name = "stego image", required = true)]
    pub stego: PathBuf,

    /// Extracted message and report are stored below `<dir>/<cover name>/`
    #[arg(long = "output-dir", value_name = "dir", default_value = "./results")]
    pub output_dir: PathBuf,
}

impl AnalyzeArgs {
    pub fn run(self) -> CliResult<()> {
        let report = stegolab_core::commands::analyze(
            &self.cover,
            &self.stego,
            Some(self.output_dir.as_path()),
        )?;

        println!("\nAnalysis results:\n{report}");

        Ok(())
    }
}
