use std::path::PathBuf;

use clap::Args;
use stegolab_core::api::hide::default_output_path;
use stegolab_core::CodecOptions;

use crate::cli::format_psnr;
use crate::CliResult;

/// Hides a text message in a PNG or JPEG image, the result is always stored as PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, defaults to `<name>_stego.png` next to the carrier
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Fraction of the capacity the message may occupy, in (0, 1]
    #[arg(long, value_name = "fraction", default_value_t = 1.0)]
    pub payload: f64,

    /// Refuse messages exceeding the payload instead of truncating them
    #[arg(long)]
    pub strict: bool,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let output = self
            .write_to_file
            .unwrap_or_else(|| default_output_path(&self.media));
        let options = CodecOptions::default()
            .with_payload(self.payload)
            .with_strict_capacity(self.strict);
        let report =
            stegolab_core::commands::hide(&self.media, &output, &self.message, options)?;

        println!(
            "Capacity: {} bits ({} bytes)",
            report.capacity_bits,
            report.capacity_bits / 8
        );
        println!("Payload: {}%", report.payload * 100.0);
        if report.truncated() {
            log::warn!("the message did not fit and was truncated");
        }
        println!("Message hidden: {}", report.output.display());
        println!("PSNR: {}", format_psnr(report.psnr));
        println!("SSIM: {:.6}", report.ssim);

        Ok(())
    }
}
